// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for the engine's collaborators.

use sharebar_core::error::{BridgeError, Result};
use sharebar_core::notices::Notice;
use sharebar_core::types::{ChannelId, CodePanelRequest, ElementId, NativeCommand, SharePayload};

/// Host-app share capability (e.g. a chat app's JS-SDK or a native shell).
pub trait NativeBridge {
    /// Human-readable bridge name (e.g. "WeChat JS-SDK", "Desktop (stub)").
    fn platform_name(&self) -> &str;

    /// Perform the share action for `command`.
    ///
    /// Returns `Err(BridgeError::Unavailable)` when no host app is present
    /// and `Err(BridgeError::Rejected)` when the host refused the command.
    fn invoke(
        &self,
        command: NativeCommand,
        payload: &SharePayload,
    ) -> std::result::Result<(), BridgeError>;
}

/// Draws a scannable code for a piece of text.
pub trait CodePanelRenderer {
    /// Render the code and return the markup/text to place in the panel.
    fn render(&self, request: &CodePanelRequest) -> Result<String>;
}

/// The page hosting the share bar.
pub trait ShareHost {
    /// Open `url` in a new browsing context.
    fn open_url(&self, url: &str);

    /// Show or hide the code panel under `channel`'s icon in `element`.
    fn set_panel_open(&self, element: ElementId, channel: &ChannelId, open: bool);

    /// Show a non-blocking notice to the visitor.
    fn notify(&self, notice: &Notice);
}
