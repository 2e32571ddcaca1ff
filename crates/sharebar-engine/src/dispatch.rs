// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dispatch engine: what one click on a channel icon does.
//
//   desktop ──────────────────────────────► direct link
//   mobile ── no native command ──────────► direct link
//   mobile ── native command ── bridge ok ► done
//                              └ bridge err ► notice, then direct link
//
// Direct link opens the URL, or reveals the clicked icon's code panel for
// no-op channels.

use sharebar_bridge::traits::{NativeBridge, ShareHost};
use sharebar_core::error::BridgeError;
use sharebar_core::notices::humanize_bridge_error;
use sharebar_core::types::{
    BuiltShare, ElementId, EnvironmentClass, NativeCommand, ShareContext, SharePayload, ShareUrl,
    channels,
};
use tracing::{info, warn};

/// What the direct-link path did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectLink {
    /// Navigated to the share URL in a new browsing context.
    Opened,
    /// No URL to open; the code panel under the clicked icon was revealed.
    PanelRevealed,
}

/// Result of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Direct(DirectLink),
    /// The host app accepted the native share.
    Bridged(NativeCommand),
    /// The bridge failed; a notice was shown and the direct link ran.
    FellBack {
        command: NativeCommand,
        error: BridgeError,
        link: DirectLink,
    },
}

/// Native command for a channel, if the host app has one.
pub fn native_command_for(channel: &str) -> Option<NativeCommand> {
    match channel {
        channels::WECHAT => Some(NativeCommand::WechatFriend),
        channels::TIMELINE => Some(NativeCommand::WechatTimeline),
        channels::WEIBO => Some(NativeCommand::Weibo),
        channels::QQ => Some(NativeCommand::QqFriend),
        channels::QZONE => Some(NativeCommand::QZone),
        _ => None,
    }
}

/// Handle one activation of `share.channel` on `element`.
pub fn dispatch(
    element: ElementId,
    share: &BuiltShare,
    context: &ShareContext,
    environment: &EnvironmentClass,
    bridge: &dyn NativeBridge,
    host: &dyn ShareHost,
) -> DispatchOutcome {
    let channel = share.channel.as_str();

    if !environment.is_mobile_viewport {
        return DispatchOutcome::Direct(direct_link(element, share, host));
    }

    let Some(command) = native_command_for(channel) else {
        info!(%element, channel, "no native command; degrading to direct link");
        return DispatchOutcome::Direct(direct_link(element, share, host));
    };

    if matches!(command, NativeCommand::WechatFriend | NativeCommand::WechatTimeline) {
        host.set_panel_open(element, &share.channel, false);
    }

    let payload = SharePayload::from_context(context);
    match bridge.invoke(command, &payload) {
        Ok(()) => {
            info!(%element, channel, %command, bridge = bridge.platform_name(), "shared via native bridge");
            DispatchOutcome::Bridged(command)
        }
        Err(error) => {
            warn!(%element, channel, %command, %error, "native share failed; falling back to link");
            host.notify(&humanize_bridge_error(&error));
            let link = direct_link(element, share, host);
            DispatchOutcome::FellBack {
                command,
                error,
                link,
            }
        }
    }
}

fn direct_link(element: ElementId, share: &BuiltShare, host: &dyn ShareHost) -> DirectLink {
    match &share.url {
        ShareUrl::NoOp => {
            host.set_panel_open(element, &share.channel, true);
            DirectLink::PanelRevealed
        }
        ShareUrl::Direct(url) => {
            host.open_url(url);
            DirectLink::Opened
        }
    }
}
