// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Sharebar.

use thiserror::Error;

use crate::types::{ElementId, NativeCommand};

/// Top-level error type for all Sharebar operations.
///
/// Nothing here is fatal to the hosting page. Missing metadata and unknown
/// channels are not errors at all; they resolve to empty strings and the
/// no-op sentinel respectively.
#[derive(Debug, Error)]
pub enum ShareError {
    // -- Widget / dispatch table --
    #[error("element {0} has not been initialised as a share bar")]
    UnknownElement(ElementId),

    // -- Collaborators --
    #[error("code panel rendering failed: {0}")]
    CodePanel(String),

    // -- Input --
    #[error("invalid share options: {0}")]
    InvalidOptions(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failure of a native share bridge invocation.
///
/// Returned as a value from `NativeBridge::invoke`; the dispatch engine
/// matches on it to show a notice and degrade to the direct-link path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// No host app is listening (plain mobile browser, desktop, CI).
    #[error("native share bridge is not available")]
    Unavailable,

    /// The host app refused or does not support the command.
    #[error("native share command `{command}` was rejected: {reason}")]
    Rejected {
        command: NativeCommand,
        reason: String,
    },
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ShareError>;
