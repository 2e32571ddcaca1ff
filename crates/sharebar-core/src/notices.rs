// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Plain-language notices shown to the visitor when a share action degrades.

use crate::error::{BridgeError, ShareError};

/// A short, non-blocking message for the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// What went wrong, in plain words.
    pub message: String,
    /// What happens next or what to try.
    pub suggestion: String,
    /// Technical detail, kept for support requests.
    pub detail: String,
}

impl Notice {
    /// Single-line rendering for alert-style surfaces.
    pub fn text(&self) -> String {
        format!("{} {} ({})", self.message, self.suggestion, self.detail)
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}

/// Convert a bridge failure into a notice. The share link opens afterwards
/// either way, so every suggestion says so.
pub fn humanize_bridge_error(err: &BridgeError) -> Notice {
    match err {
        BridgeError::Unavailable => Notice {
            message: "Sharing through the app isn't available here.".into(),
            suggestion: "We'll open the share page instead.".into(),
            detail: err.to_string(),
        },
        BridgeError::Rejected { command, .. } => Notice {
            message: format!("The app couldn't complete the {command} share."),
            suggestion: "We'll open the share page instead.".into(),
            detail: err.to_string(),
        },
    }
}

/// Convert an engine error into a notice.
pub fn humanize_error(err: &ShareError) -> Notice {
    match err {
        ShareError::UnknownElement(_) => Notice {
            message: "This share button isn't ready yet.".into(),
            suggestion: "Reload the page and try again.".into(),
            detail: err.to_string(),
        },
        ShareError::CodePanel(_) => Notice {
            message: "We couldn't draw the scan code.".into(),
            suggestion: "Copy the page link and share it manually.".into(),
            detail: err.to_string(),
        },
        ShareError::InvalidOptions(_) | ShareError::Serialization(_) => Notice {
            message: "The share settings look wrong.".into(),
            suggestion: "Check the share configuration for typos.".into(),
            detail: err.to_string(),
        },
        ShareError::Io(_) => Notice {
            message: "The share settings couldn't be read.".into(),
            suggestion: "Check the file exists and is readable.".into(),
            detail: err.to_string(),
        },
    }
}
