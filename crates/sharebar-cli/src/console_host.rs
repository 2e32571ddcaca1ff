// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Terminal stand-in for the page hosting a share bar.

use std::io::Write;

use sharebar_bridge::traits::ShareHost;
use sharebar_core::notices::Notice;
use sharebar_core::types::{ChannelId, ElementId};

/// Prints each host effect as one line on stdout.
pub struct ConsoleHost;

impl ConsoleHost {
    fn line(&self, text: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{text}") {
            tracing::warn!(error = %e, "stdout write failed");
        }
    }
}

impl ShareHost for ConsoleHost {
    fn open_url(&self, url: &str) {
        self.line(&format!("open    {url}"));
    }

    fn set_panel_open(&self, element: ElementId, channel: &ChannelId, open: bool) {
        let state = if open { "shown" } else { "hidden" };
        self.line(&format!("panel   {channel} {state} on {element}"));
    }

    fn notify(&self, notice: &Notice) {
        self.line(&format!("notice  {}", notice.text()));
    }
}
