// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Code panel renderer backed by the `qrcode` crate.

use qrcode::QrCode;
use qrcode::render::{svg, unicode};

use sharebar_core::error::{Result, ShareError};
use sharebar_core::types::{CodeOutput, CodePanelRequest};

use crate::traits::CodePanelRenderer;

/// Renders QR codes as SVG markup or as Unicode half-blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrCodeRenderer;

impl CodePanelRenderer for QrCodeRenderer {
    fn render(&self, request: &CodePanelRequest) -> Result<String> {
        let code = QrCode::new(request.text.as_bytes())
            .map_err(|e| ShareError::CodePanel(format!("{e}")))?;

        let rendered = match request.output {
            CodeOutput::Image => code
                .render::<svg::Color<'_>>()
                .min_dimensions(request.size, request.size)
                .build(),
            // Inverted so the code scans on dark terminals.
            CodeOutput::Text => code
                .render::<unicode::Dense1x2>()
                .dark_color(unicode::Dense1x2::Light)
                .light_color(unicode::Dense1x2::Dark)
                .build(),
        };

        tracing::debug!(
            output = ?request.output,
            size = request.size,
            bytes = rendered.len(),
            "rendered code panel"
        );
        Ok(rendered)
    }
}
