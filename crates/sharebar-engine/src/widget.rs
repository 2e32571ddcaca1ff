// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Share widget initialisation.
//
// Turns a set of target elements plus options into the icons and code
// panels the rendering layer should show, and registers each element in the
// dispatch table. Re-initialising an element never inserts icons or panels
// twice: it only refreshes the links of icons that already exist.

use sharebar_bridge::traits::CodePanelRenderer;
use sharebar_core::config::ShareConfig;
use sharebar_core::options::ShareOptions;
use sharebar_core::types::{
    BuiltShare, ChannelId, CodeOutput, CodePanelRequest, ElementId, EnvironmentClass,
    PageMetadata, Placement, ShareContext, ShareUrl,
};
use tracing::{debug, info, warn};

use crate::builder::build;
use crate::registry::has_code_panel;
use crate::resolver::MetadataResolver;
use crate::selector::select_channels;
use crate::table::DispatchTable;

/// A share-bar container on the page.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub id: ElementId,
    /// Per-element overrides (the element's `data-*` attributes).
    pub data: ShareOptions,
}

impl Element {
    pub fn new(data: ShareOptions) -> Self {
        Self {
            id: ElementId::new(),
            data,
        }
    }

    pub fn from_data_attributes<'a, I>(attrs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self::new(ShareOptions::from_data_attributes(attrs))
    }
}

/// How an icon reaches the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Append,
    Prepend,
    /// The icon already exists; only its link changed.
    Refresh,
}

/// One channel icon and the link it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconLink {
    pub channel: ChannelId,
    pub url: ShareUrl,
    pub insertion: Insertion,
}

/// A scannable code panel attached to a no-URL channel icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePanel {
    pub channel: ChannelId,
    pub title: String,
    pub helper: String,
    /// Renderer output (SVG markup or text blocks).
    pub code: String,
}

/// Everything the rendering layer needs for one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBar {
    pub element: ElementId,
    /// Icons in the order they should be inserted.
    pub icons: Vec<IconLink>,
    pub panels: Vec<CodePanel>,
}

/// Initialises share bars against a dispatch table.
pub struct ShareWidget<'a> {
    resolver: MetadataResolver,
    table: &'a DispatchTable,
    renderer: &'a dyn CodePanelRenderer,
    code_output: CodeOutput,
}

impl<'a> ShareWidget<'a> {
    pub fn new(
        config: ShareConfig,
        table: &'a DispatchTable,
        renderer: &'a dyn CodePanelRenderer,
    ) -> Self {
        Self {
            resolver: MetadataResolver::new(config),
            table,
            renderer,
            code_output: CodeOutput::Image,
        }
    }

    /// Ask the renderer for a different output flavour.
    pub fn with_code_output(mut self, output: CodeOutput) -> Self {
        self.code_output = output;
        self
    }

    /// Initialise every element. Code panel failures are logged and the
    /// panel skipped; initialisation itself never fails.
    pub fn initialize(
        &self,
        page: &PageMetadata,
        options: &ShareOptions,
        elements: &[Element],
        environment: &EnvironmentClass,
    ) -> Vec<RenderedBar> {
        elements
            .iter()
            .map(|element| self.initialize_one(page, options, element, environment))
            .collect()
    }

    fn initialize_one(
        &self,
        page: &PageMetadata,
        options: &ShareOptions,
        element: &Element,
        environment: &EnvironmentClass,
    ) -> RenderedBar {
        let context = self.resolver.resolve(page, options, &element.data);
        let links: Vec<BuiltShare> = select_channels(&context, environment)
            .iter()
            .map(|channel| build(channel, &context))
            .collect();

        if self.table.is_initialized(element.id) {
            debug!(element = %element.id, "share bar already initialised; refreshing links");
            let icons = self
                .table
                .refresh(element.id, context, &links)
                .into_iter()
                .map(|l| icon(l, Insertion::Refresh))
                .collect();
            return RenderedBar {
                element: element.id,
                icons,
                panels: Vec::new(),
            };
        }

        // `initialized` from the caller means the icons are already in the
        // markup: adopt them instead of inserting new ones.
        let insertion = match (context.initialized, context.mode) {
            (true, _) => Insertion::Refresh,
            (false, Placement::Append) => Insertion::Append,
            (false, Placement::Prepend) => Insertion::Prepend,
        };
        let icons: Vec<IconLink> = links.iter().cloned().map(|l| icon(l, insertion)).collect();
        let panels = self.render_panels(&context, &links);

        info!(
            element = %element.id,
            icons = icons.len(),
            panels = panels.len(),
            ?insertion,
            "share bar initialised"
        );
        self.table.register(element.id, context, links);

        RenderedBar {
            element: element.id,
            icons,
            panels,
        }
    }

    fn render_panels(&self, context: &ShareContext, links: &[BuiltShare]) -> Vec<CodePanel> {
        let mut panels: Vec<CodePanel> = Vec::new();
        for link in links {
            let channel = &link.channel;
            if !has_code_panel(channel.as_str()) || panels.iter().any(|p| &p.channel == channel) {
                continue;
            }

            let request = CodePanelRequest {
                text: context.url.clone(),
                size: context.qrcode_size,
                output: self.code_output,
            };
            match self.renderer.render(&request) {
                Ok(code) => panels.push(CodePanel {
                    channel: channel.clone(),
                    title: context.qrcode_title.clone(),
                    helper: context.qrcode_helper.clone(),
                    code,
                }),
                Err(e) => warn!(%channel, error = %e, "code panel rendering failed; panel skipped"),
            }
        }
        panels
    }
}

fn icon(link: BuiltShare, insertion: Insertion) -> IconLink {
    IconLink {
        channel: link.channel,
        url: link.url,
        insertion,
    }
}
