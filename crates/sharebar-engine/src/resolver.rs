// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Metadata resolver.
//
// Layers, later wins: built-in defaults < page metadata < caller options <
// element data. Text fields take the first non-empty value from the top;
// absent values resolve to an empty string.

use std::collections::BTreeSet;

use sharebar_core::config::ShareConfig;
use sharebar_core::options::ShareOptions;
use sharebar_core::types::{ChannelId, ChannelList, PageMetadata, ShareContext};

/// Builds `ShareContext`s from page facts and option layers.
#[derive(Debug, Clone, Default)]
pub struct MetadataResolver {
    config: ShareConfig,
}

impl MetadataResolver {
    pub fn new(config: ShareConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ShareConfig {
        &self.config
    }

    /// Merge every layer into the context for one element.
    pub fn resolve(
        &self,
        page: &PageMetadata,
        caller: &ShareOptions,
        element: &ShareOptions,
    ) -> ShareContext {
        let mut options = caller.clone();
        options.merge(element);

        let source = first_non_empty([
            options.source.as_deref(),
            page.meta("site"),
            page.meta("Site"),
            Some(page.document_title.as_str()),
        ]);
        let title = first_non_empty([
            options.title.as_deref(),
            page.meta("title"),
            page.meta("Title"),
            Some(page.document_title.as_str()),
        ]);
        let description = first_non_empty([
            options.description.as_deref(),
            page.meta("description"),
            page.meta("Description"),
        ]);
        let image = first_non_empty([options.image.as_deref(), page.first_image()]);
        let url = first_non_empty([options.url.as_deref(), Some(page.location.as_str())]);
        let origin = page.origin();
        let site_url = first_non_empty([options.site_url.as_deref(), Some(origin.as_str())]);

        let sites = list_or(options.sites.as_ref(), &self.config.sites);
        let mobile_sites = list_or(options.mobile_sites.as_ref(), &self.config.mobile_sites);
        let disabled: BTreeSet<_> = options
            .disabled
            .as_ref()
            .map(ChannelList::to_vec)
            .unwrap_or_default()
            .into_iter()
            .collect();

        let context = ShareContext {
            url,
            site_url,
            source,
            title,
            description,
            image,
            sites,
            mobile_sites,
            disabled,
            overrides: options.overrides,
            mode: options.mode.unwrap_or_default(),
            qrcode_title: first_non_empty([
                options.qrcode_title.as_deref(),
                Some(self.config.qrcode_title.as_str()),
            ]),
            qrcode_helper: first_non_empty([
                options.qrcode_helper.as_deref(),
                Some(self.config.qrcode_helper.as_str()),
            ]),
            qrcode_size: self.config.qrcode_size,
            initialized: options.initialized.unwrap_or(false),
        };

        tracing::debug!(
            url = %context.url,
            title = %context.title,
            sites = context.sites.len(),
            mobile_sites = context.mobile_sites.len(),
            disabled = context.disabled.len(),
            "resolved share context"
        );
        context
    }
}

fn first_non_empty<const N: usize>(candidates: [Option<&str>; N]) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|v| !v.is_empty())
        .unwrap_or_default()
        .to_owned()
}

fn list_or(list: Option<&ChannelList>, default: &[ChannelId]) -> Vec<ChannelId> {
    list.map(ChannelList::to_vec)
        .unwrap_or_else(|| default.to_vec())
}
