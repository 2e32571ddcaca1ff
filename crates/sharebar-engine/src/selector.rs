// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Channel selector: which icons a share bar shows, in which order.

use std::collections::BTreeSet;

use sharebar_core::types::{ChannelId, EnvironmentClass, Placement, ShareContext, channels};

/// Channels whose only job is "share into the chat app". Inside that app's
/// own browser they are redundant, so they are suppressed there.
pub const IN_APP_ONLY_CHANNELS: [&str; 2] = [channels::WECHAT, channels::TIMELINE];

/// The context's disabled set plus whatever the environment suppresses.
pub fn effective_disabled(
    context: &ShareContext,
    environment: &EnvironmentClass,
) -> BTreeSet<ChannelId> {
    let mut disabled = context.disabled.clone();
    if environment.is_in_app_browser {
        disabled.extend(IN_APP_ONLY_CHANNELS.into_iter().map(ChannelId::from));
    }
    disabled
}

/// Ordered channels to render.
///
/// Picks `mobile_sites` or `sites` (never both), drops disabled ids, and
/// reverses the result for `prepend` placement so successive prepends end up
/// in the stated order. Duplicates are passed through untouched.
pub fn select_channels(context: &ShareContext, environment: &EnvironmentClass) -> Vec<ChannelId> {
    let base = if environment.is_mobile_viewport {
        &context.mobile_sites
    } else {
        &context.sites
    };
    let disabled = effective_disabled(context, environment);

    let mut selected: Vec<ChannelId> = base
        .iter()
        .filter(|id| !disabled.contains(*id))
        .cloned()
        .collect();
    if context.mode == Placement::Prepend {
        selected.reverse();
    }

    tracing::debug!(
        mobile = environment.is_mobile_viewport,
        in_app = environment.is_in_app_browser,
        requested = base.len(),
        selected = selected.len(),
        "selected share channels"
    );
    selected
}
