// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Process-wide dispatch table.
//
// Every initialised share bar is registered here under its generated
// `ElementId`. `activate` is the single entry point icon handlers call; each
// call copies what it needs out of the table and runs without holding the
// lock, so activations on different elements never interfere.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use sharebar_bridge::traits::{NativeBridge, ShareHost};
use sharebar_core::error::{Result, ShareError};
use sharebar_core::types::{BuiltShare, ChannelId, ElementId, EnvironmentClass, ShareContext};

use crate::builder::build;
use crate::dispatch::{DispatchOutcome, dispatch};

#[derive(Debug, Clone)]
struct Entry {
    context: ShareContext,
    links: Vec<BuiltShare>,
}

#[derive(Debug, Default)]
struct TableState {
    /// Idempotence guard: elements whose icons already exist.
    initialized: HashSet<ElementId>,
    entries: HashMap<ElementId, Entry>,
}

/// Element id → share context and icon links.
#[derive(Debug, Default)]
pub struct DispatchTable {
    state: Mutex<TableState>,
}

impl DispatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The page-lifetime table shared by every share bar in the process.
    pub fn global() -> &'static DispatchTable {
        static GLOBAL: OnceLock<DispatchTable> = OnceLock::new();
        GLOBAL.get_or_init(DispatchTable::new)
    }

    fn lock(&self) -> MutexGuard<'_, TableState> {
        // Entries are replaced whole, so a poisoned guard still holds a
        // consistent table.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_initialized(&self, element: ElementId) -> bool {
        self.lock().initialized.contains(&element)
    }

    /// Number of registered share bars.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Channels whose icons exist on `element`, in render order.
    pub fn rendered_channels(&self, element: ElementId) -> Vec<ChannelId> {
        self.lock()
            .entries
            .get(&element)
            .map(|e| e.links.iter().map(|l| l.channel.clone()).collect())
            .unwrap_or_default()
    }

    /// Record a freshly rendered share bar.
    pub(crate) fn register(&self, element: ElementId, context: ShareContext, links: Vec<BuiltShare>) {
        let mut state = self.lock();
        state.initialized.insert(element);
        state.entries.insert(element, Entry { context, links });
    }

    /// Swap in a new context and update the URLs of icons that already
    /// exist. Channels without an icon are not added. Returns the updated
    /// links in render order.
    pub(crate) fn refresh(
        &self,
        element: ElementId,
        context: ShareContext,
        links: &[BuiltShare],
    ) -> Vec<BuiltShare> {
        let mut state = self.lock();
        let Some(entry) = state.entries.get_mut(&element) else {
            return Vec::new();
        };

        entry.context = context;
        let mut refreshed = Vec::new();
        for existing in &mut entry.links {
            if let Some(update) = links.iter().find(|l| l.channel == existing.channel) {
                existing.url = update.url.clone();
                refreshed.push(existing.clone());
            }
        }
        refreshed
    }

    /// Handle a click on `channel`'s icon inside `element`.
    pub fn activate(
        &self,
        element: ElementId,
        channel: &str,
        environment: &EnvironmentClass,
        bridge: &dyn NativeBridge,
        host: &dyn ShareHost,
    ) -> Result<DispatchOutcome> {
        let (context, share) = {
            let state = self.lock();
            let entry = state
                .entries
                .get(&element)
                .ok_or(ShareError::UnknownElement(element))?;
            let share = entry
                .links
                .iter()
                .find(|l| l.channel == channel)
                .cloned()
                .unwrap_or_else(|| build(&ChannelId::from(channel), &entry.context));
            (entry.context.clone(), share)
        };

        tracing::debug!(%element, channel, url = %share.url, "activating share channel");
        Ok(dispatch(element, &share, &context, environment, bridge, host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::DirectLink;
    use crate::dispatch::tests::{HostEvent, RecordingHost, ScriptedBridge};
    use sharebar_core::types::ShareUrl;

    const DESKTOP: EnvironmentClass = EnvironmentClass {
        is_mobile_viewport: false,
        is_in_app_browser: false,
    };

    fn context() -> ShareContext {
        ShareContext {
            url: "https://x.test/p".into(),
            title: "T".into(),
            ..Default::default()
        }
    }

    #[test]
    fn unknown_element_is_an_error() {
        let table = DispatchTable::new();
        let err = table
            .activate(
                ElementId::new(),
                "weibo",
                &DESKTOP,
                &ScriptedBridge::new(Ok(())),
                &RecordingHost::default(),
            )
            .unwrap_err();
        assert!(matches!(err, ShareError::UnknownElement(_)));
    }

    #[test]
    fn activation_uses_registered_link() {
        let table = DispatchTable::new();
        let element = ElementId::new();
        table.register(
            element,
            context(),
            vec![BuiltShare {
                channel: "weibo".into(),
                url: ShareUrl::Direct("https://registered.test".into()),
            }],
        );

        let host = RecordingHost::default();
        let outcome = table
            .activate(element, "weibo", &DESKTOP, &ScriptedBridge::new(Ok(())), &host)
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Direct(DirectLink::Opened));
        assert_eq!(
            *host.events.borrow(),
            vec![HostEvent::Open("https://registered.test".into())]
        );
    }

    #[test]
    fn activation_of_unrendered_channel_builds_on_the_fly() {
        let table = DispatchTable::new();
        let element = ElementId::new();
        table.register(element, context(), Vec::new());

        let host = RecordingHost::default();
        table
            .activate(element, "facebook", &DESKTOP, &ScriptedBridge::new(Ok(())), &host)
            .unwrap();
        assert_eq!(
            *host.events.borrow(),
            vec![HostEvent::Open(
                "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fx.test%2Fp".into()
            )]
        );
    }

    #[test]
    fn refresh_updates_only_existing_icons() {
        let table = DispatchTable::new();
        let element = ElementId::new();
        let link = |channel: &str, url: &str| BuiltShare {
            channel: channel.into(),
            url: ShareUrl::Direct(url.into()),
        };
        table.register(element, context(), vec![link("weibo", "old")]);

        let refreshed = table.refresh(element, context(), &[link("weibo", "new"), link("qq", "q")]);
        assert_eq!(refreshed, vec![link("weibo", "new")]);
        assert_eq!(table.rendered_channels(element), vec![ChannelId::from("weibo")]);
    }

    #[test]
    fn global_table_is_shared() {
        assert!(std::ptr::eq(DispatchTable::global(), DispatchTable::global()));
    }
}
