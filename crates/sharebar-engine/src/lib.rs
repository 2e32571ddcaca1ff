// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sharebar Engine — metadata resolution, channel selection, share URL
// templating, and the per-click dispatch state machine. This crate turns the
// core types in `sharebar-core` into decisions and drives the collaborators
// defined in `sharebar-bridge`.

pub mod builder;
pub mod dispatch;
pub mod environment;
pub mod registry;
pub mod resolver;
pub mod selector;
pub mod table;
pub mod widget;

pub use builder::build;
pub use dispatch::{DirectLink, DispatchOutcome, dispatch};
pub use environment::classify;
pub use registry::{Template, template_for};
pub use resolver::MetadataResolver;
pub use selector::select_channels;
pub use table::DispatchTable;
pub use widget::{CodePanel, Element, IconLink, Insertion, RenderedBar, ShareWidget};
