// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sharebar — Collaborator contracts for the share-dispatch engine.
//
// The engine never talks to a page, a host app, or an image library
// directly. It goes through the traits in `traits`, so the same decisions
// drive a browser binding, a terminal demo, and the test doubles.

pub mod qr;
pub mod stub;
pub mod traits;

pub use qr::QrCodeRenderer;
pub use stub::StubBridge;
pub use traits::{CodePanelRenderer, NativeBridge, ShareHost};

/// The native bridge for this build.
///
/// No host app ships a bridge client for native targets, so every build
/// gets the stub; browser bindings supply their own `NativeBridge`.
pub fn platform_bridge() -> Box<dyn NativeBridge> {
    Box::new(StubBridge)
}
