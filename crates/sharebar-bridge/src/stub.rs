// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for builds where no host app is listening.
//
// Every invocation returns `BridgeError::Unavailable`, which sends the
// dispatch engine down its link fallback.

use sharebar_core::error::BridgeError;
use sharebar_core::types::{NativeCommand, SharePayload};

use crate::traits::NativeBridge;

/// No-op bridge returned when no host app is present.
pub struct StubBridge;

impl NativeBridge for StubBridge {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }

    fn invoke(&self, command: NativeCommand, _payload: &SharePayload) -> Result<(), BridgeError> {
        tracing::warn!(%command, "NativeBridge::invoke called on stub bridge");
        Err(BridgeError::Unavailable)
    }
}
