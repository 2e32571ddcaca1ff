// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sharebar — Core types, options, and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod notices;
pub mod options;
pub mod types;

pub use config::{EnvironmentConfig, ShareConfig};
pub use error::{BridgeError, ShareError};
pub use notices::{Notice, humanize_bridge_error, humanize_error};
pub use options::ShareOptions;
pub use types::*;
