// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Built-in defaults and environment classification settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{ChannelId, channels};

/// Viewports narrower than this are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// User-agent marker of the WeChat in-app browser.
pub const WECHAT_UA_SIGNATURE: &str = "micromessenger";

/// Default code panel size handed to the renderer.
pub const DEFAULT_QRCODE_SIZE: u32 = 100;

/// Inputs to the environment classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Exclusive upper bound of a mobile viewport width, in CSS pixels.
    pub mobile_breakpoint: u32,
    /// Lower-cased user-agent substrings identifying in-app browsers.
    pub in_app_signatures: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: MOBILE_BREAKPOINT_PX,
            in_app_signatures: vec![WECHAT_UA_SIGNATURE.to_owned()],
        }
    }
}

/// Built-in defaults, the lowest layer of every share context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    pub sites: Vec<ChannelId>,
    pub mobile_sites: Vec<ChannelId>,
    pub qrcode_title: String,
    pub qrcode_helper: String,
    pub qrcode_size: u32,
    pub environment: EnvironmentConfig,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            sites: default_sites(),
            mobile_sites: default_sites(),
            qrcode_title: "微信扫一扫".into(),
            qrcode_helper: "微信扫一扫，打开页面后，点击右上角分享。".into(),
            qrcode_size: DEFAULT_QRCODE_SIZE,
            environment: EnvironmentConfig::default(),
        }
    }
}

impl ShareConfig {
    /// Load from a JSON file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Persist as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }
}

fn default_sites() -> Vec<ChannelId> {
    [
        channels::WEIBO,
        channels::QQ,
        channels::QZONE,
        channels::WECHAT,
        channels::TIMELINE,
        channels::DOUBAN,
        channels::LINKEDIN,
        channels::FACEBOOK,
        channels::TWITTER,
        channels::GOOGLE,
    ]
    .into_iter()
    .map(ChannelId::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_offer_every_builtin_channel() {
        let config = ShareConfig::default();
        assert_eq!(config.sites.len(), 10);
        assert_eq!(config.sites, config.mobile_sites);
        assert_eq!(config.sites[0], "weibo");
        assert_eq!(config.environment.mobile_breakpoint, 768);
    }

    #[test]
    fn load_fills_missing_keys_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("share.json");
        std::fs::write(&path, r#"{ "sites": ["weibo", "qq"], "qrcode_size": 160 }"#).unwrap();

        let config = ShareConfig::load(&path).unwrap();
        assert_eq!(config.sites, vec![ChannelId::from("weibo"), ChannelId::from("qq")]);
        assert_eq!(config.qrcode_size, 160);
        assert_eq!(config.mobile_sites.len(), 10);
        assert_eq!(config.environment, EnvironmentConfig::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("share.json");
        let mut config = ShareConfig::default();
        config.environment.mobile_breakpoint = 640;
        config.save(&path).unwrap();

        assert_eq!(ShareConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShareConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, crate::ShareError::Io(_)));
    }
}
