// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Reading page metadata, options, and defaults from disk.

use std::path::Path;

use sharebar_core::config::ShareConfig;
use sharebar_core::error::Result;
use sharebar_core::options::ShareOptions;
use sharebar_core::types::PageMetadata;

pub fn load_page(path: &Path) -> Result<PageMetadata> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Caller options, or empty options when no file was given.
pub fn load_options(path: Option<&Path>) -> Result<ShareOptions> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            ShareOptions::from_json(&raw)
        }
        None => Ok(ShareOptions::default()),
    }
}

/// Defaults from `path`, or the built-in ones.
pub fn load_config(path: Option<&Path>) -> Result<ShareConfig> {
    match path {
        Some(path) => ShareConfig::load(path),
        None => Ok(ShareConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");
        std::fs::write(
            &path,
            r#"{
                "location": "https://x.test/p",
                "documentTitle": "T",
                "meta": { "description": "D" },
                "images": ["https://x.test/i.png"]
            }"#,
        )
        .unwrap();

        let page = load_page(&path).unwrap();
        assert_eq!(page.document_title, "T");
        assert_eq!(page.meta("description"), Some("D"));
        assert_eq!(page.origin(), "https://x.test");
    }

    #[test]
    fn missing_options_file_is_default() {
        assert_eq!(load_options(None).unwrap(), ShareOptions::default());
    }

    #[test]
    fn malformed_options_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            load_options(Some(&path)),
            Err(sharebar_core::ShareError::Serialization(_))
        ));
    }

    #[test]
    fn flat_channel_keys_in_options_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        std::fs::write(&path, r#"{ "sites": "weibo", "weiboTitle": "W" }"#).unwrap();

        let options = load_options(Some(&path)).unwrap();
        let weibo = &options.overrides[&sharebar_core::types::ChannelId::from("weibo")];
        assert_eq!(weibo[&sharebar_core::types::Field::Title], "W");
    }
}
