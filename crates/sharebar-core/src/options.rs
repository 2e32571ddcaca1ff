// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Caller options and per-element data overrides.
//
// Both layers share one shape: every ShareContext field, optional. Element
// data can also arrive as raw `data-*` attributes, e.g. `data-weibo-title`,
// and JSON options may carry flat `{channel}{Field}` keys, e.g. `weiboTitle`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, ShareError};
use crate::types::{ChannelId, ChannelList, ChannelOverrides, Field, Placement};

/// JSON keys `ShareOptions` deserializes directly, aliases included.
const OPTION_KEYS: &[&str] = &[
    "url",
    "siteUrl",
    "source",
    "title",
    "description",
    "image",
    "sites",
    "mobileSites",
    "disabled",
    "overrides",
    "mode",
    "qrcodeTitle",
    "wechatQrcodeTitle",
    "qrcodeHelper",
    "wechatQrcodeHelper",
    "initialized",
];

/// One layer of share configuration. `None` means "not set at this layer".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ShareOptions {
    pub url: Option<String>,
    pub site_url: Option<String>,
    pub source: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub sites: Option<ChannelList>,
    pub mobile_sites: Option<ChannelList>,
    pub disabled: Option<ChannelList>,
    pub overrides: ChannelOverrides,
    pub mode: Option<Placement>,
    #[serde(alias = "wechatQrcodeTitle")]
    pub qrcode_title: Option<String>,
    #[serde(alias = "wechatQrcodeHelper")]
    pub qrcode_helper: Option<String>,
    pub initialized: Option<bool>,
}

impl ShareOptions {
    /// Lay `other` over `self`; values set in `other` win. Channel overrides
    /// merge field by field.
    pub fn merge(&mut self, other: &ShareOptions) {
        fn take<T: Clone>(dst: &mut Option<T>, src: &Option<T>) {
            if let Some(v) = src {
                *dst = Some(v.clone());
            }
        }

        take(&mut self.url, &other.url);
        take(&mut self.site_url, &other.site_url);
        take(&mut self.source, &other.source);
        take(&mut self.title, &other.title);
        take(&mut self.description, &other.description);
        take(&mut self.image, &other.image);
        take(&mut self.sites, &other.sites);
        take(&mut self.mobile_sites, &other.mobile_sites);
        take(&mut self.disabled, &other.disabled);
        take(&mut self.mode, &other.mode);
        take(&mut self.qrcode_title, &other.qrcode_title);
        take(&mut self.qrcode_helper, &other.qrcode_helper);
        take(&mut self.initialized, &other.initialized);

        for (channel, fields) in &other.overrides {
            let slot = self.overrides.entry(channel.clone()).or_default();
            for (field, value) in fields {
                slot.insert(*field, value.clone());
            }
        }
    }

    /// Set a single channel override.
    pub fn with_override(mut self, channel: &str, field: Field, value: impl Into<String>) -> Self {
        self.overrides
            .entry(ChannelId::from(channel))
            .or_default()
            .insert(field, value.into());
        self
    }

    /// Parse caller options from JSON.
    ///
    /// Flat `{channel}{Field}` keys such as `weiboTitle` become channel
    /// overrides; an entry in the `overrides` map wins over a flat key for
    /// the same channel and field. Any other unknown key is an error.
    pub fn from_json(raw: &str) -> Result<Self> {
        let Value::Object(object) = serde_json::from_str::<Value>(raw)? else {
            return Ok(serde_json::from_str(raw)?);
        };

        let mut known = Map::new();
        let mut flat: Vec<(ChannelId, Field, String)> = Vec::new();
        for (key, value) in object {
            let split = if OPTION_KEYS.contains(&key.as_str()) {
                None
            } else {
                split_flat_key(&key)
            };
            let Some((channel, field)) = split else {
                known.insert(key, value);
                continue;
            };
            match value {
                Value::String(text) => flat.push((channel, field, text)),
                other => {
                    return Err(ShareError::InvalidOptions(format!(
                        "`{key}` must be a string, got {other}"
                    )));
                }
            }
        }

        let mut options: Self = serde_json::from_value(Value::Object(known))?;
        for (channel, field, text) in flat {
            options
                .overrides
                .entry(channel)
                .or_default()
                .entry(field)
                .or_insert(text);
        }
        Ok(options)
    }

    /// Read element data from `data-*` attributes.
    ///
    /// Keys may carry the `data-` prefix or not. Recognised option names map
    /// to their field; `<channel>-<field>` keys become channel overrides.
    /// Anything else is ignored.
    pub fn from_data_attributes<'a, I>(attrs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = Self::default();
        for (key, value) in attrs {
            let key = key.strip_prefix("data-").unwrap_or(key);
            options.apply_attribute(&key.to_ascii_lowercase(), value);
        }
        options
    }

    fn apply_attribute(&mut self, key: &str, value: &str) {
        let owned = || Some(value.to_owned());
        match key {
            "url" => self.url = owned(),
            "site-url" => self.site_url = owned(),
            "source" => self.source = owned(),
            "title" => self.title = owned(),
            "description" => self.description = owned(),
            "image" => self.image = owned(),
            "sites" => self.sites = Some(ChannelList::Delimited(value.to_owned())),
            "mobile-sites" => self.mobile_sites = Some(ChannelList::Delimited(value.to_owned())),
            "disabled" => self.disabled = Some(ChannelList::Delimited(value.to_owned())),
            "mode" => {
                self.mode = Some(if value.eq_ignore_ascii_case("prepend") {
                    Placement::Prepend
                } else {
                    Placement::Append
                })
            }
            "qrcode-title" | "wechat-qrcode-title" => self.qrcode_title = owned(),
            "qrcode-helper" | "wechat-qrcode-helper" => self.qrcode_helper = owned(),
            "initialized" => self.initialized = Some(value.eq_ignore_ascii_case("true")),
            other => {
                let Some((channel, field)) = other.split_once('-') else {
                    return;
                };
                if let (false, Some(field)) = (channel.is_empty(), Field::from_key(field)) {
                    self.overrides
                        .entry(ChannelId::from(channel))
                        .or_default()
                        .insert(field, value.to_owned());
                }
            }
        }
    }
}

/// `weiboSiteUrl` → (`weibo`, `SiteUrl`). The channel part is the lower-case
/// run before the first upper-case letter.
fn split_flat_key(key: &str) -> Option<(ChannelId, Field)> {
    let at = key.find(|c: char| c.is_ascii_uppercase())?;
    let (channel, field) = key.split_at(at);
    if channel.is_empty() || !channel.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()) {
        return None;
    }
    Some((ChannelId::from(channel), Field::from_key(field)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_layer_wins() {
        let mut base = ShareOptions {
            title: Some("Base".into()),
            description: Some("Kept".into()),
            ..Default::default()
        };
        let top = ShareOptions {
            title: Some("Top".into()),
            ..Default::default()
        };
        base.merge(&top);
        assert_eq!(base.title.as_deref(), Some("Top"));
        assert_eq!(base.description.as_deref(), Some("Kept"));
    }

    #[test]
    fn overrides_merge_per_field() {
        let mut base = ShareOptions::default()
            .with_override("weibo", Field::Title, "A")
            .with_override("weibo", Field::Image, "img");
        base.merge(&ShareOptions::default().with_override("weibo", Field::Title, "B"));

        let weibo = &base.overrides[&ChannelId::from("weibo")];
        assert_eq!(weibo[&Field::Title], "B");
        assert_eq!(weibo[&Field::Image], "img");
    }

    #[test]
    fn data_attributes_map_to_options() {
        let options = ShareOptions::from_data_attributes([
            ("data-sites", "weibo,qq"),
            ("data-mobile-sites", "wechat"),
            ("data-disabled", "qq"),
            ("data-mode", "prepend"),
            ("data-weibo-title", "Weibo only"),
            ("data-linkedin-summary", "Short"),
            ("data-wechat-qrcode-title", "Scan"),
            ("data-unknown-thing", "ignored"),
            ("title", "Plain key"),
        ]);

        assert_eq!(options.sites, Some(ChannelList::Delimited("weibo,qq".into())));
        assert_eq!(options.mobile_sites.as_ref().map(ChannelList::to_vec), Some(vec!["wechat".into()]));
        assert_eq!(options.mode, Some(Placement::Prepend));
        assert_eq!(options.qrcode_title.as_deref(), Some("Scan"));
        assert_eq!(options.title.as_deref(), Some("Plain key"));
        assert_eq!(options.overrides[&ChannelId::from("weibo")][&Field::Title], "Weibo only");
        assert_eq!(options.overrides[&ChannelId::from("linkedin")][&Field::Summary], "Short");
        assert!(!options.overrides.contains_key(&ChannelId::from("unknown")));
    }

    #[test]
    fn json_options_accept_legacy_keys() {
        let options: ShareOptions = serde_json::from_str(
            r#"{
                "sites": "qq,qzone,weibo",
                "disabled": ["qq"],
                "wechatQrcodeTitle": "Scan me",
                "overrides": { "weibo": { "title": "W" } }
            }"#,
        )
        .unwrap();
        assert_eq!(options.sites.unwrap().to_vec().len(), 3);
        assert_eq!(options.qrcode_title.as_deref(), Some("Scan me"));
        assert_eq!(options.overrides[&ChannelId::from("weibo")][&Field::Title], "W");
    }

    #[test]
    fn flat_channel_keys_become_overrides() {
        let options = ShareOptions::from_json(
            r#"{
                "title": "Page",
                "siteUrl": "https://x.test",
                "qrcodeTitle": "Scan",
                "weiboTitle": "Weibo only",
                "linkedinSummary": "Short",
                "twitterSiteUrl": "xtest",
                "overrides": { "qq": { "title": "Explicit" } },
                "qqTitle": "Flat"
            }"#,
        )
        .unwrap();

        assert_eq!(options.title.as_deref(), Some("Page"));
        assert_eq!(options.site_url.as_deref(), Some("https://x.test"));
        assert_eq!(options.qrcode_title.as_deref(), Some("Scan"));
        assert_eq!(options.overrides[&ChannelId::from("weibo")][&Field::Title], "Weibo only");
        assert_eq!(options.overrides[&ChannelId::from("linkedin")][&Field::Summary], "Short");
        assert_eq!(options.overrides[&ChannelId::from("twitter")][&Field::SiteUrl], "xtest");
        assert_eq!(options.overrides[&ChannelId::from("qq")][&Field::Title], "Explicit");
        assert!(!options.overrides.contains_key(&ChannelId::from("site")));
    }

    #[test]
    fn unknown_option_key_is_rejected() {
        let err = ShareOptions::from_json(r#"{ "titel": "typo" }"#).unwrap_err();
        assert!(matches!(err, ShareError::Serialization(_)));
        assert!(err.to_string().contains("titel"));

        let err = ShareOptions::from_json(r#"{ "weiboColour": "red" }"#).unwrap_err();
        assert!(matches!(err, ShareError::Serialization(_)));
    }

    #[test]
    fn flat_override_must_be_text() {
        let err = ShareOptions::from_json(r#"{ "weiboTitle": 3 }"#).unwrap_err();
        assert!(matches!(err, ShareError::InvalidOptions(ref m) if m.contains("weiboTitle")));
    }
}
