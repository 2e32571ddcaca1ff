// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Sharebar share-dispatch engine.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Well-known channel identifiers.
pub mod channels {
    pub const QZONE: &str = "qzone";
    pub const QQ: &str = "qq";
    pub const WEIBO: &str = "weibo";
    pub const WECHAT: &str = "wechat";
    pub const TIMELINE: &str = "timeline";
    pub const DOUBAN: &str = "douban";
    pub const LINKEDIN: &str = "linkedin";
    pub const FACEBOOK: &str = "facebook";
    pub const TWITTER: &str = "twitter";
    pub const GOOGLE: &str = "google";
}

/// Identifier of one share destination (e.g. `weibo`, `wechat`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(String);

impl ChannelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ChannelId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl Borrow<str> for ChannelId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ChannelId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ChannelId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generated identifier for a share-bar element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub Uuid);

impl ElementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A metadata field that can appear as a `{{FIELD}}` template placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Url,
    SiteUrl,
    Source,
    Title,
    Description,
    /// Derived from `description`; some networks call it a summary.
    Summary,
    Image,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Url,
        Field::SiteUrl,
        Field::Source,
        Field::Title,
        Field::Description,
        Field::Summary,
        Field::Image,
    ];

    /// Upper-cased name used inside `{{...}}`.
    pub fn placeholder_name(&self) -> &'static str {
        match self {
            Self::Url => "URL",
            Self::SiteUrl => "SITE_URL",
            Self::Source => "SOURCE",
            Self::Title => "TITLE",
            Self::Description => "DESCRIPTION",
            Self::Summary => "SUMMARY",
            Self::Image => "IMAGE",
        }
    }

    /// The full placeholder token, e.g. `{{SITE_URL}}`.
    pub fn placeholder(&self) -> String {
        format!("{{{{{}}}}}", self.placeholder_name())
    }

    /// Parse a field key in any common casing (`siteUrl`, `site_url`,
    /// `site-url`, `SITE_URL`).
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized: String = key
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "url" => Some(Self::Url),
            "siteurl" => Some(Self::SiteUrl),
            "source" => Some(Self::Source),
            "title" => Some(Self::Title),
            "description" => Some(Self::Description),
            "summary" => Some(Self::Summary),
            "image" => Some(Self::Image),
            _ => None,
        }
    }
}

/// Where new icons are inserted in the share bar container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    #[default]
    Append,
    Prepend,
}

/// Channel list input: either a proper list or a comma-delimited string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelList {
    List(Vec<ChannelId>),
    Delimited(String),
}

impl ChannelList {
    /// Normalise into an ordered list. Delimited entries are trimmed and
    /// empty entries dropped; list entries are kept as given.
    pub fn to_vec(&self) -> Vec<ChannelId> {
        match self {
            Self::List(ids) => ids.clone(),
            Self::Delimited(raw) => parse_delimited(raw),
        }
    }
}

impl From<Vec<ChannelId>> for ChannelList {
    fn from(ids: Vec<ChannelId>) -> Self {
        Self::List(ids)
    }
}

/// Split `qq, qzone,weibo` into channel ids.
pub fn parse_delimited(raw: &str) -> Vec<ChannelId> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ChannelId::from)
        .collect()
}

/// Per-channel field overrides: `channel → (field → value)`.
pub type ChannelOverrides = BTreeMap<ChannelId, BTreeMap<Field, String>>;

/// Fully merged configuration for one share-bar instance.
///
/// Built once at initialisation and immutable afterwards. Environment
/// suppression is applied to a copy of `disabled` at selection time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareContext {
    pub url: String,
    pub site_url: String,
    pub source: String,
    pub title: String,
    pub description: String,
    pub image: String,
    /// Channels offered on desktop-class viewports.
    pub sites: Vec<ChannelId>,
    /// Channels offered on mobile-class viewports.
    pub mobile_sites: Vec<ChannelId>,
    pub disabled: BTreeSet<ChannelId>,
    pub overrides: ChannelOverrides,
    pub mode: Placement,
    /// Heading shown above the scannable code panel.
    pub qrcode_title: String,
    /// Help text shown below the scannable code panel.
    pub qrcode_helper: String,
    /// Module size requested from the code panel renderer.
    pub qrcode_size: u32,
    /// Caller claims the icons already exist; only refresh their links.
    pub initialized: bool,
}

impl ShareContext {
    /// Generic value of a field. `Summary` mirrors `description`.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Url => &self.url,
            Field::SiteUrl => &self.site_url,
            Field::Source => &self.source,
            Field::Title => &self.title,
            Field::Description | Field::Summary => &self.description,
            Field::Image => &self.image,
        }
    }

    /// Value of `field` as seen by `channel`: a non-empty channel override
    /// wins over the generic value.
    pub fn effective(&self, channel: &str, field: Field) -> &str {
        self.overrides
            .get(channel)
            .and_then(|fields| fields.get(&field))
            .map(String::as_str)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| self.field(field))
    }
}

/// Classification of the browsing environment for one share action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentClass {
    pub is_mobile_viewport: bool,
    pub is_in_app_browser: bool,
}

/// Sentinel href for channels with no direct share URL.
pub const NO_OP_URL: &str = "javascript:;";

/// The link attached to a channel icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShareUrl {
    /// Fully substituted, percent-encoded share URL.
    Direct(String),
    /// No direct URL: handled by a code panel or the native bridge.
    NoOp,
}

impl ShareUrl {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Direct(url) => url,
            Self::NoOp => NO_OP_URL,
        }
    }

    pub fn is_no_op(&self) -> bool {
        matches!(self, Self::NoOp)
    }
}

impl std::fmt::Display for ShareUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A channel together with its built link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltShare {
    pub channel: ChannelId,
    pub url: ShareUrl,
}

/// Command names understood by the host app's native share bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NativeCommand {
    #[serde(rename = "wechatFriend")]
    WechatFriend,
    #[serde(rename = "wechatTimeline")]
    WechatTimeline,
    #[serde(rename = "weibo")]
    Weibo,
    #[serde(rename = "qqFriend")]
    QqFriend,
    #[serde(rename = "qZone")]
    QZone,
}

impl NativeCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WechatFriend => "wechatFriend",
            Self::WechatTimeline => "wechatTimeline",
            Self::Weibo => "weibo",
            Self::QqFriend => "qqFriend",
            Self::QZone => "qZone",
        }
    }
}

impl std::fmt::Display for NativeCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload handed to the native share bridge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    pub title: String,
    pub desc: String,
    /// For chat apps the link's domain must be on the app's allow-list.
    pub link: String,
    pub icon: String,
}

impl SharePayload {
    /// Build from the generic (non channel-specialised) context fields.
    pub fn from_context(context: &ShareContext) -> Self {
        Self {
            title: context.title.clone(),
            desc: context.description.clone(),
            link: context.url.clone(),
            icon: context.image.clone(),
        }
    }
}

/// Output flavour requested from the code panel renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeOutput {
    /// Image markup (SVG).
    #[default]
    Image,
    /// Plain text blocks, for terminals.
    Text,
}

/// Request for a scannable code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodePanelRequest {
    pub text: String,
    pub size: u32,
    pub output: CodeOutput,
}

/// Page-level facts the metadata resolver draws defaults from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageMetadata {
    /// Current location (`window.location.href`).
    pub location: String,
    /// Origin of the page. Derived from `location` when empty.
    pub origin: String,
    pub document_title: String,
    /// `<meta name=... content=...>` pairs, names case-sensitive.
    pub meta: BTreeMap<String, String>,
    /// Image sources in document order.
    pub images: Vec<String>,
}

impl PageMetadata {
    /// Non-empty content of a named meta tag.
    pub fn meta(&self, name: &str) -> Option<&str> {
        self.meta
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Source of the first image in document order, if it has one.
    pub fn first_image(&self) -> Option<&str> {
        self.images
            .first()
            .map(String::as_str)
            .filter(|src| !src.is_empty())
    }

    /// `scheme://host[:port]` of the page.
    pub fn origin(&self) -> String {
        if !self.origin.is_empty() {
            return self.origin.clone();
        }
        match self.location.find("://") {
            Some(scheme_end) => {
                let rest = &self.location[scheme_end + 3..];
                let host_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
                self.location[..scheme_end + 3 + host_end].to_owned()
            }
            None => String::new(),
        }
    }
}
