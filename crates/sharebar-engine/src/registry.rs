// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Channel registry: the static channel → share URL template table.
//
// Adding a channel means adding one row to `CHANNELS`.

use sharebar_core::types::channels;

/// How a channel is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Share URL with `{{FIELD}}` placeholders.
    Url(&'static str),
    /// No direct URL; handled by a code panel or the native bridge.
    NoOp,
}

impl Template {
    pub fn is_no_op(&self) -> bool {
        matches!(self, Self::NoOp)
    }
}

static CHANNELS: &[(&str, Template)] = &[
    (
        channels::QZONE,
        Template::Url(
            "https://sns.qzone.qq.com/cgi-bin/qzshare/cgi_qzshare_onekey?url={{URL}}&title={{TITLE}}&desc={{DESCRIPTION}}&summary={{SUMMARY}}&site={{SOURCE}}",
        ),
    ),
    (
        channels::QQ,
        Template::Url(
            "https://connect.qq.com/widget/shareqq/index.html?url={{URL}}&title={{TITLE}}&source={{SOURCE}}&desc={{DESCRIPTION}}",
        ),
    ),
    (
        channels::WEIBO,
        Template::Url("https://service.weibo.com/share/share.php?url={{URL}}&title={{TITLE}}&pic={{IMAGE}}"),
    ),
    (channels::WECHAT, Template::NoOp),
    (channels::TIMELINE, Template::NoOp),
    (
        channels::DOUBAN,
        Template::Url(
            "https://www.douban.com/share/service?href={{URL}}&name={{TITLE}}&text={{DESCRIPTION}}&image={{IMAGE}}&starid=0&aid=0&style=11",
        ),
    ),
    (
        channels::LINKEDIN,
        Template::Url(
            "https://www.linkedin.com/shareArticle?mini=true&ro=true&title={{TITLE}}&url={{URL}}&summary={{SUMMARY}}&source={{SOURCE}}&armin=armin",
        ),
    ),
    (
        channels::FACEBOOK,
        Template::Url("https://www.facebook.com/sharer/sharer.php?u={{URL}}"),
    ),
    (
        channels::TWITTER,
        Template::Url("https://twitter.com/intent/tweet?text={{TITLE}}&url={{URL}}&via={{SITE_URL}}"),
    ),
    (
        channels::GOOGLE,
        Template::Url("https://plus.google.com/share?url={{URL}}"),
    ),
];

/// Template for `channel`, or `None` for an unregistered id.
pub fn template_for(channel: &str) -> Option<Template> {
    CHANNELS
        .iter()
        .find(|(id, _)| *id == channel)
        .map(|(_, template)| *template)
}

/// Every registered channel id, in registry order.
pub fn channel_ids() -> impl Iterator<Item = &'static str> {
    CHANNELS.iter().map(|(id, _)| *id)
}

/// Channels that show a scannable code panel instead of navigating.
pub fn has_code_panel(channel: &str) -> bool {
    channel == channels::WECHAT || channel == channels::TIMELINE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_channels_are_no_op() {
        assert_eq!(template_for("wechat"), Some(Template::NoOp));
        assert_eq!(template_for("timeline"), Some(Template::NoOp));
    }

    #[test]
    fn unknown_channel_has_no_template() {
        assert_eq!(template_for("myspace"), None);
    }

    #[test]
    fn every_url_template_is_https() {
        for id in channel_ids() {
            if let Some(Template::Url(url)) = template_for(id) {
                assert!(url.starts_with("https://"), "{id}: {url}");
            }
        }
    }

    #[test]
    fn ten_builtin_channels() {
        assert_eq!(channel_ids().count(), 10);
    }
}
