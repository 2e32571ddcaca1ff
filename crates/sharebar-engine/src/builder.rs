// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// URL builder: fills a channel's template from the share context.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use sharebar_core::types::{BuiltShare, ChannelId, Field, ShareContext, ShareUrl};

use crate::registry::{Template, template_for};

/// Characters left alone by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one query component.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Build the share link for `channel`.
///
/// Unknown channels and no-op templates yield `ShareUrl::NoOp`. Every
/// occurrence of each known placeholder is replaced; placeholders for
/// fields the context does not know stay in the output verbatim.
pub fn build(channel: &ChannelId, context: &ShareContext) -> BuiltShare {
    let url = match template_for(channel.as_str()) {
        Some(Template::Url(template)) => ShareUrl::Direct(fill(template, channel, context)),
        Some(Template::NoOp) => ShareUrl::NoOp,
        None => {
            tracing::debug!(%channel, "no template registered; treating as no-op channel");
            ShareUrl::NoOp
        }
    };
    BuiltShare {
        channel: channel.clone(),
        url,
    }
}

/// Substitute `template` for `channel`.
pub fn fill(template: &str, channel: &ChannelId, context: &ShareContext) -> String {
    Field::ALL
        .iter()
        .fold(template.to_owned(), |acc, field| {
            let token = field.placeholder();
            if !acc.contains(&token) {
                return acc;
            }
            let value = encode_component(context.effective(channel.as_str(), *field));
            acc.replace(&token, &value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::channel_ids;
    use percent_encoding::percent_decode_str;

    fn context() -> ShareContext {
        ShareContext {
            url: "https://x.test/p".into(),
            title: "T".into(),
            description: "D".into(),
            image: String::new(),
            ..Default::default()
        }
    }

    fn query_value<'a>(url: &'a str, key: &str) -> Option<&'a str> {
        let query = url.split_once('?')?.1;
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    #[test]
    fn weibo_end_to_end() {
        let built = build(&"weibo".into(), &context());
        assert_eq!(
            built.url.as_str(),
            "https://service.weibo.com/share/share.php?url=https%3A%2F%2Fx.test%2Fp&title=T&pic="
        );
    }

    #[test]
    fn channel_title_override_wins() {
        let mut ctx = context();
        ctx.overrides
            .entry("weibo".into())
            .or_default()
            .insert(Field::Title, "Weibo T".into());

        let weibo = build(&"weibo".into(), &ctx);
        let qq = build(&"qq".into(), &ctx);
        assert_eq!(query_value(weibo.url.as_str(), "title"), Some("Weibo%20T"));
        assert_eq!(query_value(qq.url.as_str(), "title"), Some("T"));
    }

    #[test]
    fn summary_follows_description() {
        let built = build(&"linkedin".into(), &context());
        assert_eq!(query_value(built.url.as_str(), "summary"), Some("D"));
    }

    #[test]
    fn no_placeholders_survive_and_values_decode() {
        use crate::registry::{Template, template_for};
        use std::collections::BTreeSet;

        let ctx = ShareContext {
            url: "https://x.test/p?a=1&b=2#frag".into(),
            site_url: "https://x.test".into(),
            source: "X & Co".into(),
            title: "Hello, 世界!".into(),
            description: "50% off (today)".into(),
            image: "https://x.test/i.png?w=1&h=2".into(),
            ..Default::default()
        };
        let mut seen = BTreeSet::new();
        for id in channel_ids() {
            let Some(Template::Url(template)) = template_for(id) else {
                continue;
            };
            let built = build(&id.into(), &ctx);
            let url = built.url.as_str();
            assert!(!url.contains("{{"), "{id}: {url}");

            // Every `key={{FIELD}}` pair of the template decodes back to its field.
            for (key, token) in template
                .split_once('?')
                .map(|(_, q)| q)
                .unwrap_or_default()
                .split('&')
                .filter_map(|pair| pair.split_once('='))
            {
                let Some(field) = Field::ALL.into_iter().find(|f| f.placeholder() == token) else {
                    continue;
                };
                let raw = query_value(url, key).unwrap();
                let decoded = percent_decode_str(raw).decode_utf8().unwrap();
                assert_eq!(decoded, ctx.field(field), "{id}: {key}");
                seen.insert(field);
            }
        }
        assert_eq!(seen.len(), Field::ALL.len());
    }

    #[test]
    fn no_op_and_unknown_channels() {
        assert_eq!(build(&"wechat".into(), &context()).url, ShareUrl::NoOp);
        assert_eq!(build(&"myspace".into(), &context()).url, ShareUrl::NoOp);
    }

    #[test]
    fn unknown_placeholders_are_left_and_repeats_replaced() {
        let out = fill("{{TITLE}}/{{TITLE}}/{{MODE}}", &"weibo".into(), &context());
        assert_eq!(out, "T/T/{{MODE}}");
    }

    #[test]
    fn encodes_like_uri_component() {
        assert_eq!(encode_component("a b&c/d"), "a%20b%26c%2Fd");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("é"), "%C3%A9");
    }
}
