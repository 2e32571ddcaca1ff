// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Environment classifier: viewport class and in-app browser detection.

use sharebar_core::config::EnvironmentConfig;
use sharebar_core::types::EnvironmentClass;

/// Classify with the built-in breakpoint and signatures.
pub fn classify(viewport_width: u32, user_agent: &str) -> EnvironmentClass {
    classify_with(&EnvironmentConfig::default(), viewport_width, user_agent)
}

/// Classify against explicit settings. Cheap and pure; call it once per
/// share action since the viewport can change between actions.
pub fn classify_with(
    config: &EnvironmentConfig,
    viewport_width: u32,
    user_agent: &str,
) -> EnvironmentClass {
    let ua = user_agent.to_lowercase();
    EnvironmentClass {
        is_mobile_viewport: viewport_width < config.mobile_breakpoint,
        is_in_app_browser: config
            .in_app_signatures
            .iter()
            .any(|sig| !sig.is_empty() && ua.contains(&sig.to_lowercase())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WECHAT_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_0 like Mac OS X) \
        AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148 MicroMessenger/8.0.38";

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(classify(500, "any").is_mobile_viewport);
        assert!(classify(767, "any").is_mobile_viewport);
        assert!(!classify(768, "any").is_mobile_viewport);
        assert!(!classify(1024, "any").is_mobile_viewport);
    }

    #[test]
    fn detects_wechat_case_insensitively() {
        assert!(classify(375, WECHAT_UA).is_in_app_browser);
        assert!(classify(1280, "MICROMESSENGER").is_in_app_browser);
        assert!(!classify(375, "Mozilla/5.0 Safari/604.1").is_in_app_browser);
    }

    #[test]
    fn custom_breakpoint_and_signature() {
        let config = EnvironmentConfig {
            mobile_breakpoint: 600,
            in_app_signatures: vec!["FBAN".into()],
        };
        let env = classify_with(&config, 640, "Mozilla [FBAN/FBIOS]");
        assert!(!env.is_mobile_viewport);
        assert!(env.is_in_app_browser);
    }
}
