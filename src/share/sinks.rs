//! Share intent URLs for the supported services.

use super::{ShareBundle, ShareSink};

/// Builds `base?key=value&...` with percent encoded values.
fn intent_url(base: &str, params: &[(&str, &str)]) -> String {
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", base, query)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Twitter;

impl ShareSink for Twitter {
    fn name(&self) -> &'static str {
        "Twitter"
    }

    fn icon(&self) -> &'static str {
        "ph ph-twitter-logo"
    }

    fn share_url(&self, bundle: &ShareBundle) -> Option<String> {
        if !bundle.is_available() {
            return None;
        }
        Some(intent_url(
            "https://twitter.com/share",
            &[("url", bundle.url.as_str()), ("text", bundle.title.as_str())],
        ))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Facebook;

impl ShareSink for Facebook {
    fn name(&self) -> &'static str {
        "Facebook"
    }

    fn icon(&self) -> &'static str {
        "ph ph-facebook-logo"
    }

    fn share_url(&self, bundle: &ShareBundle) -> Option<String> {
        if !bundle.is_available() {
            return None;
        }
        Some(intent_url(
            "https://www.facebook.com/sharer/sharer.php",
            &[("u", bundle.url.as_str()), ("quote", bundle.title.as_str())],
        ))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Line;

impl ShareSink for Line {
    fn name(&self) -> &'static str {
        "LINE"
    }

    fn icon(&self) -> &'static str {
        "ph ph-chat-circle-text"
    }

    fn share_url(&self, bundle: &ShareBundle) -> Option<String> {
        if !bundle.is_available() {
            return None;
        }
        Some(intent_url(
            "https://social-plugins.line.me/lineit/share",
            &[("url", bundle.url.as_str()), ("text", bundle.title.as_str())],
        ))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Pocket;

impl ShareSink for Pocket {
    fn name(&self) -> &'static str {
        "Pocket"
    }

    fn icon(&self) -> &'static str {
        "ph ph-bookmark-simple"
    }

    fn share_url(&self, bundle: &ShareBundle) -> Option<String> {
        if !bundle.is_available() {
            return None;
        }
        Some(intent_url(
            "https://getpocket.com/save",
            &[("url", bundle.url.as_str()), ("title", bundle.title.as_str())],
        ))
    }
}

/// Tumblr is the only sink that reads tags; they are sent comma joined in
/// post order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tumblr;

impl ShareSink for Tumblr {
    fn name(&self) -> &'static str {
        "Tumblr"
    }

    fn icon(&self) -> &'static str {
        "ph ph-share-network"
    }

    fn share_url(&self, bundle: &ShareBundle) -> Option<String> {
        if !bundle.is_available() {
            return None;
        }
        let tags = bundle.tags.join(",");
        Some(intent_url(
            "https://www.tumblr.com/widgets/share/tool",
            &[
                ("canonicalUrl", bundle.url.as_str()),
                ("title", bundle.title.as_str()),
                ("caption", ""),
                ("tags", tags.as_str()),
                ("posttype", "link"),
            ],
        ))
    }
}

/// All supported sinks in display order.
pub fn default_sinks() -> Vec<Box<dyn ShareSink>> {
    vec![
        Box::new(Twitter),
        Box::new(Facebook),
        Box::new(Line),
        Box::new(Pocket),
        Box::new(Tumblr),
    ]
}
