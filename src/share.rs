//! Outbound share payloads and the sinks that consume them.
//!
//! Every page yields exactly one [`ShareBundle`], handed unchanged to each
//! configured [`ShareSink`]. Sinks pick the fields they need.

mod sinks;

pub use sinks::{Facebook, Line, Pocket, Tumblr, Twitter, default_sinks};

use crate::post::Post;

/// Share payload for one post.
///
/// `url` is absolute when the site origin is known and the empty string
/// otherwise. Sinks must read the empty string as "sharing unavailable".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareBundle {
    pub url: String,
    pub title: String,
    pub tags: Vec<String>,
}

impl ShareBundle {
    /// True when the bundle carries a shareable URL.
    pub fn is_available(&self) -> bool {
        !self.url.is_empty()
    }
}

/// Builds the share payload for a post.
///
/// The URL is `origin + post.path` when an origin is given; without one it
/// is left empty rather than guessed. Title and tags are copied verbatim,
/// tags keeping their order and duplicates.
pub fn build(post: &Post, current_origin: Option<&str>) -> ShareBundle {
    let url = match current_origin {
        Some(origin) => format!("{}{}", origin, post.path),
        None => String::new(),
    };

    ShareBundle {
        url,
        title: post.title.clone(),
        tags: post.tags.clone(),
    }
}

/// External share integration fed by a [`ShareBundle`].
pub trait ShareSink {
    /// Human readable service name.
    fn name(&self) -> &'static str;

    /// Phosphor icon classes for the share control.
    fn icon(&self) -> &'static str;

    /// Share intent URL, or `None` while the bundle has no URL.
    fn share_url(&self, bundle: &ShareBundle) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::Body;

    fn post(path: &str, tags: &[&str]) -> Post {
        Post {
            title: "Intro".to_string(),
            date: "2021-01-01".to_string(),
            path: path.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            body: Body::default(),
        }
    }

    #[test]
    fn test_build_without_origin() {
        // Arrange
        let post = post("/intro", &["go"]);

        // Act
        let bundle = build(&post, None);

        // Assert
        assert_eq!(bundle.url, "", "Unknown origin must yield empty URL");
        assert!(!bundle.is_available());
        assert_eq!(bundle.title, "Intro");
        assert_eq!(bundle.tags, vec!["go"]);
    }

    #[test]
    fn test_build_with_origin() {
        // Arrange
        let post = post("/intro", &[]);

        // Act
        let bundle = build(&post, Some("https://example.com"));

        // Assert
        assert_eq!(bundle.url, "https://example.com/intro");
        assert!(bundle.is_available());
    }

    #[test]
    fn test_build_preserves_tag_order_and_duplicates() {
        // Arrange
        let post = post("/t", &["rust", "go", "rust", "a"]);

        // Act
        let bundle = build(&post, Some("https://example.com"));

        // Assert
        assert_eq!(bundle.tags, post.tags);
    }

    #[test]
    fn test_build_passes_empty_title_through() {
        // Arrange
        let mut post = post("/t", &[]);
        post.title = String::new();

        // Act
        let bundle = build(&post, None);

        // Assert
        assert_eq!(bundle.title, "");
    }

    #[test]
    fn test_build_is_deterministic() {
        // Arrange
        let post = post("/intro", &["go", "rust"]);

        // Act
        let first = build(&post, Some("https://blog.example"));
        let second = build(&post, Some("https://blog.example"));

        // Assert
        assert_eq!(first, second);
    }
}
