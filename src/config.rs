//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::post::TagCounts;

/// Command line configuration for Postkyl.
#[derive(Debug, Clone, Parser)]
#[command(name = "postkyl", version, about, long_about = None)]
pub struct Config {
    /// Markdown post with YAML frontmatter
    pub post: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Previous post in the site ordering
    #[arg(long)]
    pub previous: Option<PathBuf>,

    /// Next post in the site ordering
    #[arg(long)]
    pub next: Option<PathBuf>,

    /// Site origin for share links (e.g. https://blog.example)
    #[arg(long)]
    pub origin: Option<String>,

    /// Tag usage count, repeatable
    #[arg(long = "tag-count", value_name = "NAME=COUNT")]
    pub tag_counts: Vec<String>,

    /// Open the generated page in the default browser
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the post file does not exist or the origin is not
    /// an http(s) origin.
    pub fn validate(&self) -> Result<()> {
        if !self.post.is_file() {
            bail!("Post file does not exist: {}", self.post.display());
        }

        if let Some(origin) = &self.origin {
            parse_origin(origin)?;
        }

        Ok(())
    }

    /// Returns the site origin as `scheme://host[:port]`, without a
    /// trailing slash.
    ///
    /// `None` means the page address is unknown and share links stay
    /// disabled. An origin that fails validation is also `None`.
    pub fn origin(&self) -> Option<String> {
        self.origin
            .as_deref()
            .and_then(|origin| parse_origin(origin).ok())
    }

    /// Parses the `--tag-count` entries.
    ///
    /// # Errors
    ///
    /// Returns error if any entry is not a valid `NAME=COUNT` pair.
    pub fn tag_counts(&self) -> Result<TagCounts> {
        self.tag_counts
            .iter()
            .map(|entry| {
                TagCounts::parse_entry(entry)
                    .with_context(|| format!("Invalid --tag-count: {}", entry))
            })
            .collect()
    }
}

/// Parses an http(s) origin and serialises it without a trailing slash.
///
/// Only scheme, host and port are accepted: a path other than `/`, a query,
/// a fragment or user info is rejected.
fn parse_origin(origin: &str) -> Result<String> {
    let parsed =
        url::Url::parse(origin).with_context(|| format!("Invalid origin: {}", origin))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("Origin must start with http:// or https://: {}", origin);
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        bail!("Origin has no host: {}", origin);
    }
    if parsed.path() != "/"
        || parsed.query().is_some()
        || parsed.fragment().is_some()
        || !parsed.username().is_empty()
        || parsed.password().is_some()
    {
        bail!("Origin must be scheme and host only: {}", origin);
    }

    Ok(parsed.origin().ascii_serialization())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            post: PathBuf::from("Cargo.toml"),
            output: PathBuf::from("dist"),
            previous: None,
            next: None,
            origin: None,
            tag_counts: vec![],
            open: false,
        }
    }

    #[test]
    fn test_validate_existing_post() {
        // Arrange
        let config = config();

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_ok(), "Existing file should be valid");
    }

    #[test]
    fn test_validate_missing_post() {
        // Arrange
        let config = Config {
            post: PathBuf::from("/nonexistent/post.md"),
            ..config()
        };

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err(), "Missing post should be rejected");
    }

    #[test]
    fn test_validate_origin_scheme() {
        // Arrange
        let good = Config {
            origin: Some("https://blog.example".to_string()),
            ..config()
        };
        let bad = Config {
            origin: Some("blog.example".to_string()),
            ..config()
        };

        // Act & Assert
        assert!(good.validate().is_ok());
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_origin_trims_trailing_slash() {
        // Arrange
        let config = Config {
            origin: Some("https://blog.example/".to_string()),
            ..config()
        };

        // Act & Assert
        assert_eq!(config.origin().as_deref(), Some("https://blog.example"));
    }

    #[test]
    fn test_validate_origin_without_host() {
        // Arrange
        let config = Config {
            origin: Some("https://".to_string()),
            ..config()
        };

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err(), "Origin without host should be rejected");
        assert_eq!(config.origin(), None);
    }

    #[test]
    fn test_validate_origin_with_path_query_or_fragment() {
        for origin in [
            "https://h/?q",
            "https://h?q",
            "https://h/blog",
            "https://h#top",
            "https://user@h",
        ] {
            // Arrange
            let config = Config {
                origin: Some(origin.to_string()),
                ..config()
            };

            // Act
            let result = config.validate();

            // Assert
            assert!(result.is_err(), "Origin {:?} should be rejected", origin);
            assert_eq!(config.origin(), None, "Origin {:?} should be dropped", origin);
        }
    }

    #[test]
    fn test_origin_keeps_port() {
        // Arrange
        let config = Config {
            origin: Some("http://localhost:8000/".to_string()),
            ..config()
        };

        // Act & Assert
        assert!(config.validate().is_ok());
        assert_eq!(config.origin().as_deref(), Some("http://localhost:8000"));
    }

    #[test]
    fn test_origin_absent() {
        assert_eq!(config().origin(), None);
    }

    #[test]
    fn test_tag_counts() {
        // Arrange
        let config = Config {
            tag_counts: vec!["go=3".to_string(), "rust=5".to_string()],
            ..config()
        };

        // Act
        let counts = config.tag_counts().expect("Should parse tag counts");

        // Assert
        assert_eq!(counts.count("go"), 3);
        assert_eq!(counts.count("rust"), 5);
        assert_eq!(counts.count("zig"), 0);
    }

    #[test]
    fn test_tag_counts_invalid() {
        // Arrange
        let config = Config {
            tag_counts: vec!["go".to_string()],
            ..config()
        };

        // Act & Assert
        assert!(config.tag_counts().is_err());
    }

    #[test]
    fn test_config_clone() {
        // Arrange
        let original = Config {
            next: Some(PathBuf::from("next.md")),
            open: true,
            ..config()
        };

        // Act
        let cloned = original.clone();

        // Assert
        assert_eq!(cloned.post, original.post);
        assert_eq!(cloned.next, original.next);
        assert_eq!(cloned.open, original.open);
    }
}
