//! Post records, adjacent post references and tag usage counts.
//!
//! Posts are markdown files opened by a `---` delimited YAML frontmatter
//! block carrying `title`, `date`, `path` and `tags`. Everything below the
//! closing delimiter is the body, kept opaque until a body renderer sees it.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const FRONTMATTER_DELIMITER: &str = "---";

/// Opaque handle to a post's unrendered content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body(String);

impl Body {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// Raw markdown source.
    pub fn source(&self) -> &str {
        &self.0
    }
}

/// A single blog post as delivered by the content pipeline.
///
/// `path` is site relative and always starts with `/`. The loader rejects
/// anything else, so the rendering core can rely on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    pub date: String,
    pub path: String,
    pub tags: Vec<String>,
    pub body: Body,
}

#[derive(Debug, Default, Deserialize)]
struct Frontmatter {
    title: Option<String>,
    date: Option<String>,
    path: Option<String>,
    tags: Option<Vec<String>>,
}

impl Post {
    /// Parses a post from markdown source with YAML frontmatter.
    ///
    /// Missing `title` and `date` become empty strings; the page shows
    /// whatever the content provides and does not invent defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the frontmatter block is missing or invalid YAML,
    /// or if `path` is missing or not a clean site relative path.
    pub fn parse(source: &str) -> Result<Self> {
        let (yaml, body) = split_frontmatter(source).context("Post has no frontmatter block")?;
        let frontmatter = parse_frontmatter(yaml)?;

        let path = frontmatter
            .path
            .context("Frontmatter is missing required field `path`")?;
        validate_post_path(&path)?;

        Ok(Self {
            title: frontmatter.title.unwrap_or_default(),
            date: frontmatter.date.unwrap_or_default(),
            path,
            tags: frontmatter.tags.unwrap_or_default(),
            body: Body::new(body),
        })
    }

    /// Reads and parses a post file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read post: {}", path.display()))?;
        Self::parse(&source).with_context(|| format!("Invalid post: {}", path.display()))
    }

    /// Minimal reference to this post for use as a neighbour.
    pub fn link(&self) -> PostLink {
        PostLink::new(self.path.clone(), self.title.clone())
    }
}

/// Reference to the previous or next post, as the pipeline provided it.
///
/// Fields stay optional here: a link missing either one is dropped by the
/// navigation resolver instead of failing the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostLink {
    pub path: Option<String>,
    pub title: Option<String>,
}

impl PostLink {
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            title: Some(title.into()),
        }
    }

    /// Reads only the frontmatter of an adjacent post.
    ///
    /// Unlike [`Post::parse`] this never rejects missing fields; a source
    /// without any frontmatter yields a link with neither path nor title.
    ///
    /// # Errors
    ///
    /// Returns error if the frontmatter block is not valid YAML.
    pub fn parse(source: &str) -> Result<Self> {
        let Some((yaml, _)) = split_frontmatter(source) else {
            return Ok(Self::default());
        };
        let frontmatter = parse_frontmatter(yaml)?;

        Ok(Self {
            path: frontmatter.path,
            title: frontmatter.title,
        })
    }

    /// Reads an adjacent post file and extracts its link fields.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or has invalid frontmatter.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read post: {}", path.display()))?;
        Self::parse(&source).with_context(|| format!("Invalid post: {}", path.display()))
    }

    /// True when both path and title are present.
    pub fn is_complete(&self) -> bool {
        self.path.as_deref().is_some_and(|p| !p.is_empty()) && self.title.is_some()
    }
}

/// Posts adjacent to the one being rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationContext {
    pub previous: Option<PostLink>,
    pub next: Option<PostLink>,
}

/// Tag name with the number of posts using it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagGroup {
    pub name: String,
    pub count: usize,
}

impl TagGroup {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Site wide tag usage counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCounts(BTreeMap<String, usize>);

impl TagCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for a tag, zero when unknown.
    pub fn count(&self, name: &str) -> usize {
        self.0.get(name).copied().unwrap_or(0)
    }

    /// Parses a `name=count` pair.
    ///
    /// # Errors
    ///
    /// Returns error if the separator is missing, the name is empty or the
    /// count is not a non-negative integer.
    pub fn parse_entry(entry: &str) -> Result<(String, usize)> {
        let Some((name, count)) = entry.rsplit_once('=') else {
            bail!("Tag count must look like NAME=COUNT: {}", entry);
        };
        let name = name.trim();
        if name.is_empty() {
            bail!("Tag count has an empty tag name: {}", entry);
        }
        let count = count
            .trim()
            .parse::<usize>()
            .with_context(|| format!("Invalid count for tag {}: {}", name, count))?;

        Ok((name.to_string(), count))
    }
}

impl FromIterator<(String, usize)> for TagCounts {
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Splits source into the frontmatter YAML and the remaining body.
fn split_frontmatter(source: &str) -> Option<(&str, &str)> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let rest = source.strip_prefix(FRONTMATTER_DELIMITER)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FRONTMATTER_DELIMITER {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

fn parse_frontmatter(yaml: &str) -> Result<Frontmatter> {
    if yaml.trim().is_empty() {
        return Ok(Frontmatter::default());
    }
    serde_yaml::from_str(yaml).context("Invalid frontmatter YAML")
}

/// Rejects paths that are empty, relative or contain `.` or `..` segments.
fn validate_post_path(path: &str) -> Result<()> {
    if !path.starts_with('/') {
        bail!("Post path must start with '/': {:?}", path);
    }
    if path.split('/').any(|segment| segment == "." || segment == "..") {
        bail!("Post path contains a relative segment: {}", path);
    }
    Ok(())
}
