//! Shared test utilities for integration tests.
//!
//! Provides helpers for writing post files into temporary content
//! directories used across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates an empty temporary content directory.
///
/// # Errors
///
/// Returns error if directory creation fails
pub fn create_content_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Renders markdown source with a frontmatter block.
///
/// # Arguments
///
/// * `title`: Post title, omitted from frontmatter when None
/// * `path`: Post path, omitted from frontmatter when None
/// * `tags`: Tag names in order
/// * `body`: Markdown body
pub fn post_source(title: Option<&str>, path: Option<&str>, tags: &[&str], body: &str) -> String {
    let mut source = String::from("---\n");
    if let Some(title) = title {
        source.push_str(&format!("title: \"{}\"\n", title));
    }
    source.push_str("date: \"2021-01-01\"\n");
    if let Some(path) = path {
        source.push_str(&format!("path: \"{}\"\n", path));
    }
    if !tags.is_empty() {
        source.push_str("tags:\n");
        for tag in tags {
            source.push_str(&format!("  - {}\n", tag));
        }
    }
    source.push_str("---\n");
    source.push_str(body);
    source
}

/// Writes a post file, creating parent directories as needed.
///
/// # Returns
///
/// Full path of the written file
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_post(dir: &Path, name: &str, source: &str) -> Result<PathBuf> {
    let file_path = dir.join(name);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&file_path, source)?;
    Ok(file_path)
}
