//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const TAGS: &str = include_str!("../assets/components/tags.css");
const SHARE: &str = include_str!("../assets/components/share.css");
const NAV: &str = include_str!("../assets/components/nav.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Stylesheet file name written by [`write_css_assets`].
pub const POST_STYLESHEET: &str = "post.css";

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(
        assets_dir,
        POST_STYLESHEET,
        &[BASE, LAYOUT, TAGS, SHARE, NAV, MARKDOWN],
    )
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
