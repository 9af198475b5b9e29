use anyhow::{Context, Result};
use postkyl::{
    Config, MarkdownRenderer, NavigationContext, POST_STYLESHEET, PageInput, Post, PostLink,
};
use std::fs;
use std::path::Path;

/// Loads an adjacent post for navigation.
///
/// Failures never stop the page from rendering: an unreadable neighbour is
/// dropped and an incomplete one is kept so navigation can degrade on its
/// own rules.
///
/// # Arguments
///
/// * `path`: Adjacent post file, if one was given
/// * `side`: "previous" or "next", for warnings
///
/// # Returns
///
/// Link fields of the adjacent post, or None
fn load_adjacent(path: Option<&Path>, side: &str) -> Option<PostLink> {
    let path = path?;

    match PostLink::load(path) {
        Ok(link) => {
            if !link.is_complete() {
                eprintln!(
                    "Warning: {} post {} has no title or path, skipping link",
                    side,
                    path.display()
                );
            }
            Some(link)
        }
        Err(e) => {
            eprintln!("Warning: Failed to load {} post: {:#}", side, e);
            None
        }
    }
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let post = Post::load(&config.post).context("Failed to load post")?;
    let tag_counts = config.tag_counts().context("Invalid tag counts")?;
    let navigation = NavigationContext {
        previous: load_adjacent(config.previous.as_deref(), "previous"),
        next: load_adjacent(config.next.as_deref(), "next"),
    };

    let origin = config.origin();
    if origin.is_none() {
        eprintln!("Warning: No origin given, share links will be disabled");
    }

    let page = postkyl::compose(&PageInput {
        post: &post,
        navigation: &navigation,
        origin: origin.as_deref(),
        tag_counts: &tag_counts,
    });

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    postkyl::write_css_assets(&assets_dir)?;

    let page_dir = postkyl::path::page_dir(&config.output, page.path());
    fs::create_dir_all(&page_dir)
        .with_context(|| format!("Failed to create page directory: {}", page_dir.display()))?;

    let stylesheet = format!(
        "{}assets/{}",
        postkyl::path::root_prefix(page.path()),
        POST_STYLESHEET
    );
    let renderer = MarkdownRenderer::new();
    let sinks = postkyl::default_sinks();
    let html = postkyl::render_page(&page, &renderer, &sinks, &[&stylesheet])
        .context("Failed to render post page")?;

    let index_path = page_dir.join("index.html");
    fs::write(&index_path, html.into_string())
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    println!("Generated: {}", index_path.display());

    if config.open {
        open::that(&index_path).context("Failed to open generated page")?;
    }

    Ok(())
}
