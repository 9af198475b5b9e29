//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! This module provides the default post body renderer, using comrak with
//! GFM extensions (tables, strikethrough, autolinks, task lists) and
//! syntect for code block highlighting.

mod renderer;

pub use renderer::MarkdownRenderer;
