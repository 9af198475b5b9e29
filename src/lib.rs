//! Blog post page renderer.

mod assets;
pub mod components;
pub mod compose;
mod config;
mod markdown;
pub mod navigation;
pub mod path;
pub mod post;
pub mod render;
pub mod share;

pub use assets::{POST_STYLESHEET, write_css_assets};
pub use compose::{ComposedPage, PageInput, Section, compose};
pub use config::Config;
pub use markdown::MarkdownRenderer;
pub use navigation::{NavLink, Navigation};
pub use post::{Body, NavigationContext, Post, PostLink, TagCounts, TagGroup};
pub use render::{BodyRenderer, render_page};
pub use share::{ShareBundle, ShareSink, default_sinks};
