//! HTML rendering of composed post pages.
//!
//! The body renderer and the share sinks are injected so the page can be
//! rendered (and tested) without a particular markdown pipeline or a real
//! set of share integrations.

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped, html};

use crate::components::header::{post_date, post_title};
use crate::components::layout::page_wrapper;
use crate::components::nav::pagination;
use crate::components::share_buttons::share_buttons;
use crate::components::tags::tag_badge_list;
use crate::compose::{ComposedPage, Section};
use crate::post::Body;
use crate::share::ShareSink;

/// Turns a post body into HTML.
pub trait BodyRenderer {
    /// # Errors
    ///
    /// Returns error if the body cannot be rendered.
    fn render(&self, body: &Body) -> Result<String>;
}

/// Renders a single section.
///
/// # Errors
///
/// Returns error only when the body renderer fails.
pub fn render_section(
    section: &Section,
    body_renderer: &dyn BodyRenderer,
    sinks: &[Box<dyn ShareSink>],
) -> Result<Markup> {
    let markup = match section {
        Section::Title(title) => post_title(title),
        Section::Date(date) => post_date(date),
        Section::Tags(groups) => tag_badge_list(groups),
        Section::Body(body) => {
            let rendered = body_renderer
                .render(body)
                .context("Failed to render post body")?;
            html! {
                div class="post" { (PreEscaped(rendered)) }
            }
        }
        Section::Share(bundle) => share_buttons(bundle, sinks),
        Section::Navigation(navigation) => pagination(navigation.as_ref()),
    };

    Ok(markup)
}

/// Renders a composed page as a complete HTML document
///
/// Sections are emitted in the order the composer produced them.
///
/// # Arguments
///
/// * `page`: Composed post page
/// * `body_renderer`: Renderer for the post body
/// * `sinks`: Share integrations, each fed the same bundle
/// * `stylesheets`: CSS paths linked from the document head
///
/// # Errors
///
/// Returns error if the body renderer fails
pub fn render_page(
    page: &ComposedPage,
    body_renderer: &dyn BodyRenderer,
    sinks: &[Box<dyn ShareSink>],
    stylesheets: &[&str],
) -> Result<Markup> {
    let sections = page
        .sections()
        .iter()
        .map(|section| render_section(section, body_renderer, sinks))
        .collect::<Result<Vec<_>>>()?;

    Ok(page_wrapper(
        page.title(),
        stylesheets,
        html! {
            article class="post-page" {
                @for section in &sections {
                    (section)
                }
            }
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{PageInput, compose};
    use crate::post::{NavigationContext, Post, PostLink, TagCounts};
    use crate::share::default_sinks;

    /// Echoes the body source inside a marker element.
    struct EchoRenderer;

    impl BodyRenderer for EchoRenderer {
        fn render(&self, body: &Body) -> Result<String> {
            Ok(format!("<div data-echo>{}</div>", body.source()))
        }
    }

    struct FailingRenderer;

    impl BodyRenderer for FailingRenderer {
        fn render(&self, _body: &Body) -> Result<String> {
            anyhow::bail!("renderer offline")
        }
    }

    fn intro() -> Post {
        Post {
            title: "Intro".to_string(),
            date: "2021-01-01".to_string(),
            path: "/intro".to_string(),
            tags: vec!["go".to_string(), "rust".to_string()],
            body: Body::new("hello body"),
        }
    }

    fn page(navigation: &NavigationContext, origin: Option<&str>) -> ComposedPage {
        let post = intro();
        let counts = TagCounts::new();
        compose(&PageInput {
            post: &post,
            navigation,
            origin,
            tag_counts: &counts,
        })
    }

    #[test]
    fn test_render_page_section_order() {
        // Arrange
        let navigation = NavigationContext {
            previous: Some(PostLink::new("/prev", "Prev Post")),
            next: None,
        };
        let page = page(&navigation, Some("https://blog.example"));

        // Act
        let html = render_page(&page, &EchoRenderer, &default_sinks(), &[])
            .expect("Should render page")
            .into_string();

        // Assert
        let positions: Vec<usize> = [
            "post-title",
            "post-date",
            "tag-list",
            "data-echo",
            "class=\"share\"",
            "pagination",
        ]
        .iter()
        .map(|marker| html.find(marker).expect("Section should be rendered"))
        .collect();
        assert!(
            positions.windows(2).all(|pair| pair[0] < pair[1]),
            "Sections out of order: {:?}",
            positions
        );
    }

    #[test]
    fn test_render_page_without_navigation() {
        // Arrange
        let page = page(&NavigationContext::default(), None);

        // Act
        let html = render_page(&page, &EchoRenderer, &default_sinks(), &[])
            .expect("Should render page")
            .into_string();

        // Assert
        assert!(!html.contains("pagination"), "No navigation region expected");
        assert!(html.contains("share-unavailable"), "Share disabled without origin");
    }

    #[test]
    fn test_render_page_body_is_not_escaped() {
        // Arrange
        let page = page(&NavigationContext::default(), None);

        // Act
        let html = render_page(&page, &EchoRenderer, &[], &[])
            .expect("Should render page")
            .into_string();

        // Assert
        assert!(html.contains("<div class=\"post\"><div data-echo>hello body</div></div>"));
    }

    #[test]
    fn test_render_page_propagates_body_error() {
        // Arrange
        let page = page(&NavigationContext::default(), None);

        // Act
        let result = render_page(&page, &FailingRenderer, &[], &[]);

        // Assert
        let err = result.expect_err("Body failure should surface");
        assert!(format!("{:#}", err).contains("renderer offline"));
    }

    #[test]
    fn test_render_page_is_idempotent() {
        // Arrange
        let page = page(&NavigationContext::default(), Some("https://blog.example"));
        let sinks = default_sinks();

        // Act
        let first = render_page(&page, &EchoRenderer, &sinks, &["post.css"])
            .expect("Should render")
            .into_string();
        let second = render_page(&page, &EchoRenderer, &sinks, &["post.css"])
            .expect("Should render")
            .into_string();

        // Assert
        assert_eq!(first, second);
    }
}
