//! Previous/next post navigation component

use maud::{Markup, html};

use crate::navigation::Navigation;

/// Renders links to the adjacent posts
///
/// Previous always comes before next. Renders nothing at all, not even an
/// empty container, when there is no navigation.
///
/// # Arguments
///
/// * `navigation`: Resolved navigation, or `None` when no neighbour is usable
///
/// # Returns
///
/// Pagination markup, or empty markup
pub fn pagination(navigation: Option<&Navigation>) -> Markup {
    let Some(navigation) = navigation else {
        return html! {};
    };

    html! {
        nav class="pagination" {
            @if let Some(link) = navigation.previous() {
                a href=(link.path) class="pagination-link pagination-previous" {
                    span { "←" }
                    span { (link.label) }
                }
            }
            @if let Some(link) = navigation.next() {
                a href=(link.path) class="pagination-link pagination-next" {
                    span { (link.label) }
                    span { "→" }
                }
            }
        }
    }
}
