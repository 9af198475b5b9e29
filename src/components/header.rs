//! Post title and date components

use maud::{Markup, html};

/// Renders the post title.
pub fn post_title(title: &str) -> Markup {
    html! {
        h1 class="post-title" { (title) }
    }
}

/// Renders the display formatted post date.
pub fn post_date(date: &str) -> Markup {
    html! {
        p class="post-date" { (date) }
    }
}
