//! Page footer component

use maud::{Markup, html};

/// Renders the site footer with generator attribution.
pub fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            p {
                "Generated by "
                a href="https://crates.io/crates/postkyl" target="_blank" { "Postkyl" }
            }
        }
    }
}
