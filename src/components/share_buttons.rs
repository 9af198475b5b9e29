//! Social share controls

use maud::{Markup, html};

use crate::share::{ShareBundle, ShareSink};

/// Renders one share control per sink
///
/// Every sink receives the same bundle. While the bundle has no URL the
/// controls render as disabled spans instead of links, so a pre-rendered
/// page never carries broken share links.
///
/// # Arguments
///
/// * `bundle`: Share payload for the page
/// * `sinks`: Share integrations in display order
///
/// # Returns
///
/// Share control row markup
pub fn share_buttons(bundle: &ShareBundle, sinks: &[Box<dyn ShareSink>]) -> Markup {
    html! {
        div class="share" {
            @for sink in sinks {
                @if let Some(href) = sink.share_url(bundle) {
                    a href=(href)
                        class="share-button"
                        target="_blank"
                        rel="noopener noreferrer"
                        title=(format!("Share on {}", sink.name())) {
                        i class=(sink.icon()) {}
                    }
                } @else {
                    span class="share-button share-unavailable"
                        aria-disabled="true"
                        title=(format!("Sharing on {} is temporarily unavailable", sink.name())) {
                        i class=(sink.icon()) {}
                    }
                }
            }
        }
    }
}
