//! Tag badge list component

use maud::{Markup, html};

use crate::post::TagGroup;

/// Returns the listing page path for a tag.
///
/// The site generator must publish tag listings under the same route; the
/// name is used as given.
pub fn tag_href(name: &str) -> String {
    format!("/tag/{}", name)
}

/// Returns the badge text for a tag, e.g. `#go (3)`.
pub fn tag_label(group: &TagGroup) -> String {
    format!("#{} ({})", group.name, group.count)
}

/// Renders tag badges linking to their listing pages
///
/// Badges keep input order. An empty slice renders an empty list with no
/// placeholder text.
///
/// # Arguments
///
/// * `groups`: Tag names with usage counts
///
/// # Returns
///
/// Unordered list markup with one badge link per tag
pub fn tag_badge_list(groups: &[TagGroup]) -> Markup {
    html! {
        ul class="tag-list" {
            @for group in groups {
                li {
                    a href=(tag_href(&group.name)) class="tag-badge" { (tag_label(group)) }
                }
            }
        }
    }
}
