//! Previous/next post navigation.

use crate::post::{NavigationContext, PostLink};

/// A resolved navigation link. Both fields are copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub path: String,
    pub label: String,
}

/// Navigation between adjacent posts.
///
/// Only produced by [`resolve`], which guarantees at least one side is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    previous: Option<NavLink>,
    next: Option<NavLink>,
}

impl Navigation {
    pub fn previous(&self) -> Option<&NavLink> {
        self.previous.as_ref()
    }

    pub fn next(&self) -> Option<&NavLink> {
        self.next.as_ref()
    }

    pub fn previous_page_path(&self) -> Option<&str> {
        self.previous.as_ref().map(|link| link.path.as_str())
    }

    pub fn previous_label(&self) -> Option<&str> {
        self.previous.as_ref().map(|link| link.label.as_str())
    }

    pub fn next_page_path(&self) -> Option<&str> {
        self.next.as_ref().map(|link| link.path.as_str())
    }

    pub fn next_label(&self) -> Option<&str> {
        self.next.as_ref().map(|link| link.label.as_str())
    }
}

/// Resolves the navigation links for a page.
///
/// Returns `None` when neither side yields a usable link, in which case no
/// navigation region is rendered at all. A link missing its path or title
/// is dropped for that side only.
pub fn resolve(context: &NavigationContext) -> Option<Navigation> {
    let previous = context.previous.as_ref().and_then(nav_link);
    let next = context.next.as_ref().and_then(nav_link);

    if previous.is_none() && next.is_none() {
        return None;
    }

    Some(Navigation { previous, next })
}

fn nav_link(link: &PostLink) -> Option<NavLink> {
    let path = link.path.as_deref().filter(|path| !path.is_empty())?;
    let label = link.title.as_deref()?;

    Some(NavLink {
        path: path.to_string(),
        label: label.to_string(),
    })
}
