//! Page composition.
//!
//! Turns a post and its surroundings into the ordered list of sections the
//! renderer walks. Section order never depends on the data: an absent
//! neighbour or an empty tag list changes what a section contains, not
//! where it sits.

use crate::navigation::{self, Navigation};
use crate::post::{Body, NavigationContext, Post, TagCounts, TagGroup};
use crate::share::{self, ShareBundle};

/// Everything needed to compose one post page.
#[derive(Debug, Clone, Copy)]
pub struct PageInput<'a> {
    pub post: &'a Post,
    pub navigation: &'a NavigationContext,
    /// Site origin, known only when the page address is determinable.
    pub origin: Option<&'a str>,
    pub tag_counts: &'a TagCounts,
}

/// One region of a post page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Title(String),
    Date(String),
    Tags(Vec<TagGroup>),
    Body(Body),
    Share(ShareBundle),
    /// `None` renders nothing at all.
    Navigation(Option<Navigation>),
}

impl Section {
    pub fn name(&self) -> &'static str {
        match self {
            Section::Title(_) => "title",
            Section::Date(_) => "date",
            Section::Tags(_) => "tags",
            Section::Body(_) => "body",
            Section::Share(_) => "share",
            Section::Navigation(_) => "navigation",
        }
    }
}

/// A composed post page, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPage {
    title: String,
    path: String,
    sections: Vec<Section>,
}

impl ComposedPage {
    /// Document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Site relative path of the page.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn share_bundle(&self) -> Option<&ShareBundle> {
        self.sections.iter().find_map(|section| match section {
            Section::Share(bundle) => Some(bundle),
            _ => None,
        })
    }

    pub fn navigation(&self) -> Option<&Navigation> {
        self.sections.iter().find_map(|section| match section {
            Section::Navigation(navigation) => navigation.as_ref(),
            _ => None,
        })
    }

    pub fn tag_groups(&self) -> &[TagGroup] {
        self.sections
            .iter()
            .find_map(|section| match section {
                Section::Tags(groups) => Some(groups.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }
}

/// Composes a post page.
///
/// Sections come out as title, date, tags, body, share, navigation.
pub fn compose(input: &PageInput<'_>) -> ComposedPage {
    let post = input.post;

    let sections = vec![
        Section::Title(post.title.clone()),
        Section::Date(post.date.clone()),
        Section::Tags(tag_groups(&post.tags, input.tag_counts)),
        Section::Body(post.body.clone()),
        Section::Share(share::build(post, input.origin)),
        Section::Navigation(navigation::resolve(input.navigation)),
    ];

    ComposedPage {
        title: post.title.clone(),
        path: post.path.clone(),
        sections,
    }
}

/// Pairs each tag with its site wide count, keeping post order.
pub fn tag_groups(tags: &[String], counts: &TagCounts) -> Vec<TagGroup> {
    tags.iter()
        .map(|tag| TagGroup::new(tag.clone(), counts.count(tag)))
        .collect()
}
