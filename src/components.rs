//! Reusable HTML components for the post page
//!
//! This module provides the Maud component functions the renderer stitches
//! together: document wrapper, title and date header, tag badges, share
//! controls and previous/next navigation. Each component takes already
//! derived data and makes no decisions beyond presence checks.

pub mod footer;
pub mod header;
pub mod layout;
pub mod nav;
pub mod share_buttons;
pub mod tags;
