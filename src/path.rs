//! Path utilities for HTML generation

use std::path::{Path, PathBuf};

/// Calculates directory depth of a post page.
///
/// Each post is written as `<path>/index.html`, so the depth is the number
/// of non-empty segments in its site relative path, `.` segments excluded.
///
/// # Arguments
///
/// * `post_path`: Site relative post path (e.g. "/2021/intro")
///
/// # Returns
///
/// Number of `../` hops from the page back to the site root
pub fn calculate_depth(post_path: &str) -> usize {
    segments(post_path).count()
}

/// Relative prefix from a post page back to the site root.
pub fn root_prefix(post_path: &str) -> String {
    "../".repeat(calculate_depth(post_path))
}

/// Directory a post page is written to inside the output directory.
pub fn page_dir(output: &Path, post_path: &str) -> PathBuf {
    segments(post_path).fold(output.to_path_buf(), |dir, segment| dir.join(segment))
}

fn segments(post_path: &str) -> impl Iterator<Item = &str> {
    post_path.split('/').filter(|s| !s.is_empty() && *s != ".")
}
