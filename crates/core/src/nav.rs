//! Site navigation: the fixed links plus pages the content store flags for
//! the navbar.

use crate::types::{Page, first_non_empty};

/// Link in the navbar or the footer's quick links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Routing key, compared case-insensitively against page slugs
    pub slug: String,
    pub href: String,
    pub label: String,
}

impl NavEntry {
    pub fn new(slug: &str, href: &str, label: &str) -> Self {
        Self {
            slug: slug.to_string(),
            href: href.to_string(),
            label: label.to_string(),
        }
    }
}

/// Links that are always present, in display order
pub fn static_entries() -> Vec<NavEntry> {
    vec![
        NavEntry::new("home", "/", "Home"),
        NavEntry::new("about", "/about", "About"),
        NavEntry::new("location", "/location", "Location"),
        NavEntry::new("gallery", "/gallery", "Gallery"),
        NavEntry::new("contact", "/contact", "Contact"),
    ]
}

/// Merge the static links with CMS pages.
///
/// Static entries come first, unchanged. A page joins the list only if it is
/// published, flagged `show_in_navbar`, and its slug does not collide with a
/// static entry. Pages are ordered by `nav_order`; pages without one go last,
/// and ties keep the order they were fetched in.
pub fn compose(static_entries: &[NavEntry], pages: &[Page]) -> Vec<NavEntry> {
    let mut dynamic: Vec<&Page> = pages
        .iter()
        .filter(|page| !page.slug.trim().is_empty())
        .filter(|page| {
            !static_entries
                .iter()
                .any(|entry| entry.slug.eq_ignore_ascii_case(page.slug.trim()))
        })
        .filter(|page| page.show_in_navbar && page.is_published())
        .collect();

    // stable: equal keys keep fetch order
    dynamic.sort_by_key(|page| (page.nav_order.is_none(), page.nav_order.unwrap_or_default()));

    let mut entries = static_entries.to_vec();
    entries.extend(dynamic.into_iter().map(|page| {
        let slug = page.slug.trim();
        NavEntry {
            slug: slug.to_string(),
            href: format!("/{}", slug),
            label: nav_label(page).to_string(),
        }
    }));

    tracing::debug!(entries = entries.len(), "composed navigation");
    entries
}

/// Slugs owned by built-in routes; a CMS page can never be served under one
pub const RESERVED_SLUGS: &[&str] = &["about", "contact", "location", "gallery", "admin", "api"];

pub fn is_reserved_slug(slug: &str) -> bool {
    let slug = slug.trim();
    RESERVED_SLUGS
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(slug))
}

/// `nav_label`, then `title`, then the slug itself
fn nav_label(page: &Page) -> &str {
    first_non_empty(&[page.nav_label.as_deref(), Some(page.title.as_str())])
        .unwrap_or_else(|| page.slug.trim())
}
