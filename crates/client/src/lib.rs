// Read access to the content store.
// Every operation reports failure as "absent"; callers pick their own fallback.

mod envelope;
pub mod http;

use async_trait::async_trait;
use site_kit_core::{GalleryImage, Page, SiteSettings};

pub use http::{ClientError, ContentClient};

/// Read-only view of the content store
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// The published page with this slug, if any
    async fn fetch_page_by_slug(&self, slug: &str) -> Option<Page>;

    /// Every published page, in `nav_order` order
    async fn fetch_all_published_pages(&self) -> Vec<Page>;

    /// Published pages flagged for the navbar, sorted by `nav_order`
    async fn fetch_navbar_pages(&self) -> Vec<Page>;

    async fn fetch_gallery_images(&self) -> Vec<GalleryImage>;

    async fn fetch_site_settings(&self) -> Option<SiteSettings>;
}

/// Pick the first published record whose slug matches exactly.
///
/// Drafts are never returned even when they are the only match.
pub fn select_published(pages: Vec<Page>, slug: &str) -> Option<Page> {
    pages
        .into_iter()
        .filter(|page| page.slug == slug)
        .find(Page::is_published)
}

/// Keep published navbar pages, stable-sorted by `nav_order` with unordered
/// pages last.
pub fn navbar_pages(pages: Vec<Page>) -> Vec<Page> {
    let mut pages: Vec<Page> = pages
        .into_iter()
        .filter(|page| page.is_published() && page.show_in_navbar)
        .collect();
    pages.sort_by_key(|page| (page.nav_order.is_none(), page.nav_order.unwrap_or_default()));
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(slug: &str, published: bool) -> Page {
        Page {
            slug: slug.to_string(),
            published_at: published.then(|| "2024-01-01T00:00:00.000Z".to_string()),
            ..Page::default()
        }
    }

    #[test]
    fn test_select_prefers_first_published() {
        let mut first = page("home", true);
        first.title = "first".to_string();
        let mut second = page("home", true);
        second.title = "second".to_string();

        let selected = select_published(vec![page("home", false), first, second], "home").unwrap();
        assert_eq!(selected.title, "first");
    }

    #[test]
    fn test_select_unpublished_is_absent() {
        assert!(select_published(vec![page("home", false)], "home").is_none());
        assert!(select_published(vec![], "home").is_none());
    }

    #[test]
    fn test_select_ignores_other_slugs() {
        assert!(select_published(vec![page("about", true)], "home").is_none());
    }

    #[test]
    fn test_navbar_pages_filter_and_sort() {
        let mut a = page("a", true);
        a.show_in_navbar = true;
        a.nav_order = Some(2);
        let mut b = page("b", true);
        b.show_in_navbar = true;
        let mut c = page("c", true);
        c.show_in_navbar = true;
        c.nav_order = Some(1);
        let mut hidden = page("hidden", true);
        hidden.nav_order = Some(0);
        let mut draft = page("draft", false);
        draft.show_in_navbar = true;

        let slugs: Vec<String> = navbar_pages(vec![a, b, c, hidden, draft])
            .into_iter()
            .map(|p| p.slug)
            .collect();
        assert_eq!(slugs, vec!["c", "a", "b"]);
    }
}
