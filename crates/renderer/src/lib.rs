//! HTML rendering for the Plot Venture site.
//!
//! Templates are plain `format!` strings; every value that comes from the
//! content store is escaped unless it is rich content or an authored embed.

pub mod blocks;
pub mod html;
pub mod icons;
pub mod layout;
pub mod pages;
pub mod rich_text;
pub mod sections;

use site_kit_core::config::Environment;
use site_kit_core::nav::{self, is_reserved_slug};
use site_kit_core::{GalleryImage, ImageResolver, NavEntry, Page, SiteConfig, SiteSettings};

pub use blocks::{render_blocks, render_sections};

/// Settings every template needs, derived once from [`SiteConfig`]
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub images: ImageResolver,
    pub environment: Environment,
}

impl RenderContext {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            images: config.image_resolver(),
            environment: config.environment,
        }
    }

    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self {
            images: ImageResolver::new("http://cms.test"),
            environment: Environment::Development,
        }
    }
}

/// Per-request data shared by the navbar and footer
#[derive(Debug, Clone, Default)]
pub struct SiteData {
    pub nav: Vec<NavEntry>,
    pub settings: Option<SiteSettings>,
}

impl SiteData {
    /// Compose the navigation from the fixed links and the CMS navbar pages
    pub fn new(navbar_pages: &[Page], settings: Option<SiteSettings>) -> Self {
        Self {
            nav: nav::compose(&nav::static_entries(), navbar_pages),
            settings,
        }
    }
}

/// Everything fetched from the content store for a static build
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    /// Published pages in navbar order
    pub pages: Vec<Page>,
    pub gallery: Vec<GalleryImage>,
    pub settings: Option<SiteSettings>,
}

pub struct GeneratedSite {
    pub pages: Vec<(String, String)>, // (path relative to the output root, html)
}

/// Render every route of the site into files.
///
/// Built-in routes always exist. Each published CMS page with a routable,
/// unreserved slug gets `{slug}/index.html`.
pub fn generate_site(content: &SiteContent, ctx: &RenderContext) -> GeneratedSite {
    let site = SiteData::new(&content.pages, content.settings.clone());
    let find = |slug: &str| content.pages.iter().find(|page| page.slug == slug);

    let mut files = vec![
        ("index.html".to_string(), pages::home(find("home"), &site, ctx)),
        ("about/index.html".to_string(), pages::about(find("about"), &site, ctx)),
        ("location/index.html".to_string(), pages::location(find("location"), &site, ctx)),
        ("gallery/index.html".to_string(), pages::gallery(&content.gallery, &site, ctx)),
        ("contact/index.html".to_string(), pages::contact(find("contact"), &site, ctx)),
    ];

    for page in content.pages.iter().filter(|page| page.is_published()) {
        let slug = page.slug.trim();
        if is_reserved_slug(slug) {
            continue;
        }
        if !is_path_segment(slug) {
            tracing::warn!(slug = %page.slug, "slug cannot be written as a directory, skipping");
            continue;
        }
        files.push((format!("{}/index.html", slug), pages::dynamic(page, &site, ctx)));
    }

    files.push(("404.html".to_string(), pages::not_found(&site, ctx)));

    GeneratedSite { pages: files }
}

fn is_path_segment(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && slug
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn page(value: serde_json::Value) -> Page {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_render_context_from_config() {
        let config = SiteConfig::default();
        let ctx = RenderContext::new(&config);
        assert_eq!(ctx.images.base_url(), "http://localhost:1337");
        assert!(!ctx.environment.is_production());
    }

    #[test]
    fn test_site_data_composes_nav() {
        let services = page(json!({
            "slug": "services",
            "title": "Services",
            "show_in_navbar": true,
            "nav_order": 1,
            "publishedAt": "2024-01-01"
        }));
        let site = SiteData::new(&[services], None);
        let labels: Vec<&str> = site.nav.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Home", "About", "Location", "Gallery", "Contact", "Services"]
        );
    }

    #[test]
    fn test_generate_site_routes() {
        let content = SiteContent {
            pages: vec![
                page(json!({ "slug": "services", "title": "Services", "publishedAt": "2024-01-01" })),
                page(json!({ "slug": "About", "title": "Shadowed", "publishedAt": "2024-01-01" })),
                page(json!({ "slug": "../escape", "publishedAt": "2024-01-01" })),
                page(json!({ "slug": "draft", "publishedAt": null })),
            ],
            ..SiteContent::default()
        };

        let site = generate_site(&content, &RenderContext::for_tests());
        let paths: Vec<&str> = site.pages.iter().map(|(path, _)| path.as_str()).collect();

        assert_eq!(
            paths,
            vec![
                "index.html",
                "about/index.html",
                "location/index.html",
                "gallery/index.html",
                "contact/index.html",
                "services/index.html",
                "404.html",
            ]
        );
    }
}
