use async_trait::async_trait;
use serde_json::Value;
use site_kit_client::{ContentSource, navbar_pages, select_published};
use site_kit_core::config::Environment;
use site_kit_core::{GalleryImage, ImageResolver, Page, SiteSettings};
use site_kit_renderer::RenderContext;

/// Content store held in memory, for router and build tests
#[derive(Default)]
pub struct MemorySource {
    pub pages: Vec<Page>,
    pub gallery: Vec<GalleryImage>,
    pub settings: Option<SiteSettings>,
}

impl MemorySource {
    pub fn with_pages(pages: Value) -> Self {
        Self {
            pages: serde_json::from_value(pages).unwrap(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn fetch_page_by_slug(&self, slug: &str) -> Option<Page> {
        select_published(self.pages.clone(), slug)
    }

    async fn fetch_all_published_pages(&self) -> Vec<Page> {
        self.pages
            .iter()
            .filter(|page| page.is_published())
            .cloned()
            .collect()
    }

    async fn fetch_navbar_pages(&self) -> Vec<Page> {
        navbar_pages(self.pages.clone())
    }

    async fn fetch_gallery_images(&self) -> Vec<GalleryImage> {
        self.gallery.clone()
    }

    async fn fetch_site_settings(&self) -> Option<SiteSettings> {
        self.settings.clone()
    }
}

pub fn render_context() -> RenderContext {
    RenderContext {
        images: ImageResolver::new("http://cms.test"),
        environment: Environment::Development,
    }
}
