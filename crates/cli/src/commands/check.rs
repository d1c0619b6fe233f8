use anyhow::{Context, Result};
use serde::Serialize;
use site_kit_client::{ContentClient, ContentSource};
use site_kit_core::{Page, SiteConfig};

/// What the content store returns, as shown by `check` and `/api/content-check`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentReport {
    pub strapi_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Set when a single slug was checked; `null` means not found or unpublished
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<Option<PageSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<PageSummary>>,
}

#[derive(Debug, Serialize)]
pub struct PageSummary {
    pub id: Option<u64>,
    pub slug: String,
    pub title: String,
    pub published: bool,
    pub show_in_navbar: bool,
    pub sections: usize,
}

impl From<&Page> for PageSummary {
    fn from(page: &Page) -> Self {
        Self {
            id: page.id,
            slug: page.slug.clone(),
            title: page.title.clone(),
            published: page.is_published(),
            show_in_navbar: page.show_in_navbar,
            sections: page.sections.len(),
        }
    }
}

/// Query the content store for one slug, or for every published page
pub async fn report(source: &dyn ContentSource, base_url: &str, slug: Option<&str>) -> ContentReport {
    match slug {
        Some(slug) => {
            let page = source.fetch_page_by_slug(slug).await;
            ContentReport {
                strapi_url: base_url.to_string(),
                slug: Some(slug.to_string()),
                page: Some(page.as_ref().map(PageSummary::from)),
                count: None,
                pages: None,
            }
        }
        None => {
            let pages = source.fetch_all_published_pages().await;
            ContentReport {
                strapi_url: base_url.to_string(),
                slug: None,
                page: None,
                count: Some(pages.len()),
                pages: Some(pages.iter().map(PageSummary::from).collect()),
            }
        }
    }
}

/// Print a content report as JSON
pub async fn run(config: SiteConfig, slug: Option<String>) -> Result<()> {
    let client = ContentClient::new(&config.content).context("Failed to create content client")?;
    let report = report(&client, client.base_url(), slug.as_deref()).await;

    let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
    println!("{}", json);

    Ok(())
}
