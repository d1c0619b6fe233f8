use async_trait::async_trait;
use reqwest::header::{ACCEPT, CACHE_CONTROL, HeaderMap, HeaderValue};
use site_kit_core::config::{ContentConfig, FetchPolicy};
use site_kit_core::{Gallery, GalleryImage, Page, SiteSettings};
use std::fmt;

use crate::envelope::Envelope;
use crate::{ContentSource, navbar_pages, select_published};

const PAGES_PATH: &str = "/api/pages";
const GALLERY_PATH: &str = "/api/gallery";
const SETTINGS_PATH: &str = "/api/site-settings";

/// How much of an error response body to keep in logs
const ERROR_BODY_LIMIT: usize = 200;

#[derive(Debug)]
pub enum ClientError {
    /// The HTTP client could not be constructed
    Build(reqwest::Error),
    /// Connection failure, timeout, or interrupted body
    Transport(reqwest::Error),
    /// The content store answered with a non-success status
    Status { status: u16, body: String },
    /// The body was not a JSON envelope
    Decode(serde_json::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Build(err) => write!(f, "failed to build HTTP client: {}", err),
            ClientError::Transport(err) => write!(f, "request failed: {}", err),
            ClientError::Status { status, body } => {
                write!(f, "content store returned {}: {}", status, body)
            }
            ClientError::Decode(err) => write!(f, "malformed response body: {}", err),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Build(err) | ClientError::Transport(err) => Some(err),
            ClientError::Decode(err) => Some(err),
            ClientError::Status { .. } => None,
        }
    }
}

/// HTTP client for the content store.
///
/// Holds no state besides the connection pool: every call is a fresh read.
#[derive(Debug, Clone)]
pub struct ContentClient {
    client: reqwest::Client,
    base_url: String,
}

impl ContentClient {
    /// Create a client for the configured content store
    pub fn new(config: &ContentConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if config.fetch_policy == FetchPolicy::NoStore {
            headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET an endpoint and read its `{ data }` envelope
    async fn get_envelope(&self, path: &str, query: &[(&str, &str)]) -> Result<Envelope, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, ?query, "content store request");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: truncate(&body, ERROR_BODY_LIMIT),
            });
        }

        let bytes = response.bytes().await.map_err(ClientError::Transport)?;
        serde_json::from_slice(&bytes).map_err(ClientError::Decode)
    }

    /// Fetch a list endpoint; any failure is logged and reads as empty
    async fn fetch_pages(&self, query: &[(&str, &str)], source: &'static str) -> Vec<Page> {
        match self.get_envelope(PAGES_PATH, query).await {
            Ok(envelope) => envelope.into_records("page"),
            Err(err) => {
                tracing::warn!(source, %err, "content fetch failed; treating as empty");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl ContentSource for ContentClient {
    async fn fetch_page_by_slug(&self, slug: &str) -> Option<Page> {
        if slug.trim().is_empty() {
            return None;
        }

        let query = [
            ("filters[slug][$eq]", slug),
            ("populate[sections][populate]", "*"),
        ];
        let pages = self.fetch_pages(&query, "page").await;
        let candidates = pages.len();

        let page = select_published(pages, slug);
        if page.is_none() {
            tracing::info!(slug, candidates, "no published page for slug");
        }
        page
    }

    async fn fetch_all_published_pages(&self) -> Vec<Page> {
        let query = [("populate", "*"), ("sort", "nav_order:asc")];
        self.fetch_pages(&query, "all-pages")
            .await
            .into_iter()
            .filter(Page::is_published)
            .collect()
    }

    async fn fetch_navbar_pages(&self) -> Vec<Page> {
        let query = [("populate", "*"), ("sort", "nav_order:asc")];
        let pages = navbar_pages(self.fetch_pages(&query, "navbar").await);
        tracing::debug!(count = pages.len(), "navbar pages");
        pages
    }

    async fn fetch_gallery_images(&self) -> Vec<GalleryImage> {
        match self.get_envelope(GALLERY_PATH, &[("populate", "images")]).await {
            Ok(envelope) => envelope
                .into_record::<Gallery>("gallery")
                .map(|gallery| gallery.images)
                .unwrap_or_default(),
            Err(err) => {
                tracing::warn!(source = "gallery", %err, "content fetch failed; treating as empty");
                Vec::new()
            }
        }
    }

    async fn fetch_site_settings(&self) -> Option<SiteSettings> {
        match self.get_envelope(SETTINGS_PATH, &[("populate", "*")]).await {
            Ok(envelope) => envelope.into_record("site-settings"),
            Err(err) => {
                tracing::warn!(source = "site-settings", %err, "content fetch failed; treating as absent");
                None
            }
        }
    }
}

fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("ééééé", 2), "éé...");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ContentConfig {
            base_url: "http://localhost:1337/".to_string(),
            timeout: std::time::Duration::from_secs(1),
            fetch_policy: FetchPolicy::NoStore,
        };
        let client = ContentClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:1337");
    }

    #[test]
    fn test_client_error_display() {
        let err = ClientError::Status {
            status: 503,
            body: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "content store returned 503: maintenance");
    }
}
