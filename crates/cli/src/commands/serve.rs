use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use site_kit_client::{ContentClient, ContentSource};
use site_kit_core::SiteConfig;
use site_kit_core::nav::is_reserved_slug;
use site_kit_renderer::{RenderContext, SiteData, pages};
use std::net::SocketAddr;
use std::path::{Path as FsPath, PathBuf};
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::check;

/// Immutable per-process state shared by every request
pub struct AppState {
    pub source: Box<dyn ContentSource>,
    pub ctx: RenderContext,
    pub base_url: String,
}

type SharedState = Arc<AppState>;

/// Serve the site, rendering every request from live content.
///
/// # Arguments
///
/// * `config` - Validated site configuration
/// * `port` - Overrides `server.port` when given
/// * `public` - Directory holding `logo.png`, `favicon.ico` and `/static` files
pub async fn run(config: SiteConfig, port: Option<u16>, public: PathBuf) -> Result<()> {
    let port = port.unwrap_or(config.server.port);
    let client = ContentClient::new(&config.content).context("Failed to create content client")?;

    println!("🏠 Starting site server...");
    println!("   Content store: {}", client.base_url());
    println!("   Environment: {:?}", config.environment);

    let state = Arc::new(AppState {
        base_url: client.base_url().to_string(),
        source: Box::new(client),
        ctx: RenderContext::new(&config),
    });

    let app = router(state, &public).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Site ready at: http://localhost:{}", port);
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

pub fn router(state: SharedState, public: &FsPath) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/about", get(about_handler))
        .route("/location", get(location_handler))
        .route("/gallery", get(gallery_handler))
        .route("/contact", get(contact_handler))
        .route("/api/content-check", get(content_check_handler))
        .route("/{slug}", get(dynamic_handler))
        .route_service("/logo.png", ServeFile::new(public.join("logo.png")))
        .route_service("/favicon.ico", ServeFile::new(public.join("favicon.ico")))
        .nest_service("/static", ServeDir::new(public.join("static")))
        .fallback(not_found_handler)
        .with_state(state)
}

/// Navbar pages and settings, fetched together
async fn site_data(state: &AppState) -> SiteData {
    let (navbar, settings) = tokio::join!(
        state.source.fetch_navbar_pages(),
        state.source.fetch_site_settings()
    );
    SiteData::new(&navbar, settings)
}

async fn home_handler(State(state): State<SharedState>) -> Html<String> {
    let (page, site) = tokio::join!(state.source.fetch_page_by_slug("home"), site_data(&state));
    Html(pages::home(page.as_ref(), &site, &state.ctx))
}

async fn about_handler(State(state): State<SharedState>) -> Html<String> {
    let (page, site) = tokio::join!(state.source.fetch_page_by_slug("about"), site_data(&state));
    Html(pages::about(page.as_ref(), &site, &state.ctx))
}

async fn location_handler(State(state): State<SharedState>) -> Html<String> {
    let (page, site) = tokio::join!(
        state.source.fetch_page_by_slug("location"),
        site_data(&state)
    );
    Html(pages::location(page.as_ref(), &site, &state.ctx))
}

async fn gallery_handler(State(state): State<SharedState>) -> Html<String> {
    let (images, site) = tokio::join!(state.source.fetch_gallery_images(), site_data(&state));
    Html(pages::gallery(&images, &site, &state.ctx))
}

async fn contact_handler(State(state): State<SharedState>) -> Html<String> {
    let (page, site) = tokio::join!(state.source.fetch_page_by_slug("contact"), site_data(&state));
    Html(pages::contact(page.as_ref(), &site, &state.ctx))
}

async fn dynamic_handler(State(state): State<SharedState>, Path(slug): Path<String>) -> Response {
    if is_reserved_slug(&slug) {
        return not_found(&state).await;
    }

    let (page, site) = tokio::join!(state.source.fetch_page_by_slug(&slug), site_data(&state));
    match page {
        Some(page) => {
            tracing::debug!(slug = %slug, title = %page.title, "rendering page");
            Html(pages::dynamic(&page, &site, &state.ctx)).into_response()
        }
        None => {
            tracing::info!(slug = %slug, "no published page, responding 404");
            (StatusCode::NOT_FOUND, Html(pages::not_found(&site, &state.ctx))).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
struct ContentCheckParams {
    slug: Option<String>,
}

async fn content_check_handler(
    State(state): State<SharedState>,
    Query(params): Query<ContentCheckParams>,
) -> Json<check::ContentReport> {
    let slug = params.slug.as_deref().filter(|s| !s.trim().is_empty());
    Json(check::report(&*state.source, &state.base_url, slug).await)
}

async fn not_found_handler(State(state): State<SharedState>) -> Response {
    not_found(&state).await
}

async fn not_found(state: &AppState) -> Response {
    let site = site_data(state).await;
    (StatusCode::NOT_FOUND, Html(pages::not_found(&site, &state.ctx))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{MemorySource, render_context};
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use serde_json::json;
    use site_kit_core::SiteSettings;
    use tower::ServiceExt;

    fn app(source: MemorySource) -> Router {
        let state = Arc::new(AppState {
            source: Box::new(source),
            ctx: render_context(),
            base_url: "http://cms.test".to_string(),
        });
        router(state, FsPath::new("does-not-exist"))
    }

    async fn request(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    fn services_source() -> MemorySource {
        MemorySource::with_pages(json!([
            {
                "slug": "services",
                "title": "Services",
                "subtitle": "What we offer",
                "show_in_navbar": true,
                "nav_order": 1,
                "publishedAt": "2024-01-01",
                "sections": [
                    { "__component": "sections.cta", "title": "Talk to an advisor" },
                    { "__component": "sections.testimonials" }
                ]
            },
            { "slug": "draft", "title": "Draft", "publishedAt": null }
        ]))
    }

    #[tokio::test]
    async fn test_home_without_cms_page_uses_defaults() {
        let (status, body) = request(app(MemorySource::default()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Welcome to Plot Venture"));
        assert!(body.contains("Why Choose Plot Venture"));
    }

    #[tokio::test]
    async fn test_dynamic_page_and_nav() {
        let (status, body) = request(app(services_source()), "/services").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h2>Talk to an advisor</h2>"));
        assert!(body.contains("<title>Services | Plot Venture</title>"));
        assert!(body.contains(r#"<li><a href="/services">Services</a></li>"#));
    }

    #[tokio::test]
    async fn test_missing_and_draft_pages_are_404() {
        let (status, body) = request(app(services_source()), "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page Not Found"));

        let (status, _) = request(app(services_source()), "/draft").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_reserved_slug_is_404() {
        let source = MemorySource::with_pages(json!([
            { "slug": "admin", "title": "Admin", "publishedAt": "2024-01-01" }
        ]));
        let (status, _) = request(app(source), "/Admin").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_built_in_routes() {
        let mut source = MemorySource::default();
        source.settings = Some(SiteSettings {
            contact_phone: Some("5551234567".to_string()),
            ..SiteSettings::default()
        });
        let app = app(source);

        for (uri, marker) in [
            ("/about", "About Plot Venture"),
            ("/location", "Nearby Amenities"),
            ("/gallery", "Sample real estate image 1"),
            ("/contact", "(555) 123-4567"),
        ] {
            let (status, body) = request(app.clone(), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(body.contains(marker), "{uri} should contain {marker}");
        }
    }

    #[tokio::test]
    async fn test_unknown_nested_path_is_404() {
        let (status, _) = request(app(MemorySource::default()), "/a/b/c").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_content_check() {
        let (status, body) = request(app(services_source()), "/api/content-check").await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["pages"][0]["slug"], "services");

        let (_, body) = request(app(services_source()), "/api/content-check?slug=services").await;
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["page"]["title"], "Services");
    }
}
