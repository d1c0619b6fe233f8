use anyhow::{Context, Result};
use futures::future::join_all;
use site_kit_client::{ContentClient, ContentSource};
use site_kit_core::SiteConfig;
use site_kit_renderer::{RenderContext, SiteContent, generate_site};
use std::fs;
use std::path::{Path, PathBuf};

/// Files written by a build
#[derive(Debug, Default, PartialEq)]
pub struct BuildSummary {
    pub pages: usize,
    pub assets: usize,
}

/// Build a static copy of the site
pub async fn run(config: SiteConfig, output: PathBuf, public: PathBuf) -> Result<()> {
    println!("🔨 Building static site...");
    println!("   Content store: {}", config.content.base_url);
    println!("   Output: {}", output.display());
    println!();

    let client = ContentClient::new(&config.content).context("Failed to create content client")?;
    let ctx = RenderContext::new(&config);

    let summary = build_site(&client, &ctx, &output, &public).await?;

    println!("   ✓ Generated {} pages", summary.pages);
    println!("   ✓ Copied {} static files", summary.assets);
    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();
    println!("To test locally:");
    println!("   cd {} && python3 -m http.server 8000", output.display());
    println!();

    Ok(())
}

/// Fetch everything, render every route and write the files under `output`
pub async fn build_site(
    source: &dyn ContentSource,
    ctx: &RenderContext,
    output: &Path,
    public: &Path,
) -> Result<BuildSummary> {
    let content = fetch_content(source).await;
    tracing::info!(pages = content.pages.len(), images = content.gallery.len(), "fetched content");

    fs::create_dir_all(output).context("Failed to create output directory")?;

    let site = generate_site(&content, ctx);
    for (path, html) in &site.pages {
        let dst = output.join(path);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&dst, html).with_context(|| format!("Failed to write {}", dst.display()))?;
        tracing::debug!(path = %path, "wrote page");
    }

    let assets = copy_public(public, output)?;

    Ok(BuildSummary {
        pages: site.pages.len(),
        assets,
    })
}

/// The page listing does not expand nested section fields, so each page is
/// fetched again by slug to get its complete sections.
async fn fetch_content(source: &dyn ContentSource) -> SiteContent {
    let (listed, gallery, settings) = tokio::join!(
        source.fetch_all_published_pages(),
        source.fetch_gallery_images(),
        source.fetch_site_settings()
    );

    let full = join_all(
        listed
            .iter()
            .map(|page| source.fetch_page_by_slug(&page.slug)),
    )
    .await;

    // a page unpublished between the two reads is dropped
    let pages = full.into_iter().flatten().collect();

    SiteContent {
        pages,
        gallery,
        settings,
    }
}

/// Copy the top-level files of the public directory into the output root
fn copy_public(public: &Path, output: &Path) -> Result<usize> {
    if !public.exists() {
        tracing::debug!(path = %public.display(), "no public directory");
        return Ok(0);
    }

    let mut copied = 0;
    for entry in fs::read_dir(public)
        .with_context(|| format!("Failed to read {}", public.display()))?
    {
        let entry = entry?;
        let src = entry.path();
        if !src.is_file() {
            continue;
        }
        let dst = output.join(entry.file_name());
        fs::copy(&src, &dst).with_context(|| format!("Failed to copy {}", src.display()))?;
        copied += 1;
    }

    Ok(copied)
}
