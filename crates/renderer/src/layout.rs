//! Document shell shared by every page: head, navbar, footer.

use chrono::Datelike;
use site_kit_core::{NavEntry, SiteSettings};

use crate::html::{email_link, format_phone, html_escape, phone_link};
use crate::{RenderContext, SiteData};

pub const DEFAULT_LOGO: &str = "/logo.png";
pub const DEFAULT_SITE_DESCRIPTION: &str = "Premium real estate development for your dream home. Building exceptional living spaces since 1999.";
pub const DEFAULT_ADDRESS: &str = "123 Real Estate Avenue, City Center, Country";
const SITE_NAME: &str = "Plot Venture";

const SERVICES: &[&str] = &[
    "Property Sales",
    "Property Management",
    "Investment Consultation",
    "Site Visits",
    "Legal Assistance",
];

/// Title and description for the document head
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Wrap a page body in the full document
pub fn document(meta: &PageMeta, body: &str, site: &SiteData, ctx: &RenderContext) -> String {
    let settings = site.settings.as_ref();
    let site_name = settings
        .and_then(|s| s.site_name.as_deref())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(SITE_NAME);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | {site_name}</title>
    <meta name="description" content="{description}">
    <style>{stylesheet}</style>
</head>
<body>
{navbar}
<main>
{body}
</main>
{footer}
</body>
</html>
"#,
        title = html_escape(&meta.title),
        site_name = html_escape(site_name),
        description = html_escape(&meta.description),
        stylesheet = STYLESHEET,
        navbar = navbar(&site.nav, settings, ctx),
        body = body,
        footer = footer(&site.nav, settings, ctx),
    )
}

fn logo_url(settings: Option<&SiteSettings>, ctx: &RenderContext) -> String {
    ctx.images
        .resolve_or(settings.and_then(|s| s.logo.as_ref()), DEFAULT_LOGO)
}

fn navbar(nav: &[NavEntry], settings: Option<&SiteSettings>, ctx: &RenderContext) -> String {
    let links: String = nav
        .iter()
        .map(|entry| {
            format!(
                r#"<li><a href="{}">{}</a></li>"#,
                html_escape(&entry.href),
                html_escape(&entry.label)
            )
        })
        .collect();

    format!(
        r#"<header class="navbar">
    <div class="container navbar-inner">
        <a class="logo" href="/"><img src="{}" alt="Plot Venture Logo"></a>
        <nav><ul class="nav-links">{}</ul></nav>
        <a class="btn btn-primary" href="/contact">Get Started</a>
    </div>
</header>"#,
        html_escape(&logo_url(settings, ctx)),
        links
    )
}

fn footer(nav: &[NavEntry], settings: Option<&SiteSettings>, ctx: &RenderContext) -> String {
    let description = settings
        .and_then(|s| s.site_description.as_deref())
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(DEFAULT_SITE_DESCRIPTION);

    let quick_links: String = nav
        .iter()
        .map(|entry| {
            format!(
                r#"<li><a href="{}">{}</a></li>"#,
                html_escape(&entry.href),
                html_escape(&entry.label)
            )
        })
        .collect();

    let services: String = SERVICES
        .iter()
        .map(|service| format!("<li>{}</li>", service))
        .collect();

    format!(
        r#"<footer class="footer">
    <div class="container footer-grid">
        <div>
            <img class="footer-logo" src="{logo}" alt="Plot Venture Logo">
            <p>{description}</p>
        </div>
        <div>
            <h3>Quick Links</h3>
            <ul>{quick_links}</ul>
        </div>
        <div>
            <h3>Services</h3>
            <ul>{services}</ul>
        </div>
        <div>
            <h3>Contact Us</h3>
            {contact}
        </div>
    </div>
    <div class="container footer-bottom">&copy; {year} Plot Venture. All rights reserved.</div>
</footer>"#,
        logo = html_escape(&logo_url(settings, ctx)),
        description = html_escape(description),
        quick_links = quick_links,
        services = services,
        contact = contact_list(settings),
        year = chrono::Local::now().year(),
    )
}

/// Phone, email and address lines; shared by the footer and the contact page
pub(crate) fn contact_list(settings: Option<&SiteSettings>) -> String {
    let mut items = Vec::new();

    if let Some(phone) = settings
        .and_then(|s| s.contact_phone.as_deref())
        .filter(|p| !p.trim().is_empty())
    {
        items.push(format!(
            r#"<li class="contact-phone"><a href="{}">{}</a></li>"#,
            html_escape(&phone_link(phone)),
            html_escape(&format_phone(phone))
        ));
    }

    let email = settings.and_then(|s| s.contact_email.as_deref());
    if let Some(address) = email.filter(|e| !e.trim().is_empty()) {
        items.push(format!(
            r#"<li class="contact-email"><a href="{}">{}</a></li>"#,
            html_escape(&email_link(email, "", "")),
            html_escape(address.trim())
        ));
    }

    let address = settings
        .and_then(|s| s.address.as_deref())
        .filter(|a| !a.trim().is_empty())
        .unwrap_or(DEFAULT_ADDRESS);
    items.push(format!(
        r#"<li class="contact-address">{}</li>"#,
        html_escape(address)
    ));

    format!(r#"<ul class="contact-list">{}</ul>"#, items.concat())
}

const STYLESHEET: &str = r#"
:root {
    --gold: #c9a227;
    --gold-dark: #a8841a;
    --teal: #0f766e;
    --ink: #111827;
    --muted: #4b5563;
    --surface: #f9fafb;
}
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; color: var(--ink); line-height: 1.6; }
img { max-width: 100%; display: block; }
a { color: inherit; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
.navbar { position: sticky; top: 0; z-index: 50; background: rgba(255, 255, 255, 0.92); backdrop-filter: blur(8px); border-bottom: 1px solid #e5e7eb; }
.navbar-inner { display: flex; align-items: center; justify-content: space-between; gap: 2rem; height: 72px; }
.logo img { height: 44px; width: auto; }
.nav-links { display: flex; gap: 1.5rem; list-style: none; }
.nav-links a { text-decoration: none; font-weight: 500; }
.nav-links a:hover { color: var(--gold); }
.btn { display: inline-block; padding: 0.85rem 2rem; border-radius: 999px; font-weight: 600; text-decoration: none; transition: transform 0.2s; }
.btn:hover { transform: scale(1.04); }
.btn-primary { background: var(--gold); color: #000; }
.btn-secondary { background: var(--teal); color: #fff; }
.btn-outline { border: 2px solid currentColor; background: transparent; }
.button-row { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; margin-top: 2rem; }
.badge { display: inline-block; padding: 0.3rem 0.9rem; border-radius: 999px; background: rgba(201, 162, 39, 0.12); color: var(--gold); font-size: 0.875rem; font-weight: 600; margin-bottom: 1rem; }
section { padding: 6rem 0; }
.hero { position: relative; min-height: 90vh; display: flex; align-items: center; color: #fff; text-align: center; overflow: hidden; }
.hero-image { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
.hero-overlay { position: absolute; inset: 0; background: linear-gradient(135deg, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.6)); }
.hero-content { position: relative; }
.hero h1 { font-family: "Times New Roman", serif; font-size: clamp(3rem, 8vw, 6rem); line-height: 1.1; margin-bottom: 1.5rem; }
.hero-subtitle { font-size: 1.5rem; color: #e5e7eb; }
.page-header { background: var(--surface); text-align: center; padding: 5rem 0 3rem; }
.page-header h1 { font-size: clamp(2.5rem, 5vw, 4rem); }
.page-header p { color: var(--muted); font-size: 1.25rem; margin-top: 1rem; }
.section-heading { text-align: center; margin-bottom: 4rem; }
.section-heading h2 { font-size: clamp(2.25rem, 4vw, 3.5rem); }
.section-subtitle { color: var(--muted); font-size: 1.2rem; max-width: 40rem; margin: 1rem auto 0; }
.divider { width: 6rem; height: 4px; margin: 2rem auto 0; border-radius: 999px; background: linear-gradient(90deg, var(--gold), var(--teal)); }
.feature-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 2rem; }
.feature-card { padding: 2rem; border-radius: 1.5rem; background: #fff; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.06); }
.feature-icon { color: var(--gold); margin-bottom: 1rem; }
.icon { width: 28px; height: 28px; }
.about-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 4rem; align-items: center; }
.about-media { position: relative; border-radius: 1.5rem; overflow: hidden; }
.about-stats { position: absolute; left: 1.5rem; right: 1.5rem; bottom: 1.5rem; display: flex; justify-content: space-between; padding: 1.25rem; border-radius: 1rem; background: rgba(0, 0, 0, 0.55); color: #fff; }
.rich-text { color: var(--muted); font-size: 1.15rem; }
.rich-text > * + * { margin-top: 1rem; }
.stats { background: var(--ink); color: #fff; }
.stat-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 2rem; text-align: center; }
.stat-number { font-size: 3rem; font-weight: 700; color: var(--gold); }
.cta { background: linear-gradient(135deg, var(--teal), #064e3b); color: #fff; text-align: center; }
.cta h2 { font-size: clamp(2rem, 4vw, 3rem); margin-bottom: 1rem; }
.gallery-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1.5rem; }
.gallery-grid figure { border-radius: 1rem; overflow: hidden; }
.gallery-grid img { width: 100%; height: 260px; object-fit: cover; }
.map-embed { border-radius: 1.5rem; overflow: hidden; margin-top: 3rem; }
.map-embed iframe { width: 100%; height: 450px; border: 0; }
.contact-list { list-style: none; }
.contact-list li + li { margin-top: 0.75rem; }
.contact-actions { display: flex; flex-wrap: wrap; gap: 1rem; margin-top: 2rem; }
.not-found { text-align: center; padding: 8rem 0; }
.not-found h1 { font-size: 6rem; color: var(--gold); }
.footer { background: #0b0f19; color: #9ca3af; padding: 4rem 0 2rem; }
.footer h3 { color: #fff; margin-bottom: 1rem; }
.footer ul { list-style: none; }
.footer a { text-decoration: none; }
.footer a:hover { color: var(--gold); }
.footer-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 3rem; }
.footer-logo { height: 48px; width: auto; margin-bottom: 1.5rem; }
.footer-bottom { border-top: 1px solid #1f2937; margin-top: 3rem; padding-top: 2rem; text-align: center; font-size: 0.875rem; }
"#;
