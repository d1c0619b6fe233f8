//! Full pages: built-in routes and CMS-driven dynamic pages.
//!
//! Every function returns a complete HTML document. Missing CMS content
//! falls back to the site's built-in copy.

use site_kit_core::{
    AboutSection, CtaSection, Feature, FeaturesSection, GalleryImage, HeroSection, Link,
    LinkVariant, Page, RichContent, Section, Stat, StatsSection, first_non_empty,
};

use crate::blocks::render_blocks;
use crate::html::{email_link, format_phone, html_escape, phone_link, whatsapp_link};
use crate::layout::{PageMeta, contact_list, document};
use crate::sections::section_heading;
use crate::{RenderContext, SiteData, rich_text};

const HOME_SLUG: &str = "home";

const ABOUT_PHOTO: &str = "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80";

const ABOUT_CONTENT: &str = "<p>Plot Venture is a leading real estate development company with a vision to create exceptional living spaces that combine luxury, comfort, and sustainability.</p>\
<p>With years of experience in the industry, we have successfully delivered numerous projects that have transformed communities and enriched lives.</p>\
<p>Our commitment to quality, innovation, and customer satisfaction sets us apart in the real estate market.</p>";

const LOCATION_CONTENT: &str = "<p>Our development is strategically located in one of the most sought-after areas, offering excellent connectivity and access to all essential amenities.</p>\
<p>The location provides easy access to major highways, business districts, educational institutions, healthcare facilities, and entertainment centers.</p>";

const CORE_VALUES: &[(&str, &str)] = &[
    (
        "Excellence",
        "We strive for excellence in every project, ensuring the highest standards of quality and craftsmanship.",
    ),
    (
        "Integrity",
        "We conduct our business with honesty, transparency, and ethical practices.",
    ),
    (
        "Innovation",
        "We embrace innovative design and technology to create sustainable and modern living spaces.",
    ),
];

const AMENITIES: &[(&str, &str)] = &[
    ("Schools", "Top-rated educational institutions within 5km"),
    ("Hospitals", "Leading healthcare facilities nearby"),
    ("Shopping", "Modern malls and retail centers"),
    ("Transport", "Easy access to public transportation"),
];

const PLACEHOLDER_PHOTOS: &[&str] = &[
    "https://images.unsplash.com/photo-1560518883-ce09059eeffa?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1600585154084-4e5f7f23ea86?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1600585154526-990dced4db0d?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
];

/// Home page: the CMS `home` page's sections when it is published and has
/// any, otherwise the built-in layout.
pub fn home(page: Option<&Page>, site: &SiteData, ctx: &RenderContext) -> String {
    let cms_page = page.filter(|p| {
        p.slug.eq_ignore_ascii_case(HOME_SLUG) && p.is_published() && !p.sections.is_empty()
    });

    let (meta, body) = match cms_page {
        Some(page) => (
            PageMeta::new(page.meta_title(), page.meta_description()),
            render_blocks(&page.sections, ctx),
        ),
        None => (
            PageMeta::new("Premium Real Estate", "Your dream home awaits at Plot Venture"),
            render_blocks(&default_home_sections(), ctx),
        ),
    };

    document(&meta, &body, site, ctx)
}

/// Sections shown on the home page until the CMS provides its own
pub fn default_home_sections() -> Vec<Section> {
    let feature = |title: &str, description: &str, icon: &str| Feature {
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        ..Feature::default()
    };
    let stat = |number: &str, label: &str| Stat {
        number: number.to_string(),
        label: label.to_string(),
        ..Stat::default()
    };

    vec![
        Section::Hero(HeroSection {
            buttons: vec![
                Link::new("Book a Site Visit", "/contact", LinkVariant::Primary),
                Link::new("Learn More", "/about", LinkVariant::Outline),
            ],
            ..HeroSection::default()
        }),
        Section::Features(FeaturesSection {
            title: "Why Choose Plot Venture".to_string(),
            subtitle: "Discover the advantages of investing with us".to_string(),
            features: vec![
                feature("Premium Locations", "Strategically located in prime areas with excellent connectivity and amenities.", "Home"),
                feature("Secure Investment", "Trusted developer with a proven track record of successful projects.", "Shield"),
                feature("High Returns", "Invest in properties with exceptional growth potential and value appreciation.", "TrendingUp"),
                feature("Prime Location", "Close to schools, hospitals, shopping centers, and major business districts.", "MapPin"),
                feature("Community Living", "Experience a vibrant community with modern amenities and facilities.", "Users"),
                feature("Quality Assurance", "Built with premium materials and attention to detail in every aspect.", "Award"),
            ],
            ..FeaturesSection::default()
        }),
        Section::About(AboutSection {
            badge: Some("About Us".to_string()),
            title: "Crafting Exceptional Living Spaces".to_string(),
            content: Some(RichContent::Markup(
                "Plot Venture is a leading real estate developer committed to creating exceptional living spaces. With years of experience and a passion for excellence, we deliver premium properties that exceed expectations.".to_string(),
            )),
            stats: vec![stat("98%", "Success Rate"), stat("500+", "Projects")],
            buttons: vec![
                Link::new("Learn More", "/about", LinkVariant::Primary),
                Link::new("View Gallery", "/gallery", LinkVariant::Outline),
            ],
            ..AboutSection::default()
        }),
        Section::Stats(StatsSection {
            stats: vec![
                stat("500+", "Happy Clients"),
                stat("98%", "Satisfaction Rate"),
                stat("25+", "Years Experience"),
                stat("50+", "Awards Won"),
            ],
            ..StatsSection::default()
        }),
        Section::Cta(CtaSection {
            badge: Some("Get Started Today".to_string()),
            title: "Ready to Find Your Dream Home?".to_string(),
            description: "Schedule a site visit today and experience the Plot Venture difference. Our team is ready to help you find the perfect property.".to_string(),
            buttons: vec![
                Link::new("Book a Site Visit", "/contact", LinkVariant::Primary),
                Link::new("Explore Location", "/location", LinkVariant::Outline),
            ],
            ..CtaSection::default()
        }),
    ]
}

/// Title/subtitle/content of a built-in page, with CMS values taking priority
struct PageCopy<'a> {
    title: &'a str,
    subtitle: &'a str,
    content: String,
}

impl<'a> PageCopy<'a> {
    fn from_page(page: Option<&'a Page>, title: &'a str, subtitle: &'a str, content: &str) -> Self {
        let page = page.filter(|p| p.is_published());
        let authored = page.and_then(|p| p.content.as_ref());
        let authored_html = rich_text::to_html(authored);

        Self {
            title: first_non_empty(&[page.map(|p| p.title.as_str())]).unwrap_or(title),
            subtitle: first_non_empty(&[page.and_then(|p| p.subtitle.as_deref())]).unwrap_or(subtitle),
            content: if authored_html.trim().is_empty() {
                content.to_string()
            } else {
                authored_html
            },
        }
    }
}

fn page_header(badge: &str, title: &str, subtitle: &str) -> String {
    format!(
        r#"<section class="page-header">
    <div class="container">
        <div class="badge">{}</div>
        <h1>{}</h1>
        <p>{}</p>
    </div>
</section>"#,
        html_escape(badge),
        html_escape(title),
        html_escape(subtitle)
    )
}

fn simple_cards(items: &[(&str, &str)]) -> String {
    items
        .iter()
        .map(|(title, description)| {
            format!(
                r#"<div class="feature-card"><h3>{}</h3><p>{}</p></div>"#,
                title, description
            )
        })
        .collect()
}

pub fn about(page: Option<&Page>, site: &SiteData, ctx: &RenderContext) -> String {
    let copy = PageCopy::from_page(
        page,
        "About Plot Venture",
        "Building Dreams, Creating Communities",
        ABOUT_CONTENT,
    );
    let image = ctx.images.resolve_or(
        page.filter(|p| p.is_published())
            .and_then(|p| p.hero_image.as_ref()),
        ABOUT_PHOTO,
    );

    let body = format!(
        r#"{header}
<section class="about">
    <div class="container about-grid">
        <div class="about-media"><img src="{image}" alt="{alt}"></div>
        <div class="rich-text">{content}</div>
    </div>
</section>
<section class="features">
    <div class="container">
        {values_heading}
        <div class="feature-grid">{values}</div>
    </div>
</section>"#,
        header = page_header("Our Story", copy.title, copy.subtitle),
        image = html_escape(&image),
        alt = html_escape(copy.title),
        content = copy.content,
        values_heading = section_heading("Our Core Values", "What drives us forward every day"),
        values = simple_cards(CORE_VALUES),
    );

    document(&meta_for(page, copy.title, copy.subtitle), &body, site, ctx)
}

pub fn location(page: Option<&Page>, site: &SiteData, ctx: &RenderContext) -> String {
    let copy = PageCopy::from_page(
        page,
        "Location",
        "Prime Location, Perfect Connectivity",
        LOCATION_CONTENT,
    );

    // the embed is authored markup (an iframe) and is inserted as-is
    let map = site
        .settings
        .as_ref()
        .and_then(|s| s.google_maps_embed.as_deref())
        .filter(|embed| !embed.trim().is_empty())
        .map(|embed| format!(r#"<div class="map-embed">{}</div>"#, embed))
        .unwrap_or_else(|| {
            format!(
                r#"<div class="map-embed map-placeholder">{}</div>"#,
                crate::icons::Icon::MapPin.svg()
            )
        });

    let body = format!(
        r#"{header}
<section>
    <div class="container rich-text">{content}</div>
</section>
<section>
    <div class="container">
        {map_heading}
        {map}
    </div>
</section>
<section class="features">
    <div class="container">
        {amenities_heading}
        <div class="feature-grid">{amenities}</div>
    </div>
</section>"#,
        header = page_header("Prime Location", copy.title, copy.subtitle),
        content = copy.content,
        map_heading = section_heading("Find Us", "Visit us at our location"),
        map = map,
        amenities_heading = section_heading(
            "Nearby Amenities",
            "Everything you need is just minutes away"
        ),
        amenities = simple_cards(AMENITIES),
    );

    document(&meta_for(page, copy.title, copy.subtitle), &body, site, ctx)
}

/// Gallery grid; six stock photographs stand in while the gallery is empty
pub fn gallery(images: &[GalleryImage], site: &SiteData, ctx: &RenderContext) -> String {
    let figures: String = if images.is_empty() {
        PLACEHOLDER_PHOTOS
            .iter()
            .enumerate()
            .map(|(i, url)| figure(url, &format!("Sample real estate image {}", i + 1)))
            .collect()
    } else {
        images
            .iter()
            .enumerate()
            .map(|(i, image)| {
                let fallback_alt = format!("Gallery image {}", i + 1);
                let alt = first_non_empty(&[
                    image.alternative_text.as_deref(),
                    Some(image.name.as_str()),
                ])
                .unwrap_or(&fallback_alt);
                figure(&ctx.images.resolve_url(image.url.as_deref()), alt)
            })
            .collect()
    };

    let body = format!(
        r#"{}
<section>
    <div class="container gallery-grid">{}</div>
</section>"#,
        page_header(
            "Visual Showcase",
            "Gallery",
            "Explore our beautiful properties and developments through stunning photography"
        ),
        figures
    );

    let meta = PageMeta::new("Gallery", "Explore our properties and developments");
    document(&meta, &body, site, ctx)
}

fn figure(url: &str, alt: &str) -> String {
    format!(
        r#"<figure><img src="{}" alt="{}" loading="lazy"></figure>"#,
        html_escape(url),
        html_escape(alt)
    )
}

pub fn contact(page: Option<&Page>, site: &SiteData, ctx: &RenderContext) -> String {
    let copy = PageCopy::from_page(page, "Contact Us", "Get in touch with our team", "");
    let settings = site.settings.as_ref();
    let phone = settings
        .and_then(|s| s.contact_phone.as_deref())
        .filter(|p| !p.trim().is_empty());
    let email = settings
        .and_then(|s| s.contact_email.as_deref())
        .filter(|e| !e.trim().is_empty());

    let mut actions = Vec::new();
    if let Some(phone) = phone {
        actions.push(format!(
            r#"<a class="btn btn-secondary" href="{}">Call {}</a>"#,
            html_escape(&phone_link(phone)),
            html_escape(&format_phone(phone))
        ));
        actions.push(format!(
            r#"<a class="btn btn-outline" href="{}" target="_blank" rel="noopener noreferrer">WhatsApp</a>"#,
            html_escape(&whatsapp_link(
                Some(phone),
                "Hello, I would like to schedule a site visit."
            ))
        ));
    }
    if email.is_some() {
        actions.push(format!(
            r#"<a class="btn btn-primary" href="{}">Send an Email</a>"#,
            html_escape(&email_link(
                email,
                "Site Visit Inquiry",
                "Hello, I would like to know more about your properties."
            ))
        ));
    }

    let body = format!(
        r#"{header}
<section>
    <div class="container">
        <h2>Get In Touch</h2>
        {details}
        <div class="contact-actions">{actions}</div>
    </div>
</section>"#,
        header = page_header("Let's Connect", copy.title, copy.subtitle),
        details = contact_list(settings),
        actions = actions.concat(),
    );

    document(&meta_for(page, copy.title, copy.subtitle), &body, site, ctx)
}

/// A CMS page served under `/{slug}`
pub fn dynamic(page: &Page, site: &SiteData, ctx: &RenderContext) -> String {
    let meta = PageMeta::new(page.meta_title(), page.meta_description());
    let body = render_blocks(&page.sections, ctx);
    document(&meta, &body, site, ctx)
}

pub fn not_found(site: &SiteData, ctx: &RenderContext) -> String {
    let body = r#"<section class="not-found">
    <div class="container">
        <h1>404</h1>
        <h2>Page Not Found</h2>
        <p>The page you&#x27;re looking for doesn&#x27;t exist or has been moved.</p>
        <div class="button-row">
            <a class="btn btn-secondary" href="/">Go Home</a>
            <a class="btn btn-outline" href="/contact">Contact Us</a>
        </div>
    </div>
</section>"#;

    document(&PageMeta::new("Page Not Found", ""), body, site, ctx)
}

fn meta_for(page: Option<&Page>, title: &str, subtitle: &str) -> PageMeta {
    match page.filter(|p| p.is_published()) {
        Some(page) => PageMeta::new(
            first_non_empty(&[page.meta_title.as_deref()]).unwrap_or(title),
            first_non_empty(&[page.meta_description.as_deref()]).unwrap_or(subtitle),
        ),
        None => PageMeta::new(title, subtitle),
    }
}
