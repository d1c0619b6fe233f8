use site_kit_core::HeroSection;

use super::{badge, buttons};
use crate::RenderContext;
use crate::html::html_escape;

pub const DEFAULT_TITLE: &str = "Welcome to Plot Venture";
pub const DEFAULT_SUBTITLE: &str = "Your Dream Home Awaits";
const FALLBACK_PHOTO: &str = "https://images.unsplash.com/photo-1560518883-ce09059eeffa?ixlib=rb-4.0.3&auto=format&fit=crop&w=1973&q=80";

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() { default } else { value }
}

pub fn render(hero: &HeroSection, ctx: &RenderContext) -> String {
    let title = or_default(&hero.title, DEFAULT_TITLE);
    let subtitle = or_default(&hero.subtitle, DEFAULT_SUBTITLE);
    let image = ctx.images.resolve_or(hero.image.as_ref(), FALLBACK_PHOTO);

    format!(
        r#"<section class="hero">
    <img class="hero-image" src="{image}" alt="{alt}">
    <div class="hero-overlay"></div>
    <div class="container hero-content">
        {badge}
        <h1>{title}</h1>
        <p class="hero-subtitle">{subtitle}</p>
        {buttons}
    </div>
</section>"#,
        image = html_escape(&image),
        alt = html_escape(title),
        badge = badge(hero.badge.as_deref()),
        title = html_escape(title),
        subtitle = html_escape(subtitle),
        buttons = buttons(&hero.buttons),
    )
}
