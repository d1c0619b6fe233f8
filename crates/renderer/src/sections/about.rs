use site_kit_core::AboutSection;

use super::{badge, buttons, stat_items};
use crate::RenderContext;
use crate::html::html_escape;
use crate::rich_text;

const FALLBACK_PHOTO: &str = "https://images.unsplash.com/photo-1582407947304-fd86f028f716?ixlib=rb-4.0.3&auto=format&fit=crop&w=2076&q=80";

pub fn render(about: &AboutSection, ctx: &RenderContext) -> String {
    let image = ctx.images.resolve_or(about.image.as_ref(), FALLBACK_PHOTO);
    let stats = if about.stats.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="about-stats">{}</div>"#, stat_items(&about.stats))
    };

    format!(
        r#"<section class="about">
    <div class="container about-grid">
        <div class="about-text">
            {badge}
            <h2>{title}</h2>
            <div class="rich-text">{content}</div>
            {buttons}
        </div>
        <div class="about-media">
            <img src="{image}" alt="{alt}">
            {stats}
        </div>
    </div>
</section>"#,
        badge = badge(about.badge.as_deref()),
        title = html_escape(&about.title),
        content = rich_text::to_html(about.content.as_ref()),
        buttons = buttons(&about.buttons),
        image = html_escape(&image),
        alt = html_escape(&about.title),
        stats = stats,
    )
}
