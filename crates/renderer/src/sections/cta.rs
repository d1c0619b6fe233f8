use site_kit_core::CtaSection;

use super::{badge, buttons};
use crate::html::html_escape;

pub fn render(cta: &CtaSection) -> String {
    let description = if cta.description.trim().is_empty() {
        String::new()
    } else {
        format!("<p>{}</p>", html_escape(&cta.description))
    };

    format!(
        r#"<section class="cta">
    <div class="container cta-content">
        {}
        <h2>{}</h2>
        {}
        {}
    </div>
</section>"#,
        badge(cta.badge.as_deref()),
        html_escape(&cta.title),
        description,
        buttons(&cta.buttons)
    )
}
