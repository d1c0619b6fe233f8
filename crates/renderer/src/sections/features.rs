use site_kit_core::{Feature, FeaturesSection};

use super::section_heading;
use crate::html::html_escape;
use crate::icons::Icon;

pub fn render(features: &FeaturesSection) -> String {
    let cards: String = features.features.iter().map(card).collect();

    format!(
        r#"<section class="features">
    <div class="container">
        {}
        <div class="feature-grid">{}</div>
    </div>
</section>"#,
        section_heading(&features.title, &features.subtitle),
        cards
    )
}

fn card(feature: &Feature) -> String {
    format!(
        r#"<div class="feature-card"><div class="feature-icon">{}</div><h3>{}</h3><p>{}</p></div>"#,
        Icon::from_key(&feature.icon).svg(),
        html_escape(&feature.title),
        html_escape(&feature.description)
    )
}
