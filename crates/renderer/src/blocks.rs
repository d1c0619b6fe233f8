//! Page body assembly from an ordered list of sections.

use site_kit_core::Section;

use crate::RenderContext;
use crate::sections::{about, cta, features, hero, stats};

/// Render each known section in order. Unknown sections produce nothing.
pub fn render_sections(sections: &[Section], ctx: &RenderContext) -> Vec<String> {
    sections
        .iter()
        .filter_map(|section| render_section(section, ctx))
        .collect()
}

/// Render sections into one HTML string
pub fn render_blocks(sections: &[Section], ctx: &RenderContext) -> String {
    render_sections(sections, ctx).join("\n")
}

fn render_section(section: &Section, ctx: &RenderContext) -> Option<String> {
    match section {
        Section::Hero(data) => Some(hero::render(data, ctx)),
        Section::Features(data) => Some(features::render(data)),
        Section::About(data) => Some(about::render(data, ctx)),
        Section::Stats(data) => Some(stats::render(data)),
        Section::Cta(data) => Some(cta::render(data)),
        Section::Unknown { component, reason } => {
            if !ctx.environment.is_production() {
                let component = component.as_deref().unwrap_or("<missing>");
                match reason {
                    Some(reason) => {
                        tracing::warn!(component, reason = %reason, "unreadable section, skipping")
                    }
                    None => tracing::warn!(component, "no template for section, skipping"),
                }
            }
            None
        }
    }
}
