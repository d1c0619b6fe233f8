//! Section templates: one per section kind, each taking its record verbatim.

pub mod about;
pub mod cta;
pub mod features;
pub mod hero;
pub mod stats;

use site_kit_core::{Link, Stat};

use crate::html::html_escape;

/// Pill shown above a section title; empty when there is no badge
pub(crate) fn badge(badge: Option<&str>) -> String {
    match badge.map(str::trim) {
        Some(text) if !text.is_empty() => {
            format!(r#"<div class="badge">{}</div>"#, html_escape(text))
        }
        _ => String::new(),
    }
}

/// Centered section heading with an optional subtitle
pub(crate) fn section_heading(title: &str, subtitle: &str) -> String {
    let subtitle_html = if subtitle.trim().is_empty() {
        String::new()
    } else {
        format!(r#"<p class="section-subtitle">{}</p>"#, html_escape(subtitle))
    };

    format!(
        r#"<div class="section-heading">
    <div class="badge">Featured</div>
    <h2>{}</h2>
    {}
    <div class="divider"></div>
</div>"#,
        html_escape(title),
        subtitle_html
    )
}

/// Row of call-to-action buttons; empty when there are none
pub(crate) fn buttons(links: &[Link]) -> String {
    if links.is_empty() {
        return String::new();
    }

    let buttons: String = links.iter().map(button).collect();
    format!(r#"<div class="button-row">{}</div>"#, buttons)
}

fn button(link: &Link) -> String {
    let href = if link.url.trim().is_empty() {
        "#"
    } else {
        link.url.trim()
    };
    let external = if link.is_external {
        r#" target="_blank" rel="noopener noreferrer""#
    } else {
        ""
    };

    format!(
        r#"<a class="btn btn-{}" href="{}"{}>{}</a>"#,
        link.variant.as_str(),
        html_escape(href),
        external,
        html_escape(&link.label)
    )
}

/// Number/label pairs, shared by the stats band and the about card
pub(crate) fn stat_items(stats: &[Stat]) -> String {
    stats
        .iter()
        .map(|stat| {
            format!(
                r#"<div class="stat"><div class="stat-number">{}</div><div class="stat-label">{}</div></div>"#,
                html_escape(&stat.number),
                html_escape(&stat.label)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_kit_core::LinkVariant;

    #[test]
    fn test_badge() {
        assert_eq!(badge(None), "");
        assert_eq!(badge(Some("  ")), "");
        assert_eq!(badge(Some("New")), r#"<div class="badge">New</div>"#);
    }

    #[test]
    fn test_buttons_empty() {
        assert_eq!(buttons(&[]), "");
    }

    #[test]
    fn test_button_variants_and_external() {
        let mut external = Link::new("Brochure", "https://example.com/b.pdf", LinkVariant::Secondary);
        external.is_external = true;
        let html = buttons(&[
            Link::new("Book a Site Visit", "/contact", LinkVariant::Primary),
            Link::new("Learn More", "/about", LinkVariant::Outline),
            external,
        ]);

        assert!(html.contains(r#"<a class="btn btn-primary" href="/contact">Book a Site Visit</a>"#));
        assert!(html.contains(r#"<a class="btn btn-outline" href="/about">Learn More</a>"#));
        assert!(html.contains(
            r#"<a class="btn btn-secondary" href="https://example.com/b.pdf" target="_blank" rel="noopener noreferrer">Brochure</a>"#
        ));
    }

    #[test]
    fn test_button_missing_url_and_label() {
        let html = buttons(&[Link::default()]);
        assert!(html.contains(r##"href="#""##));
    }

    #[test]
    fn test_button_escapes_label_and_url() {
        let html = buttons(&[Link::new("<b>Go</b>", "/x?a=1&b=2", LinkVariant::Primary)]);
        assert!(html.contains(r#"href="/x?a=1&amp;b=2""#));
        assert!(html.contains("&lt;b&gt;Go&lt;/b&gt;"));
    }
}
