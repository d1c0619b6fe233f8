use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::section::Section;

/// Reads `null` the same way as a missing field.
///
/// The content store emits `null` for every unset attribute, so plain
/// `#[serde(default)]` is not enough for strings, lists and flags.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A page record as published by the content store
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(rename = "documentId", default)]
    pub document_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Long-form content for pages that are not built from sections
    #[serde(default)]
    pub content: Option<RichContent>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub show_in_navbar: bool,
    #[serde(default)]
    pub nav_order: Option<i64>,
    #[serde(default)]
    pub nav_label: Option<String>,
    /// `None` means the record is a draft and must never be rendered
    #[serde(rename = "publishedAt", default)]
    pub published_at: Option<String>,
    /// Legacy single image still used by the about page
    #[serde(default)]
    pub hero_image: Option<Image>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sections: Vec<Section>,
}

impl Page {
    pub fn is_published(&self) -> bool {
        self.published_at
            .as_deref()
            .is_some_and(|stamp| !stamp.trim().is_empty())
    }

    /// Document title: `meta_title`, then `title`, then "Page"
    pub fn meta_title(&self) -> &str {
        first_non_empty(&[self.meta_title.as_deref(), Some(self.title.as_str())]).unwrap_or("Page")
    }

    /// Document description: `meta_description`, then `subtitle`, then empty
    pub fn meta_description(&self) -> &str {
        first_non_empty(&[self.meta_description.as_deref(), self.subtitle.as_deref()])
            .unwrap_or("")
    }
}

/// Returns the first candidate that is present and not blank.
pub fn first_non_empty<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|value| !value.trim().is_empty())
}

/// Media reference attached to a record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub id: Option<u64>,
    /// Absolute (`https://...`) or root-relative (`/uploads/...`)
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "alternativeText", default)]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl Image {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }
}

/// Image in the gallery single type
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GalleryImage {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(rename = "documentId", default)]
    pub document_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "alternativeText", default)]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Gallery single type; only the image list is read
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Gallery {
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<GalleryImage>,
}

/// Site-wide settings singleton
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SiteSettings {
    #[serde(rename = "siteName", default)]
    pub site_name: Option<String>,
    #[serde(rename = "siteDescription", default)]
    pub site_description: Option<String>,
    #[serde(rename = "contactEmail", default)]
    pub contact_email: Option<String>,
    #[serde(rename = "contactPhone", default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub logo: Option<Image>,
    #[serde(default)]
    pub google_maps_embed: Option<String>,
}

/// Rich text as stored by the content store.
///
/// Older records carry pre-rendered markup, newer ones a block array.
#[derive(Debug, Clone, PartialEq)]
pub enum RichContent {
    Markup(String),
    Blocks(Vec<BlockNode>),
}

impl<'de> Deserialize<'de> for RichContent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(markup) => RichContent::Markup(markup),
            Value::Array(nodes) => RichContent::Blocks(
                nodes
                    .into_iter()
                    .map(|node| serde_json::from_value(node).unwrap_or_default())
                    .collect(),
            ),
            _ => RichContent::Markup(String::new()),
        })
    }
}

/// One top-level block of structured rich text
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BlockNode {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    /// Heading level
    #[serde(default)]
    pub level: Option<u8>,
    /// `"ordered"` or `"unordered"` for lists
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<InlineNode>,
}

/// Text run, list item or inline link inside a block
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InlineNode {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<InlineNode>,
}

impl InlineNode {
    /// This node's text followed by its descendants' text, in document order
    pub fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_nulls_read_as_defaults() {
        let page: Page = serde_json::from_value(json!({
            "id": 4,
            "documentId": "abc123",
            "slug": "services",
            "title": null,
            "show_in_navbar": null,
            "nav_order": null,
            "publishedAt": null,
            "sections": null
        }))
        .unwrap();

        assert_eq!(page.slug, "services");
        assert_eq!(page.title, "");
        assert!(!page.show_in_navbar);
        assert!(page.sections.is_empty());
        assert!(!page.is_published());
    }

    #[test]
    fn test_page_is_published() {
        let page: Page = serde_json::from_value(json!({
            "slug": "home",
            "publishedAt": "2024-01-01T10:00:00.000Z"
        }))
        .unwrap();
        assert!(page.is_published());

        let blank: Page = serde_json::from_value(json!({ "slug": "home", "publishedAt": "" })).unwrap();
        assert!(!blank.is_published());
    }

    #[test]
    fn test_page_meta_fallbacks() {
        let mut page = Page {
            title: "Services".to_string(),
            subtitle: Some("What we do".to_string()),
            ..Page::default()
        };
        assert_eq!(page.meta_title(), "Services");
        assert_eq!(page.meta_description(), "What we do");

        page.meta_title = Some("Our Services".to_string());
        page.meta_description = Some("Sales and management".to_string());
        assert_eq!(page.meta_title(), "Our Services");
        assert_eq!(page.meta_description(), "Sales and management");

        let empty = Page::default();
        assert_eq!(empty.meta_title(), "Page");
        assert_eq!(empty.meta_description(), "");
    }

    #[test]
    fn test_rich_content_string_and_blocks() {
        let markup: RichContent = serde_json::from_value(json!("<p>Hi</p>")).unwrap();
        assert_eq!(markup, RichContent::Markup("<p>Hi</p>".to_string()));

        let blocks: RichContent = serde_json::from_value(json!([
            { "type": "paragraph", "children": [{ "type": "text", "text": "Hello" }] },
            42
        ]))
        .unwrap();
        let RichContent::Blocks(nodes) = blocks else {
            panic!("expected blocks");
        };
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].kind, "paragraph");
        // unreadable node survives as an empty block so positions are kept
        assert_eq!(nodes[1], BlockNode::default());
    }

    #[test]
    fn test_inline_collect_text_is_depth_first() {
        let node: InlineNode = serde_json::from_value(json!({
            "type": "list-item",
            "children": [
                { "type": "text", "text": "Visit " },
                { "type": "link", "children": [{ "type": "text", "text": "our site" }] },
                { "type": "text", "text": "!" }
            ]
        }))
        .unwrap();

        let mut out = String::new();
        node.collect_text(&mut out);
        assert_eq!(out, "Visit our site!");
    }

    #[test]
    fn test_settings_field_names() {
        let settings: SiteSettings = serde_json::from_value(json!({
            "siteName": "Plot Venture",
            "contactPhone": "5551234567",
            "logo": { "id": 1, "url": "/uploads/logo.png", "width": 192, "height": 48 }
        }))
        .unwrap();
        assert_eq!(settings.site_name.as_deref(), Some("Plot Venture"));
        assert_eq!(settings.contact_phone.as_deref(), Some("5551234567"));
        assert_eq!(
            settings.logo.and_then(|logo| logo.url).as_deref(),
            Some("/uploads/logo.png")
        );
    }

    #[test]
    fn test_first_non_empty() {
        assert_eq!(first_non_empty(&[None, Some("  "), Some("x")]), Some("x"));
        assert_eq!(first_non_empty(&[None, Some("")]), None);
    }
}
