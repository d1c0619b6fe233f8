//! Page sections: the typed blocks a page layout is assembled from.
//!
//! The content store tags each section with `__component`
//! (`sections.hero`, `sections.features`, ...). Anything that cannot be read
//! as one of the five known kinds becomes [`Section::Unknown`], which the
//! renderer skips. A single bad section never fails the page around it.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::types::{Image, RichContent, null_as_default};

const TAG_FIELD: &str = "__component";
const TAG_NAMESPACE: &str = "sections.";

#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Hero(HeroSection),
    Features(FeaturesSection),
    About(AboutSection),
    Stats(StatsSection),
    Cta(CtaSection),
    /// Skipped by the renderer. `reason` holds the decode error when the tag
    /// was known but its body could not be read.
    Unknown {
        component: Option<String>,
        reason: Option<String>,
    },
}

impl Section {
    /// Read one section from its raw JSON record
    pub fn from_value(value: Value) -> Self {
        let Some(component) = value.get(TAG_FIELD).and_then(Value::as_str) else {
            return Section::Unknown {
                component: None,
                reason: None,
            };
        };
        let component = component.to_string();
        let kind = component
            .strip_prefix(TAG_NAMESPACE)
            .unwrap_or(&component)
            .to_string();

        let parsed = match kind.as_str() {
            "hero" => serde_json::from_value(value).map(Section::Hero),
            "features" => serde_json::from_value(value).map(Section::Features),
            "about" => serde_json::from_value(value).map(Section::About),
            "stats" => serde_json::from_value(value).map(Section::Stats),
            "cta" => serde_json::from_value(value).map(Section::Cta),
            _ => {
                return Section::Unknown {
                    component: Some(component),
                    reason: None,
                };
            }
        };

        match parsed {
            Ok(section) => section,
            Err(err) => Section::Unknown {
                component: Some(component),
                reason: Some(err.to_string()),
            },
        }
    }

    /// Short kind name
    pub fn kind(&self) -> &str {
        match self {
            Section::Hero(_) => "hero",
            Section::Features(_) => "features",
            Section::About(_) => "about",
            Section::Stats(_) => "stats",
            Section::Cta(_) => "cta",
            Section::Unknown { .. } => "unknown",
        }
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Section::from_value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HeroSection {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subtitle: String,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub buttons: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeaturesSection {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subtitle: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AboutSection {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub content: Option<RichContent>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: Vec<Stat>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub buttons: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatsSection {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CtaSection {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub buttons: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Icon key, e.g. "Shield" or "TrendingUp"
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Stat {
    #[serde(default)]
    pub id: Option<u64>,
    /// Display value such as "500+" or "98%"
    #[serde(default, deserialize_with = "null_as_default")]
    pub number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
}

/// Call-to-action button
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub variant: LinkVariant,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_external: bool,
}

impl Link {
    pub fn new(label: &str, url: &str, variant: LinkVariant) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
            variant,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum LinkVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl LinkVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkVariant::Primary => "primary",
            LinkVariant::Secondary => "secondary",
            LinkVariant::Outline => "outline",
        }
    }
}

impl From<Option<String>> for LinkVariant {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("secondary") => LinkVariant::Secondary,
            Some("outline") => LinkVariant::Outline,
            _ => LinkVariant::Primary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dispatch_on_component_tag() {
        let sections: Vec<Section> = serde_json::from_value(json!([
            { "__component": "sections.hero", "id": 1, "title": "Welcome" },
            { "__component": "sections.features", "title": "Why us", "features": [] },
            { "__component": "sections.about", "title": "About", "content": "<p>x</p>" },
            { "__component": "sections.stats", "stats": [{ "number": "500+", "label": "Clients" }] },
            { "__component": "sections.cta", "title": "Ready?" }
        ]))
        .unwrap();

        let kinds: Vec<&str> = sections.iter().map(Section::kind).collect();
        assert_eq!(kinds, vec!["hero", "features", "about", "stats", "cta"]);
    }

    #[test]
    fn test_bare_tags_are_accepted() {
        let section = Section::from_value(json!({ "__component": "cta", "title": "Go" }));
        let Section::Cta(cta) = section else {
            panic!("expected cta section");
        };
        assert_eq!(cta.title, "Go");
    }

    #[test]
    fn test_unknown_and_missing_tags() {
        assert_eq!(
            Section::from_value(json!({ "__component": "sections.carousel" })),
            Section::Unknown {
                component: Some("sections.carousel".to_string()),
                reason: None,
            }
        );
        assert_eq!(
            Section::from_value(json!({ "title": "no tag" })),
            Section::Unknown {
                component: None,
                reason: None,
            }
        );
        assert_eq!(
            Section::from_value(json!("not an object")),
            Section::Unknown {
                component: None,
                reason: None,
            }
        );
    }

    #[test]
    fn test_unreadable_body_becomes_unknown() {
        // buttons must be a list
        let section = Section::from_value(json!({
            "__component": "sections.hero",
            "buttons": "oops"
        }));
        let Section::Unknown { component, reason } = section else {
            panic!("expected unknown section");
        };
        assert_eq!(component.as_deref(), Some("sections.hero"));
        assert!(reason.is_some_and(|r| r.contains("expected a sequence")));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let section = Section::from_value(json!({
            "__component": "sections.hero",
            "badge": null,
            "title": null,
            "image": null,
            "buttons": [{ "label": "Book", "url": "/contact" }]
        }));
        let Section::Hero(hero) = section else {
            panic!("expected hero section");
        };
        assert_eq!(hero.badge, None);
        assert_eq!(hero.title, "");
        assert_eq!(hero.image, None);
        assert_eq!(hero.buttons.len(), 1);
        assert_eq!(hero.buttons[0].variant, LinkVariant::Primary);
        assert!(!hero.buttons[0].is_external);
    }

    #[test]
    fn test_link_variants() {
        let links: Vec<Link> = serde_json::from_value(json!([
            { "label": "a", "url": "/", "variant": "primary" },
            { "label": "b", "url": "/", "variant": "secondary" },
            { "label": "c", "url": "/", "variant": "outline", "is_external": true },
            { "label": "d", "url": "/", "variant": null },
            { "label": "e", "url": "/", "variant": "ghost" }
        ]))
        .unwrap();

        let variants: Vec<LinkVariant> = links.iter().map(|l| l.variant).collect();
        assert_eq!(
            variants,
            vec![
                LinkVariant::Primary,
                LinkVariant::Secondary,
                LinkVariant::Outline,
                LinkVariant::Primary,
                LinkVariant::Primary,
            ]
        );
        assert!(links[2].is_external);
    }
}
