/// Icons a feature card can name. Keys outside this set fall back to [`Icon::Home`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    Shield,
    TrendingUp,
    MapPin,
    Users,
    Award,
    Building,
    Star,
    Heart,
    Phone,
    Mail,
    Check,
    Clock,
    Key,
}

impl Icon {
    /// Look up an icon by the key authors type in the CMS ("TrendingUp",
    /// "trending-up" and "trending_up" are the same icon).
    pub fn from_key(key: &str) -> Self {
        let normalized: String = key
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "home" | "house" => Icon::Home,
            "shield" | "shieldcheck" => Icon::Shield,
            "trendingup" => Icon::TrendingUp,
            "mappin" | "location" => Icon::MapPin,
            "users" | "community" => Icon::Users,
            "award" => Icon::Award,
            "building" | "building2" => Icon::Building,
            "star" => Icon::Star,
            "heart" => Icon::Heart,
            "phone" => Icon::Phone,
            "mail" | "email" => Icon::Mail,
            "check" | "checkcircle" => Icon::Check,
            "clock" => Icon::Clock,
            "key" => Icon::Key,
            _ => Icon::Home,
        }
    }

    fn paths(self) -> &'static str {
        match self {
            Icon::Home => {
                r#"<path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/><polyline points="9 22 9 12 15 12 15 22"/>"#
            }
            Icon::Shield => r#"<path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/>"#,
            Icon::TrendingUp => {
                r#"<polyline points="22 7 13.5 15.5 8.5 10.5 2 17"/><polyline points="16 7 22 7 22 13"/>"#
            }
            Icon::MapPin => {
                r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#
            }
            Icon::Users => {
                r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#
            }
            Icon::Award => {
                r#"<circle cx="12" cy="8" r="6"/><path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"/>"#
            }
            Icon::Building => {
                r#"<rect x="4" y="2" width="16" height="20" rx="2"/><path d="M9 22v-4h6v4"/><path d="M8 6h.01M12 6h.01M16 6h.01M8 10h.01M12 10h.01M16 10h.01M8 14h.01M12 14h.01M16 14h.01"/>"#
            }
            Icon::Star => {
                r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#
            }
            Icon::Heart => {
                r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>"#
            }
            Icon::Phone => {
                r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z"/>"#
            }
            Icon::Mail => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
            Icon::Check => r#"<polyline points="20 6 9 17 4 12"/>"#,
            Icon::Clock => r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/>"#,
            Icon::Key => {
                r#"<circle cx="7.5" cy="15.5" r="5.5"/><path d="m21 2-9.6 9.6"/><path d="m15.5 7.5 3 3L22 7l-3-3"/>"#
            }
        }
    }

    /// Inline SVG markup
    pub fn svg(self) -> String {
        format!(
            r#"<svg class="icon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{}</svg>"#,
            self.paths()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys() {
        assert_eq!(Icon::from_key("Shield"), Icon::Shield);
        assert_eq!(Icon::from_key("TrendingUp"), Icon::TrendingUp);
        assert_eq!(Icon::from_key("trending-up"), Icon::TrendingUp);
        assert_eq!(Icon::from_key("map_pin"), Icon::MapPin);
        assert_eq!(Icon::from_key("Award"), Icon::Award);
    }

    #[test]
    fn test_unknown_key_falls_back_to_home() {
        assert_eq!(Icon::from_key("Spaceship"), Icon::Home);
        assert_eq!(Icon::from_key(""), Icon::Home);
    }

    #[test]
    fn test_svg_wraps_paths() {
        let svg = Icon::Check.svg();
        assert!(svg.starts_with("<svg class=\"icon\""));
        assert!(svg.contains("<polyline points=\"20 6 9 17 4 12\"/>"));
        assert!(svg.ends_with("</svg>"));
    }
}
