use crate::error::{Error, Result};
use crate::media::ImageResolver;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:1337";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PORT: u16 = 3000;

/// Environment variable that overrides `content.base_url`
pub const BASE_URL_ENV: &str = "STRAPI_URL";
/// Environment variable that overrides `environment`
pub const ENVIRONMENT_ENV: &str = "SITE_ENV";

/// Raw TOML configuration structure
/// This matches the site.toml file structure exactly; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    environment: Option<Environment>,
    #[serde(default)]
    content: RawContentConfig,
    #[serde(default)]
    server: RawServerConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawContentConfig {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    fetch_policy: Option<FetchPolicy>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawServerConfig {
    port: Option<u16>,
}

/// Validated site configuration, passed explicitly to every component
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub environment: Environment,
    pub content: ContentConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

/// How fresh content reads must be.
///
/// There is no local cache either way; the policy only controls what the
/// requests ask of HTTP caches between the site and the content store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FetchPolicy {
    /// Send `Cache-Control: no-store` so every read hits the origin
    #[default]
    NoStore,
    /// Leave caching decisions to the HTTP layer
    Default,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentConfig {
    /// Origin of the content store, without a trailing slash
    pub base_url: String,
    pub timeout: Duration,
    pub fetch_policy: FetchPolicy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            content: ContentConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                fetch_policy: FetchPolicy::default(),
            },
            server: ServerConfig { port: DEFAULT_PORT },
        }
    }
}

impl SiteConfig {
    /// Load configuration from an optional site.toml, then apply
    /// environment overrides from the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => parse_site_toml(path)?,
            None => SiteConfig::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `STRAPI_URL` / `SITE_ENV` overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.content.base_url = validate_base_url(&url, BASE_URL_ENV)?;
        }

        if let Some(env) = lookup(ENVIRONMENT_ENV).filter(|v| !v.trim().is_empty()) {
            self.environment = parse_environment(&env)?;
        }

        Ok(())
    }

    pub fn image_resolver(&self) -> ImageResolver {
        ImageResolver::new(&self.content.base_url)
    }
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<SiteConfig> {
    let content = fs::read_to_string(path)?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<SiteConfig> {
    let raw: RawConfig = toml::from_str(content)?;
    let defaults = SiteConfig::default();

    let base_url = match raw.content.base_url {
        Some(url) => validate_base_url(&url, "content.base_url")?,
        None => defaults.content.base_url,
    };

    let timeout = match raw.content.timeout_secs {
        Some(0) => {
            return Err(Error::InvalidConfig {
                field: "content.timeout_secs",
                message: "timeout must be at least 1 second".to_string(),
            });
        }
        Some(secs) => Duration::from_secs(secs),
        None => defaults.content.timeout,
    };

    Ok(SiteConfig {
        environment: raw.environment.unwrap_or(defaults.environment),
        content: ContentConfig {
            base_url,
            timeout,
            fetch_policy: raw.content.fetch_policy.unwrap_or_default(),
        },
        server: ServerConfig {
            port: raw.server.port.unwrap_or(defaults.server.port),
        },
    })
}

/// Check that a base origin is an http(s) URL and strip trailing slashes.
fn validate_base_url(url: &str, field: &'static str) -> Result<String> {
    let url = url.trim();

    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| Error::InvalidConfig {
            field,
            message: format!("'{}' must start with http:// or https://", url),
        })?;

    if rest.trim_matches('/').is_empty() {
        return Err(Error::InvalidConfig {
            field,
            message: format!("'{}' has no host", url),
        });
    }

    Ok(url.trim_end_matches('/').to_string())
}

fn parse_environment(value: &str) -> Result<Environment> {
    match value.trim().to_ascii_lowercase().as_str() {
        "production" | "prod" => Ok(Environment::Production),
        "development" | "dev" => Ok(Environment::Development),
        other => Err(Error::InvalidConfig {
            field: ENVIRONMENT_ENV,
            message: format!("unknown environment '{}'", other),
        }),
    }
}
