pub mod config;
pub mod error;
pub mod media;
pub mod nav;
pub mod section;
pub mod types;

pub use config::{SiteConfig, parse_site_toml};
pub use error::{Error, Result};
pub use media::{FALLBACK_IMAGE_URL, ImageResolver};
pub use nav::NavEntry;
pub use section::*;
pub use types::*;
