//! Site configuration management for `plumage.toml`.
//!
//! # Sections
//!
//! | Section   | Purpose                                          |
//! |-----------|--------------------------------------------------|
//! | `[site]`  | Site metadata (name, author, url, language)      |
//! | `[theme]` | Avatar, stylesheets, social links, footer links  |
//! | `[feed]`  | RSS feed and sitemap projections                 |
//! | `[extra]` | User-defined custom fields                       |
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "alice"
//! description = "Alice's corner of the web"
//! url = "https://alice.example.com"
//!
//! [theme]
//! avatar = "images/me.jpg"
//!
//! [feed.rss]
//! enable = true
//! sections = ["posts"]
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```

pub mod defaults;

mod error;
mod feed;
mod site;
mod theme;

// Re-export public types used by other modules
pub use error::ConfigError;
pub use feed::{FeedConfig, RssConfig, SitemapConfig};
pub use site::SiteMeta;
pub use theme::{FooterConfig, FooterLink, NavExtra, SocialLink, ThemeConfig};

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing plumage.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Basic site information
    #[serde(default)]
    pub site: SiteMeta,

    /// Theme settings
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Feed and sitemap settings
    #[serde(default)]
    pub feed: FeedConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Validate configuration before a render pass
    pub fn validate(&self) -> Result<()> {
        if self.site.name.is_empty() {
            bail!("[site.name] must not be empty");
        }

        if self.feed.rss.enable && self.site.url.is_none() {
            bail!("[site.url] is required for feed generation");
        }

        if let Some(base_url) = &self.site.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[site.url] must start with http:// or https://".into()
            ));
        }

        if self.feed.rss.enable && self.feed.rss.sections.is_empty() {
            bail!(ConfigError::Validation(
                "[feed.rss.sections] must name at least one section".into()
            ));
        }

        if let Some(nav_extra) = &self.theme.nav_extra
            && !nav_extra.url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[theme.nav_extra.url] must be an absolute URL".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
