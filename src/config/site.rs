//! `[site]` section configuration.
//!
//! Contains basic site information like name, author, description, etc.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in plumage.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [site]
/// name = "alice"
/// description = "Alice's corner of the web"
/// author = "Alice"
/// url = "https://alice.example.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteMeta {
    /// Site name displayed in the header and browser tab.
    pub name: String,

    /// Author name for the feed and footer credit.
    #[serde(default = "defaults::site::author")]
    #[educe(Default = defaults::site::author())]
    pub author: String,

    /// Author email for the feed.
    #[serde(default = "defaults::site::email")]
    #[educe(Default = defaults::site::email())]
    pub email: String,

    /// Site description for SEO meta tags and the feed channel.
    pub description: String,

    /// Base URL for absolute links in feed/sitemap.
    /// Required when `[feed.rss].enable = true`.
    #[serde(default = "defaults::site::url")]
    #[educe(Default = defaults::site::url())]
    pub url: Option<String>,

    /// BCP 47 language code (e.g., "en", "de-DE").
    #[serde(default = "defaults::site::language")]
    #[educe(Default = defaults::site::language())]
    pub language: String,

    /// Copyright notice for the site footer.
    #[serde(default)]
    pub copyright: String,
}
