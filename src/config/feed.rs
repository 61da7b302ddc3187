//! `[feed]` section configuration.
//!
//! Controls the machine-readable projections: RSS feed and sitemap.

use super::defaults;
use crate::content::SectionId;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[feed]` section in plumage.toml.
///
/// # Example
/// ```toml
/// [feed.rss]
/// enable = true
/// sections = ["posts"]
///
/// [feed.sitemap]
/// enable = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeedConfig {
    #[serde(default)]
    pub rss: RssConfig,

    #[serde(default)]
    pub sitemap: SitemapConfig,
}

/// `[feed.rss]` sub-section.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RssConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Feed location, relative to the site root.
    #[serde(default = "defaults::feed::rss::path")]
    #[educe(Default = defaults::feed::rss::path())]
    pub path: String,

    /// Sections whose items are included in the feed.
    #[serde(default = "defaults::feed::sections")]
    #[educe(Default = defaults::feed::sections())]
    pub sections: Vec<SectionId>,
}

/// `[feed.sitemap]` sub-section.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Sitemap location, relative to the site root.
    #[serde(default = "defaults::feed::sitemap::path")]
    #[educe(Default = defaults::feed::sitemap::path())]
    pub path: String,
}
