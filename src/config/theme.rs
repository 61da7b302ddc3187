//! `[theme]` section configuration.
//!
//! Everything the default theme needs beyond the content model: the avatar
//! image, the stylesheet manifest, social profile links, footer links, and
//! the optional extra navigation entry.

use super::defaults;
use crate::content::SectionId;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[theme]` section in plumage.toml.
///
/// # Example
/// ```toml
/// [theme]
/// avatar = "images/me.jpg"
/// styles = ["css/styles.css", "css/highlight.css"]
///
/// [[theme.social]]
/// label = "GitHub"
/// url = "https://github.com/alice"
/// icon = "fab fa-github fa-2x"
///
/// [theme.nav_extra]
/// after = "posts"
/// label = "Feed"
/// url = "https://alice.example.com/feed.xml"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Avatar image path shown in the index "about" block.
    #[serde(default = "defaults::theme::avatar")]
    #[educe(Default = defaults::theme::avatar())]
    pub avatar: String,

    /// Stylesheet manifest: files the pipeline must copy alongside the
    /// generated pages. The theme links each one from the document head.
    #[serde(default = "defaults::theme::styles")]
    #[educe(Default = defaults::theme::styles())]
    pub styles: Vec<String>,

    /// Icon-font loader script appended to index and item pages.
    #[serde(default = "defaults::theme::icon_script")]
    #[educe(Default = defaults::theme::icon_script())]
    pub icon_script: String,

    /// Social profile links, rendered unconditionally on the index page.
    #[serde(default = "defaults::theme::social")]
    #[educe(Default = defaults::theme::social())]
    pub social: Vec<SocialLink>,

    /// Extra navigation link injected after a specific section's entry.
    #[serde(default)]
    pub nav_extra: Option<NavExtra>,

    /// Footer links.
    #[serde(default)]
    pub footer: FooterConfig,
}

/// One external profile link in the index social block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    /// Icon-font class list, e.g. "fab fa-github fa-2x".
    pub icon: String,
}

/// Extra navigation link injected immediately after one section's entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavExtra {
    /// Section entry the link follows.
    pub after: SectionId,
    pub label: String,
    pub url: String,
}

/// `[theme.footer]` sub-section.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct FooterConfig {
    /// Link to the software that built the site.
    #[serde(default = "defaults::theme::attribution")]
    #[educe(Default = defaults::theme::attribution())]
    pub attribution: FooterLink,

    /// Optional link to the design the theme was inspired by.
    #[serde(default)]
    pub inspiration: Option<FooterLink>,

    /// Whether the footer links the RSS feed.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub feed_link: bool,
}

/// A labelled link in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterLink {
    pub label: String,
    pub url: String,
}
