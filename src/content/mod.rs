//! The immutable content model.
//!
//! Every entity here is constructed once per build by the content pipeline,
//! before rendering begins, and is read-only for the renderer's lifetime.
//! The renderer never creates, mutates, or destroys content; it only
//! projects it into markup.
//!
//! | Entity        | Role                                             |
//! |---------------|--------------------------------------------------|
//! | [`Site`]      | Site-wide metadata (name, url, language)         |
//! | [`SectionId`] | Closed enumeration of the site's sections        |
//! | [`Section`]   | One section with its ordered items               |
//! | [`Item`]      | A dated entry belonging to exactly one section   |
//! | [`Page`]      | Free-standing content not tied to a section      |
//! | [`Tag`]       | Normalized label, many-to-many with items        |
//! | [`Index`]     | Landing-page body content                        |
//! | [`SiteContext`] | The whole model handed to every page builder   |

mod reading;

pub use reading::ReadingTime;

use crate::config::SiteConfig;
use crate::utils::{date::Date, slug::slugify};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ============================================================================
// Sections
// ============================================================================

/// The site's section identifiers.
///
/// A fixed, closed enumeration known at build time; declaration order is the
/// navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Posts,
    Apps,
    About,
}

impl SectionId {
    /// All sections in declaration order.
    pub const ALL: [Self; 3] = [Self::Posts, Self::Apps, Self::About];

    /// URL path component for the section.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Apps => "apps",
            Self::About => "about",
        }
    }

    /// Human-readable navigation title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Posts => "Posts",
            Self::Apps => "Apps",
            Self::About => "About",
        }
    }
}

/// One section of the site: identifier, title, relative path, and the
/// ordered collection of items belonging to it.
#[derive(Debug, Clone)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub path: String,
    pub items: Vec<Item>,
}

impl Section {
    pub fn new(id: SectionId) -> Self {
        Self {
            id,
            title: id.title().to_owned(),
            path: id.path().to_owned(),
            items: Vec::new(),
        }
    }

    /// URL route of the section's own page.
    pub fn route(&self) -> String {
        format!("/{}/", self.path)
    }
}

// ============================================================================
// Items, pages, tags
// ============================================================================

/// A single dated entry (e.g. a post), belonging to exactly one section.
///
/// `body` is a pre-rendered markup fragment; the pipeline has already parsed
/// and converted the source document.
#[derive(Debug, Clone)]
pub struct Item {
    pub title: String,
    pub date: Date,
    pub body: String,
    pub section: SectionId,
    pub slug: String,
    /// Short summary used by head metadata and the feed. Empty when absent.
    pub description: String,
    pub tags: Vec<Tag>,
    pub reading_time: ReadingTime,
}

impl Item {
    pub fn route(&self) -> String {
        format!("/{}/{}/", self.section.path(), self.slug)
    }
}

/// Free-standing content not tied to a section.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub path: String,
    pub body: String,
}

impl Page {
    pub fn route(&self) -> String {
        format!("/{}/", self.path)
    }
}

/// A normalized label grouping items across sections.
///
/// Ordering is plain lexicographic on the label text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into().trim().to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL slug for the tag's details route.
    pub fn slug(&self) -> String {
        slugify(&self.0)
    }

    /// Route of the tag's details page.
    pub fn route(&self) -> String {
        format!("/tags/{}/", urlencoding::encode(&self.slug()))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The site's root landing content.
#[derive(Debug, Clone, Default)]
pub struct Index {
    pub body: String,
}

// ============================================================================
// Site metadata
// ============================================================================

/// Site-wide metadata projected out of the configuration.
#[derive(Debug, Clone)]
pub struct Site {
    pub name: String,
    /// Base URL for absolute links in feed and sitemap. Empty when unset.
    pub url: String,
    pub description: String,
    /// BCP 47 language tag for the document `lang` attribute.
    pub language: String,
}

impl Site {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            name: config.site.name.clone(),
            url: config
                .site
                .url
                .as_deref()
                .unwrap_or_default()
                .trim_end_matches('/')
                .to_owned(),
            description: config.site.description.clone(),
            language: config.site.language.clone(),
        }
    }
}

// ============================================================================
// Site context
// ============================================================================

/// The complete, read-only content model handed to every page builder.
///
/// Tag projections (`tag_counts`, `items_tagged`) are derived on demand and
/// never stored; the model itself stays flat.
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub site: Site,
    /// Sections in declared enumeration order.
    pub sections: Vec<Section>,
    pub pages: Vec<Page>,
    pub index: Index,
}

impl SiteContext {
    /// Empty context with one section per enumeration value.
    pub fn new(site: Site) -> Self {
        Self {
            site,
            sections: SectionId::ALL.map(Section::new).to_vec(),
            pages: Vec::new(),
            index: Index::default(),
        }
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// All items across all sections, in section order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }

    /// Every tag in use, alphabetically, paired with the count of items
    /// carrying it.
    pub fn tag_counts(&self) -> Vec<(&Tag, usize)> {
        let mut counts: BTreeMap<&Tag, usize> = BTreeMap::new();
        for item in self.items() {
            for tag in &item.tags {
                *counts.entry(tag).or_default() += 1;
            }
        }
        counts.into_iter().collect()
    }

    /// Every distinct tag in use, alphabetically.
    pub fn tags(&self) -> Vec<&Tag> {
        let tags: BTreeSet<&Tag> = self.items().flat_map(|i| i.tags.iter()).collect();
        tags.into_iter().collect()
    }

    /// Items carrying `tag`, sorted by date descending (stable on ties).
    pub fn items_tagged(&self, tag: &Tag) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items().filter(|i| i.tags.contains(tag)).collect();
        items.sort_by(|a, b| b.date.cmp(&a.date));
        items
    }

    /// Reject a malformed model before rendering starts.
    ///
    /// The pipeline is expected to hand over validated content; this is a
    /// defensive check so a bad model fails loudly instead of producing
    /// broken markup.
    pub fn validate(&self) -> Result<()> {
        for section in &self.sections {
            if section.path.is_empty() {
                bail!("section `{}` has an empty path", section.title);
            }
            let mut seen = BTreeSet::new();
            for item in &section.items {
                if item.section != section.id {
                    bail!(
                        "item `{}` is filed under `{}` but claims section `{}`",
                        item.title,
                        section.path,
                        item.section.path()
                    );
                }
                if item.slug.is_empty() {
                    bail!("item `{}` has an empty slug", item.title);
                }
                if !seen.insert(item.slug.as_str()) {
                    bail!(
                        "duplicate slug `{}` in section `{}`",
                        item.slug,
                        section.path
                    );
                }
                item.date.validate()?;
            }
        }
        for page in &self.pages {
            if page.path.is_empty() {
                bail!("page `{}` has an empty path", page.title);
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
