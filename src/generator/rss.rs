//! rss feed generation.
//!
//! Projects the items of the configured sections into an rss channel.

use crate::{
    config::SiteConfig,
    content::{Item, SiteContext},
};
use anyhow::{Result, anyhow};
use regex::Regex;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::sync::LazyLock;

// ============================================================================
// Public API
// ============================================================================

/// Build the rss feed if enabled in config.
///
/// Returns `None` when the feed is disabled; the pipeline writes the
/// returned XML to `[feed.rss].path`.
pub fn build_feed(ctx: &SiteContext, config: &SiteConfig) -> Result<Option<String>> {
    if !config.feed.rss.enable {
        return Ok(None);
    }

    let mut items: Vec<&Item> = ctx
        .sections
        .iter()
        .filter(|section| config.feed.rss.sections.contains(&section.id))
        .flat_map(|section| section.items.iter())
        .collect();
    items.sort_by(|a, b| b.date.cmp(&a.date));

    let entries: Vec<_> = items
        .iter()
        .map(|item| item_to_entry(item, ctx, config))
        .collect();

    let channel = ChannelBuilder::default()
        .title(&config.site.name)
        .link(format!("{}/", ctx.site.url))
        .description(&config.site.description)
        .language(config.site.language.clone())
        .generator("plumage".to_string())
        .items(entries)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("feed validation failed: {e}"))?;
    Ok(Some(channel.to_string()))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert an [`Item`] to an rss entry.
fn item_to_entry(item: &Item, ctx: &SiteContext, config: &SiteConfig) -> rss::Item {
    let link = format!("{}{}", ctx.site.url, item.route());
    let description = (!item.description.is_empty()).then(|| item.description.clone());

    ItemBuilder::default()
        .title(item.title.clone())
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(description)
        .pub_date(item.date.to_rfc2822())
        .author(feed_author(config))
        .build()
}

/// Normalize the site author to rss format: "email@example.com (Name)"
///
/// Uses `[site.author]` verbatim when it is already in valid format,
/// otherwise combines `[site.email]` and `[site.author]`.
fn feed_author(config: &SiteConfig) -> Option<String> {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$").unwrap()
    });

    let author = &config.site.author;
    if author.is_empty() {
        return None;
    }

    if RE_VALID_AUTHOR.is_match(author) {
        return Some(author.clone());
    }

    Some(format!("{} ({})", config.site.email, author))
}
