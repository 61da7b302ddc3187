//! The render pass.
//!
//! Enumerates every output page of the site, invokes the theme once per
//! page, and serializes the resulting document trees. Each page render is
//! an independent pure computation over the shared, read-only context, so
//! item pages are rendered in parallel with no coordination.
//!
//! No file I/O happens here: the pipeline receives routes and strings and
//! owns writing them to disk alongside the theme's resource manifest.

use crate::{
    config::SiteConfig,
    content::SiteContext,
    generator::{rss::build_feed, sitemap::build_sitemap},
    log,
    markup::Document,
    theme::Theme,
};
use anyhow::{Context, Result};
use rayon::prelude::*;

// ============================================================================
// Output
// ============================================================================

/// One rendered page: its URL route and serialized HTML.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// URL route, e.g. `/posts/hello-world/`.
    pub route: String,
    pub html: String,
}

/// Everything one render pass produces.
#[derive(Debug, Clone)]
pub struct SiteOutput {
    pub pages: Vec<RenderedPage>,
    /// Feed XML, when `[feed.rss]` is enabled.
    pub feed: Option<String>,
    /// Sitemap XML, when `[feed.sitemap]` is enabled.
    pub sitemap: Option<String>,
}

// ============================================================================
// Public API
// ============================================================================

/// Render the whole site: pages, feed, and sitemap.
///
/// Validates the configuration and the content model first, then builds
/// pages and machine-readable projections in parallel.
pub fn render_site(ctx: &SiteContext, theme: &dyn Theme, config: &SiteConfig) -> Result<SiteOutput> {
    config.validate()?;
    ctx.validate()?;

    let (pages_result, aux_result) = rayon::join(
        || render_pages(ctx, theme),
        || -> Result<_> {
            let feed = build_feed(ctx, config)?;
            let sitemap = build_sitemap(ctx, config);
            Ok((feed, sitemap))
        },
    );

    let pages = pages_result?;
    let (feed, sitemap) = aux_result?;

    log!("render"; "{} pages", pages.len());
    if feed.is_some() {
        log!("feed"; "{}", config.feed.rss.path);
    }
    if sitemap.is_some() {
        log!("sitemap"; "{}", config.feed.sitemap.path);
    }

    Ok(SiteOutput {
        pages,
        feed,
        sitemap,
    })
}

// ============================================================================
// Internal
// ============================================================================

/// Build and serialize every page of the site.
fn render_pages(ctx: &SiteContext, theme: &dyn Theme) -> Result<Vec<RenderedPage>> {
    let mut documents: Vec<(String, Document)> = Vec::new();

    documents.push(("/".to_owned(), theme.index(&ctx.index, ctx)));

    for section in &ctx.sections {
        documents.push((section.route(), theme.section(section, ctx)));
    }

    // Item pages dominate the page count; render them in parallel
    let item_documents: Vec<(String, Document)> = ctx
        .sections
        .par_iter()
        .flat_map(|section| {
            section
                .items
                .par_iter()
                .map(|item| (item.route(), theme.item(item, ctx)))
        })
        .collect();
    documents.extend(item_documents);

    for page in &ctx.pages {
        documents.push((page.route(), theme.page(page, ctx)));
    }

    // Tag page kinds are optional; a theme may omit them entirely
    if let Some(document) = theme.tag_list(ctx) {
        documents.push(("/tags/".to_owned(), document));
    }
    for tag in ctx.tags() {
        if let Some(document) = theme.tag_details(tag, ctx) {
            documents.push((tag.route(), document));
        }
    }

    documents
        .into_par_iter()
        .map(|(route, document)| {
            let html = document
                .to_html()
                .with_context(|| format!("failed to serialize `{route}`"))?;
            Ok(RenderedPage { route, html })
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
