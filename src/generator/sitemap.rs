//! Sitemap generation.
//!
//! Generates a sitemap.xml document listing all pages for search engine
//! indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{config::SiteConfig, content::SiteContext};

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// ============================================================================
// Public API
// ============================================================================

/// Build the sitemap if enabled in config.
///
/// Returns `None` when disabled; the pipeline writes the returned XML to
/// `[feed.sitemap].path`.
pub fn build_sitemap(ctx: &SiteContext, config: &SiteConfig) -> Option<String> {
    if !config.feed.sitemap.enable {
        return None;
    }
    Some(Sitemap::from_context(ctx).into_xml())
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

/// Sitemap data structure
struct Sitemap {
    /// List of URL entries
    urls: Vec<UrlEntry>,
}

/// Single URL entry in the sitemap
struct UrlEntry {
    /// Full URL location
    loc: String,
    /// Last modification date (optional, YYYY-MM-DD format)
    lastmod: Option<String>,
}

impl Sitemap {
    /// Enumerate every output page of the site.
    ///
    /// Items carry their publication date as `lastmod`; derived pages
    /// (index, sections, tag pages) carry none.
    fn from_context(ctx: &SiteContext) -> Self {
        let base = &ctx.site.url;
        let mut urls = vec![UrlEntry {
            loc: format!("{base}/"),
            lastmod: None,
        }];

        for section in &ctx.sections {
            urls.push(UrlEntry {
                loc: format!("{base}{}", section.route()),
                lastmod: None,
            });
            for item in &section.items {
                urls.push(UrlEntry {
                    loc: format!("{base}{}", item.route()),
                    lastmod: Some(item.date.ymd()),
                });
            }
        }

        for page in &ctx.pages {
            urls.push(UrlEntry {
                loc: format!("{base}{}", page.route()),
                lastmod: None,
            });
        }

        let tags = ctx.tags();
        if !tags.is_empty() {
            urls.push(UrlEntry {
                loc: format!("{base}/tags/"),
                lastmod: None,
            });
            for tag in tags {
                urls.push(UrlEntry {
                    loc: format!("{base}{}", tag.route()),
                    lastmod: None,
                });
            }
        }

        Self { urls }
    }

    /// Generate sitemap XML string.
    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            if let Some(lastmod) = entry.lastmod {
                xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

// ============================================================================
// Tests
// ============================================================================
