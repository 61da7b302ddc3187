//! Plumage - a theme renderer for static blog sites.
//!
//! The crate maps an immutable content model (sections, items, tags, free
//! pages) to HTML document trees, one pure builder per page kind, plus the
//! machine-readable projections a personal site carries: an rss feed and a
//! sitemap.
//!
//! Content discovery, markup conversion, and writing output to disk belong
//! to the surrounding build pipeline. It constructs a [`SiteContext`] once
//! per build, calls [`render_site`] (or the individual [`Theme`]
//! operations), and persists the returned strings together with the theme's
//! stylesheet manifest.
//!
//! ```no_run
//! use plumage::{DefaultTheme, SiteConfig, SiteContext, content::Site, render_site};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = SiteConfig::from_str(r#"
//!     [site]
//!     name = "alice"
//!     description = "Alice's corner of the web"
//!     url = "https://alice.example.com"
//! "#)?;
//!
//! let ctx = SiteContext::new(Site::from_config(&config));
//! let theme = DefaultTheme::from_config(&config);
//!
//! let output = render_site(&ctx, &theme, &config)?;
//! for page in &output.pages {
//!     // the pipeline writes page.html to page.route
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod content;
pub mod generator;
pub mod logger;
pub mod markup;
pub mod render;
pub mod theme;
pub mod utils;

pub use config::SiteConfig;
pub use content::{SectionId, Site, SiteContext};
pub use render::{RenderedPage, SiteOutput, render_site};
pub use theme::{DefaultTheme, Theme};
