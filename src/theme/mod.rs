//! The site renderer.
//!
//! A [`Theme`] maps the content model to HTML document trees, one operation
//! per page kind. Every operation is a pure function of its inputs: no
//! retained state, no side effects, no ordering dependency between pages.
//! The build pipeline calls one operation per output page and serializes
//! the returned trees itself.

mod default;

pub use default::DefaultTheme;

use crate::content::{Index, Item, Page, Section, SiteContext, Tag};
use crate::markup::Document;

/// One page builder per page kind.
///
/// The two tag operations return `Option` because a theme may omit those
/// page kinds entirely; the pipeline skips absent results.
pub trait Theme: Send + Sync {
    /// Stylesheet files the pipeline must copy alongside generated pages.
    /// A passive manifest; the theme performs no I/O.
    fn resources(&self) -> &[String];

    /// The site's root landing page.
    fn index(&self, index: &Index, ctx: &SiteContext) -> Document;

    /// A section page: the section body plus its item list.
    fn section(&self, section: &Section, ctx: &SiteContext) -> Document;

    /// A single item page.
    fn item(&self, item: &Item, ctx: &SiteContext) -> Document;

    /// A free-standing page.
    fn page(&self, page: &Page, ctx: &SiteContext) -> Document;

    /// The page listing every tag in use.
    fn tag_list(&self, ctx: &SiteContext) -> Option<Document>;

    /// The page listing items carrying one tag.
    fn tag_details(&self, tag: &Tag, ctx: &SiteContext) -> Option<Document>;
}
