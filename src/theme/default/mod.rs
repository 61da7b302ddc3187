//! The default theme: the complete variant of the blog layout.
//!
//! Single-column pages built from the shared partials, with a centered
//! "about" landing page, per-item metadata rows, and tag pages.

mod head;
mod partials;

use super::Theme;
use crate::config::{RssConfig, SiteConfig, ThemeConfig};
use crate::content::{Index, Item, Page, Section, SiteContext, Tag};
use crate::markup::{Document, Node, article, body, div, h1, img, li, script, span, ul};
use head::document_head;
use partials::{content_body, item_list, item_metadata, layout, tag_list};

/// Theme configured from `[theme]` and `[feed.rss]`.
pub struct DefaultTheme {
    theme: ThemeConfig,
    rss: RssConfig,
}

impl DefaultTheme {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            theme: config.theme.clone(),
            rss: config.feed.rss.clone(),
        }
    }

    /// Feed location, when the feed is enabled at all.
    fn feed_path(&self) -> Option<&str> {
        self.rss.enable.then_some(self.rss.path.as_str())
    }

    /// Icon-font loader appended to pages that render icons.
    fn icon_script(&self) -> Node {
        script()
            .attr("src", self.theme.icon_script.clone())
            .attr("crossorigin", "anonymous")
            .into()
    }

    fn page_layout(
        &self,
        ctx: &SiteContext,
        selected: Option<crate::content::SectionId>,
        centered: bool,
        content: Vec<Node>,
    ) -> crate::markup::Element {
        layout(
            ctx,
            selected,
            self.theme.nav_extra.as_ref(),
            &self.theme.footer,
            self.feed_path(),
            centered,
            content,
        )
    }

    /// Fixed external profile links, rendered unconditionally on the index.
    fn social_icons(&self) -> crate::markup::Element {
        let mut list = ul();
        for social in &self.theme.social {
            list = list.child(
                li().child(
                    crate::markup::a()
                        .attr("href", social.url.clone())
                        .attr("target", "_blank")
                        .attr("aria-label", social.label.clone())
                        .child(span().class(social.icon.clone())),
                ),
            );
        }
        div().class("social-icons").child(list)
    }
}

impl Theme for DefaultTheme {
    fn resources(&self) -> &[String] {
        &self.theme.styles
    }

    fn index(&self, index: &Index, ctx: &SiteContext) -> Document {
        let about = div()
            .class("about")
            .child(
                div().class("avatar").child(
                    img()
                        .attr("alt", ctx.site.name.clone())
                        .attr("src", format!("/{}", self.theme.avatar)),
                ),
            )
            .child(content_body(&index.body))
            .child(self.social_icons());

        let page_body = body()
            .child(self.page_layout(ctx, None, true, vec![about.into()]))
            .child(self.icon_script());

        Document::new(
            ctx.site.language.clone(),
            document_head(
                "",
                &ctx.site.description,
                ctx,
                &self.theme.styles,
                self.feed_path(),
            ),
            page_body,
        )
    }

    fn section(&self, section: &Section, ctx: &SiteContext) -> Document {
        let mut items: Vec<&Item> = section.items.iter().collect();
        items.sort_by(|a, b| b.date.cmp(&a.date));

        let content = vec![
            content_body(&section.body).into(),
            item_list(&items).into(),
        ];
        let page_body = body().child(self.page_layout(ctx, Some(section.id), false, content));

        Document::new(
            ctx.site.language.clone(),
            document_head(
                &section.title,
                &ctx.site.description,
                ctx,
                &self.theme.styles,
                self.feed_path(),
            ),
            page_body,
        )
    }

    fn item(&self, item: &Item, ctx: &SiteContext) -> Document {
        let entry = article()
            .child(h1().text(item.title.clone()))
            .child(item_metadata(item))
            .child(content_body(&item.body));

        let page_body = body()
            .child(self.page_layout(ctx, Some(item.section), false, vec![entry.into()]))
            .child(self.icon_script());

        let description = if item.description.is_empty() {
            &ctx.site.description
        } else {
            &item.description
        };

        Document::new(
            ctx.site.language.clone(),
            document_head(
                &item.title,
                description,
                ctx,
                &self.theme.styles,
                self.feed_path(),
            ),
            page_body,
        )
    }

    fn page(&self, page: &Page, ctx: &SiteContext) -> Document {
        let content = vec![content_body(&page.body).into()];
        let page_body = body().child(self.page_layout(ctx, None, false, content));

        Document::new(
            ctx.site.language.clone(),
            document_head(
                &page.title,
                &ctx.site.description,
                ctx,
                &self.theme.styles,
                self.feed_path(),
            ),
            page_body,
        )
    }

    fn tag_list(&self, ctx: &SiteContext) -> Option<Document> {
        let counts = ctx.tag_counts();
        let content = vec![h1().text("Tags").into(), tag_list(&counts).into()];
        let page_body = body().child(self.page_layout(ctx, None, false, content));

        Some(Document::new(
            ctx.site.language.clone(),
            document_head(
                "Tags",
                &ctx.site.description,
                ctx,
                &self.theme.styles,
                self.feed_path(),
            ),
            page_body,
        ))
    }

    fn tag_details(&self, tag: &Tag, ctx: &SiteContext) -> Option<Document> {
        let items = ctx.items_tagged(tag);
        let title = format!("Tagged with {tag}");
        let content = vec![h1().text(title.clone()).into(), item_list(&items).into()];
        let page_body = body().child(self.page_layout(ctx, None, false, content));

        Some(Document::new(
            ctx.site.language.clone(),
            document_head(
                &title,
                &ctx.site.description,
                ctx,
                &self.theme.styles,
                self.feed_path(),
            ),
            page_body,
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================
