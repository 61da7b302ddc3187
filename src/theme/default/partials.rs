//! Shared sub-builders reused across page kinds.

use crate::config::{FooterConfig, NavExtra};
use crate::content::{Item, SectionId, SiteContext};
use crate::markup::{Element, Node, a, div, footer, header, li, main_content, nav, span, ul};

/// Glyph placed between inline tag-list entries, never after the last.
const DIVIDER: &str = "·";

/// `div.container` wrapper used inside header, main, and footer.
pub fn container(children: impl IntoIterator<Item = Node>) -> Element {
    div().class("container").children(children)
}

/// Pre-rendered body fragment in its generic container.
pub fn content_body(markup: &str) -> Element {
    div().class("content").raw(markup)
}

/// Standard page scaffold: header, main column, footer.
pub fn layout(
    ctx: &SiteContext,
    selected: Option<SectionId>,
    nav_extra: Option<&NavExtra>,
    footer_cfg: &FooterConfig,
    feed_path: Option<&str>,
    centered: bool,
    content: Vec<Node>,
) -> Element {
    div()
        .class("wrapper")
        .child(site_header(ctx, selected, nav_extra))
        .child(main_column(centered, content))
        .child(site_footer(ctx, footer_cfg, feed_path))
}

fn main_column(centered: bool, content: Vec<Node>) -> Element {
    main_content()
        .class(if centered { "grow centered" } else { "grow" })
        .child(container(content))
}

/// Site header: name linked to the root, plus navigation when the site has
/// more than one section.
///
/// `selected` marks the active section entry. The optional extra link is
/// injected immediately after its configured section's entry.
pub fn site_header(
    ctx: &SiteContext,
    selected: Option<SectionId>,
    nav_extra: Option<&NavExtra>,
) -> Element {
    let mut navigation = nav()
        .class("navigation")
        .child(a().attr("href", "/").text(ctx.site.name.clone()));

    if ctx.sections.len() > 1 {
        let mut entries = ul();
        for section in &ctx.sections {
            let mut entry = a()
                .attr("href", section.route())
                .text(section.title.clone());
            if selected == Some(section.id) {
                entry = entry.class("selected");
            }
            entries = entries.child(li().child(entry));

            if let Some(extra) = nav_extra
                && extra.after == section.id
            {
                entries = entries.child(
                    li().child(
                        a().attr("href", extra.url.clone())
                            .attr("target", "_blank")
                            .text(extra.label.clone()),
                    ),
                );
            }
        }
        navigation = navigation.child(entries);
    }

    header().child(container([navigation.into()]))
}

/// Site footer: credit line, attribution link, and the richer variant's
/// inspiration and feed links.
pub fn site_footer(ctx: &SiteContext, footer_cfg: &FooterConfig, feed_path: Option<&str>) -> Element {
    let mut credits = div()
        .class("credits")
        .text(format!("{} · made with ❤️ and ", ctx.site.name))
        .child(
            a().attr("href", footer_cfg.attribution.url.clone())
                .attr("target", "_blank")
                .text(footer_cfg.attribution.label.clone()),
        );

    if let Some(inspiration) = &footer_cfg.inspiration {
        credits = credits.text(" · inspired by ").child(
            a().attr("href", inspiration.url.clone())
                .attr("target", "_blank")
                .text(inspiration.label.clone()),
        );
    }

    if footer_cfg.feed_link
        && let Some(path) = feed_path
    {
        credits = credits
            .text(" · ")
            .child(a().attr("href", format!("/{path}")).text("RSS"));
    }

    footer().child(container([credits.into()]))
}

/// Item list in the order given by the caller.
///
/// Sorting is the caller's responsibility; an empty list yields an empty
/// wrapper, not an error.
pub fn item_list(items: &[&Item]) -> Element {
    let mut list = ul().class("item-list");
    for item in items {
        list = list.child(
            li().child(span().class("date").text(item.date.long_form()))
                .child(a().attr("href", item.route()).text(item.title.clone())),
        );
    }
    list
}

/// Item metadata row: date and reading time always, tags only when present.
pub fn item_metadata(item: &Item) -> Element {
    let mut metadata = div()
        .class("item-metadata")
        .child(
            span()
                .class("date")
                .child(span().class("far fa-calendar"))
                .text(format!(" {}", item.date.long_form())),
        )
        .child(
            span()
                .class("reading-time")
                .child(span().class("far fa-clock"))
                .text(format!(
                    " {}-minute read",
                    item.reading_time.whole_minutes()
                )),
        );

    if !item.tags.is_empty() {
        let mut tag_row = span().class("tags");
        for (position, tag) in item.tags.iter().enumerate() {
            if position > 0 {
                tag_row = tag_row.child(span().class("divider").text(DIVIDER));
            }
            tag_row = tag_row.child(a().attr("href", tag.route()).text(tag.as_str()));
        }
        metadata = metadata.child(tag_row);
    }

    metadata
}

/// Alphabetical tag list with per-tag item counts, divider between entries.
pub fn tag_list(tag_counts: &[(&crate::content::Tag, usize)]) -> Element {
    let mut list = ul().class("all-tags");
    let last = tag_counts.len().saturating_sub(1);
    for (position, (tag, count)) in tag_counts.iter().enumerate() {
        let mut entry = li()
            .child(a().attr("href", tag.route()).text(tag.as_str()))
            .child(span().class("tag-count").text(format!(" ({count})")));
        if position < last {
            entry = entry.child(span().class("divider").text(DIVIDER));
        }
        list = list.child(entry);
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FooterLink, SiteConfig};
    use crate::content::{ReadingTime, Section, Site, SiteContext, Tag};
    use crate::utils::date::Date;

    fn make_context() -> SiteContext {
        SiteContext::new(Site {
            name: "alice".into(),
            url: "https://example.com".into(),
            description: "a site".into(),
            language: "en".into(),
        })
    }

    fn make_item(title: &str, date: Date, tags: &[&str]) -> Item {
        Item {
            title: title.to_owned(),
            date,
            body: String::new(),
            section: SectionId::Posts,
            slug: crate::utils::slug::slugify(title),
            description: String::new(),
            tags: tags.iter().map(Tag::new).collect(),
            reading_time: ReadingTime::from_minutes(4.7),
        }
    }

    // ------------------------------------------------------------------------
    // item_list
    // ------------------------------------------------------------------------

    #[test]
    fn test_item_list_empty_renders_empty_wrapper() {
        let html = item_list(&[]).to_fragment().unwrap();
        assert_eq!(html, "<ul class=\"item-list\"></ul>");
    }

    #[test]
    fn test_item_list_preserves_caller_order() {
        let first = make_item("first", Date::from_ymd(2021, 1, 1), &[]);
        let second = make_item("second", Date::from_ymd(2021, 12, 31), &[]);
        // Deliberately not date-sorted: the helper must not reorder
        let html = item_list(&[&first, &second]).to_fragment().unwrap();

        let pos_first = html.find("first").unwrap();
        let pos_second = html.find("second").unwrap();
        assert!(pos_first < pos_second);
    }

    #[test]
    fn test_item_list_entry_shape() {
        let item = make_item("Hello World", Date::from_ymd(2021, 4, 3), &[]);
        let html = item_list(&[&item]).to_fragment().unwrap();

        assert!(html.contains("<span class=\"date\">April 3, 2021</span>"));
        assert!(html.contains("<a href=\"/posts/hello-world/\">Hello World</a>"));
    }

    // ------------------------------------------------------------------------
    // item_metadata
    // ------------------------------------------------------------------------

    #[test]
    fn test_item_metadata_reading_time_floors() {
        let item = make_item("post", Date::from_ymd(2021, 4, 3), &[]);
        let html = item_metadata(&item).to_fragment().unwrap();
        assert!(html.contains("4-minute read"));
        assert!(!html.contains("5-minute"));
    }

    #[test]
    fn test_item_metadata_date_long_form() {
        let item = make_item("post", Date::from_ymd(2021, 4, 3), &[]);
        let html = item_metadata(&item).to_fragment().unwrap();
        assert!(html.contains("April 3, 2021"));
    }

    #[test]
    fn test_item_metadata_without_tags_omits_tag_row() {
        let item = make_item("post", Date::from_ymd(2021, 4, 3), &[]);
        let html = item_metadata(&item).to_fragment().unwrap();
        assert!(!html.contains("class=\"tags\""));
        assert!(!html.contains("divider"));
    }

    #[test]
    fn test_item_metadata_two_tags_single_divider() {
        let item = make_item("post", Date::from_ymd(2021, 4, 3), &["a", "b"]);
        let html = item_metadata(&item).to_fragment().unwrap();

        assert!(html.contains(">a</a>"));
        assert!(html.contains(">b</a>"));
        assert_eq!(html.matches("class=\"divider\"").count(), 1);
        // Divider sits between the links, not after the last one
        let divider_pos = html.find("divider").unwrap();
        let last_tag_pos = html.rfind(">b</a>").unwrap();
        assert!(divider_pos < last_tag_pos);
    }

    #[test]
    fn test_item_metadata_tags_link_to_details() {
        let item = make_item("post", Date::from_ymd(2021, 4, 3), &["server side"]);
        let html = item_metadata(&item).to_fragment().unwrap();
        assert!(html.contains("href=\"/tags/server-side/\""));
    }

    // ------------------------------------------------------------------------
    // site_header
    // ------------------------------------------------------------------------

    #[test]
    fn test_header_single_section_has_no_nav_list() {
        let mut ctx = make_context();
        ctx.sections = vec![Section::new(SectionId::Posts)];
        let html = site_header(&ctx, None, None).to_fragment().unwrap();

        assert!(html.contains("<a href=\"/\">alice</a>"));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn test_header_multiple_sections_in_declared_order() {
        let ctx = make_context();
        let html = site_header(&ctx, None, None).to_fragment().unwrap();

        let posts = html.find("/posts/").unwrap();
        let apps = html.find("/apps/").unwrap();
        let about = html.find("/about/").unwrap();
        assert!(posts < apps && apps < about);
        assert_eq!(html.matches("<li>").count(), 3);
    }

    #[test]
    fn test_header_marks_selected_section() {
        let ctx = make_context();
        let html = site_header(&ctx, Some(SectionId::Apps), None)
            .to_fragment()
            .unwrap();

        assert!(html.contains("<a href=\"/apps/\" class=\"selected\">Apps</a>"));
        assert_eq!(html.matches("selected").count(), 1);
    }

    #[test]
    fn test_header_no_selection_marks_nothing() {
        let ctx = make_context();
        let html = site_header(&ctx, None, None).to_fragment().unwrap();
        assert!(!html.contains("selected"));
    }

    #[test]
    fn test_header_nav_extra_after_posts() {
        let ctx = make_context();
        let extra = NavExtra {
            after: SectionId::Posts,
            label: "Feed".into(),
            url: "https://example.com/feed.xml".into(),
        };
        let html = site_header(&ctx, None, Some(&extra)).to_fragment().unwrap();

        let posts = html.find("/posts/").unwrap();
        let feed = html.find("Feed").unwrap();
        let apps = html.find("/apps/").unwrap();
        assert!(posts < feed && feed < apps);
        assert_eq!(html.matches("<li>").count(), 4);
    }

    // ------------------------------------------------------------------------
    // site_footer
    // ------------------------------------------------------------------------

    #[test]
    fn test_footer_credit_and_attribution() {
        let ctx = make_context();
        let footer_cfg = SiteConfig::default().theme.footer;
        let html = site_footer(&ctx, &footer_cfg, None).to_fragment().unwrap();

        assert!(html.contains("alice · made with ❤️ and "));
        assert!(html.contains(">Plumage</a>"));
    }

    #[test]
    fn test_footer_inspiration_and_feed_links() {
        let ctx = make_context();
        let mut footer_cfg = SiteConfig::default().theme.footer;
        footer_cfg.inspiration = Some(FooterLink {
            label: "that design".into(),
            url: "https://example.org".into(),
        });
        let html = site_footer(&ctx, &footer_cfg, Some("feed.xml"))
            .to_fragment()
            .unwrap();

        assert!(html.contains("inspired by"));
        assert!(html.contains(">that design</a>"));
        assert!(html.contains("<a href=\"/feed.xml\">RSS</a>"));
    }

    #[test]
    fn test_footer_feed_link_disabled() {
        let ctx = make_context();
        let mut footer_cfg = SiteConfig::default().theme.footer;
        footer_cfg.feed_link = false;
        let html = site_footer(&ctx, &footer_cfg, Some("feed.xml"))
            .to_fragment()
            .unwrap();

        assert!(!html.contains(">RSS</a>"));
    }

    // ------------------------------------------------------------------------
    // tag_list
    // ------------------------------------------------------------------------

    #[test]
    fn test_tag_list_alphabetical_with_counts_and_dividers() {
        let golf = Tag::new("golf");
        let swift = Tag::new("swift");
        // Alphabetical input, as produced by SiteContext::tag_counts
        let counts = vec![(&golf, 1usize), (&swift, 3usize)];
        let html = tag_list(&counts).to_fragment().unwrap();

        let golf_pos = html.find("golf").unwrap();
        let swift_pos = html.find("swift").unwrap();
        assert!(golf_pos < swift_pos);
        assert!(html.contains("(1)"));
        assert!(html.contains("(3)"));
        // One divider between two entries, none trailing
        assert_eq!(html.matches("class=\"divider\"").count(), 1);
        let divider_pos = html.find("divider").unwrap();
        assert!(divider_pos < swift_pos);
    }

    #[test]
    fn test_tag_list_single_entry_no_divider() {
        let only = Tag::new("only");
        let counts = vec![(&only, 2usize)];
        let html = tag_list(&counts).to_fragment().unwrap();
        assert!(!html.contains("divider"));
    }

    #[test]
    fn test_tag_list_empty() {
        let html = tag_list(&[]).to_fragment().unwrap();
        assert_eq!(html, "<ul class=\"all-tags\"></ul>");
    }

    // ------------------------------------------------------------------------
    // layout
    // ------------------------------------------------------------------------

    #[test]
    fn test_layout_scaffold_order() {
        let ctx = make_context();
        let footer_cfg = SiteConfig::default().theme.footer;
        let html = layout(&ctx, None, None, &footer_cfg, None, false, vec![])
            .to_fragment()
            .unwrap();

        let header_pos = html.find("<header>").unwrap();
        let main_pos = html.find("<main").unwrap();
        let footer_pos = html.find("<footer>").unwrap();
        assert!(header_pos < main_pos && main_pos < footer_pos);
        assert!(html.contains("class=\"grow\""));
    }

    #[test]
    fn test_layout_centered() {
        let ctx = make_context();
        let footer_cfg = SiteConfig::default().theme.footer;
        let html = layout(&ctx, None, None, &footer_cfg, None, true, vec![])
            .to_fragment()
            .unwrap();
        assert!(html.contains("class=\"grow centered\""));
    }

    #[test]
    fn test_layout_forwards_selection_to_header() {
        let ctx = make_context();
        let footer_cfg = SiteConfig::default().theme.footer;
        let html = layout(
            &ctx,
            Some(SectionId::Posts),
            None,
            &footer_cfg,
            None,
            false,
            vec![],
        )
        .to_fragment()
        .unwrap();
        assert!(html.contains("class=\"selected\""));
    }
}
