//! Document head construction.

use crate::content::SiteContext;
use crate::markup::{Element, head, link, meta, title};

/// Build the `<head>` for one page.
///
/// An empty `page_title` yields the bare site name; anything else renders
/// as "Page | Site". Stylesheet links come from the theme's resource
/// manifest; the feed link is added only when the feed is enabled.
pub fn document_head(
    page_title: &str,
    description: &str,
    ctx: &SiteContext,
    styles: &[String],
    feed_path: Option<&str>,
) -> Element {
    let title_text = if page_title.is_empty() {
        ctx.site.name.clone()
    } else {
        format!("{} | {}", page_title, ctx.site.name)
    };

    let mut head_el = head()
        .child(meta().attr("charset", "utf-8"))
        .child(
            meta()
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(title().text(title_text));

    if !description.is_empty() {
        head_el = head_el.child(
            meta()
                .attr("name", "description")
                .attr("content", description),
        );
    }

    for style in styles {
        head_el = head_el.child(
            link()
                .attr("rel", "stylesheet")
                .attr("href", format!("/{style}")),
        );
    }

    if let Some(path) = feed_path {
        head_el = head_el.child(
            link()
                .attr("rel", "alternate")
                .attr("type", "application/rss+xml")
                .attr("title", ctx.site.name.clone())
                .attr("href", format!("/{path}")),
        );
    }

    head_el
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Site, SiteContext};

    fn make_context() -> SiteContext {
        SiteContext::new(Site {
            name: "alice".into(),
            url: "https://example.com".into(),
            description: "a site".into(),
            language: "en".into(),
        })
    }

    #[test]
    fn test_head_title_with_page() {
        let ctx = make_context();
        let html = document_head("Hello", "", &ctx, &[], None)
            .to_fragment()
            .unwrap();
        assert!(html.contains("<title>Hello | alice</title>"));
    }

    #[test]
    fn test_head_title_bare_site_name() {
        let ctx = make_context();
        let html = document_head("", "", &ctx, &[], None).to_fragment().unwrap();
        assert!(html.contains("<title>alice</title>"));
    }

    #[test]
    fn test_head_stylesheets() {
        let ctx = make_context();
        let styles = vec!["css/styles.css".to_string(), "css/dark.css".to_string()];
        let html = document_head("", "", &ctx, &styles, None)
            .to_fragment()
            .unwrap();
        assert!(html.contains("href=\"/css/styles.css\""));
        assert!(html.contains("href=\"/css/dark.css\""));
        assert_eq!(html.matches("rel=\"stylesheet\"").count(), 2);
    }

    #[test]
    fn test_head_description_meta() {
        let ctx = make_context();
        let html = document_head("", "what this page is about", &ctx, &[], None)
            .to_fragment()
            .unwrap();
        assert!(html.contains("name=\"description\""));
        assert!(html.contains("content=\"what this page is about\""));
    }

    #[test]
    fn test_head_omits_empty_description() {
        let ctx = make_context();
        let html = document_head("", "", &ctx, &[], None).to_fragment().unwrap();
        assert!(!html.contains("name=\"description\""));
    }

    #[test]
    fn test_head_feed_link() {
        let ctx = make_context();
        let html = document_head("", "", &ctx, &[], Some("feed.xml"))
            .to_fragment()
            .unwrap();
        assert!(html.contains("rel=\"alternate\""));
        assert!(html.contains("type=\"application/rss+xml\""));
        assert!(html.contains("href=\"/feed.xml\""));
    }

    #[test]
    fn test_head_no_feed_link_when_disabled() {
        let ctx = make_context();
        let html = document_head("", "", &ctx, &[], None).to_fragment().unwrap();
        assert!(!html.contains("application/rss+xml"));
    }
}
