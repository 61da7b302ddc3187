//! HTML document trees.
//!
//! Page builders produce a [`Document`] — an element tree assembled through
//! a small builder API and serialized to an HTML string afterwards. Building
//! the tree is infallible; serialization is the only fallible step.
//!
//! ```
//! use plumage::markup::{div, span};
//!
//! let node = div().class("wrapper").child(span().text("hi"));
//! assert_eq!(node.tag(), "div");
//! ```

mod write;

use compact_str::CompactString;
use smallvec::SmallVec;

// ============================================================================
// Nodes
// ============================================================================

/// One node in a document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Escaped on serialization.
    Text(String),
    /// Written verbatim; carries pre-rendered body fragments (trusted input).
    Raw(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An element with attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: CompactString,
    attrs: SmallVec<[(CompactString, String); 4]>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: CompactString::new(tag),
            attrs: SmallVec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((CompactString::new(name), value.into()));
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn raw(mut self, markup: impl Into<String>) -> Self {
        self.children.push(Node::Raw(markup.into()));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }
}

// ============================================================================
// Documents
// ============================================================================

/// A complete HTML document: language tag plus head and body trees.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub lang: String,
    pub head: Element,
    pub body: Element,
}

impl Document {
    pub fn new(lang: impl Into<String>, head: Element, body: Element) -> Self {
        Self {
            lang: lang.into(),
            head,
            body,
        }
    }
}

// ============================================================================
// Tag constructors
// ============================================================================

macro_rules! tags {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("`<", stringify!($name), ">` element.")]
            pub fn $name() -> Element {
                Element::new(stringify!($name))
            }
        )*
    };
}

tags!(
    a, article, body, div, footer, h1, h2, head, header, img, li, link, meta, nav, p, script,
    span, title, ul,
);

/// `<main>` element.
pub fn main_content() -> Element {
    Element::new("main")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_tag_and_attrs() {
        let el = div().class("wrapper").attr("id", "top");
        assert_eq!(el.tag(), "div");
        let attrs: Vec<_> = el.attrs().collect();
        assert_eq!(attrs, vec![("class", "wrapper"), ("id", "top")]);
    }

    #[test]
    fn test_builder_children_order() {
        let el = ul().child(li().text("one")).child(li().text("two"));
        assert_eq!(el.child_nodes().len(), 2);
        match &el.child_nodes()[0] {
            Node::Element(first) => assert_eq!(first.child_nodes(), &[Node::Text("one".into())]),
            other => panic!("expected element, got {other:?}"),
        }
    }

    #[test]
    fn test_children_extends() {
        let nodes = vec![Node::Text("a".into()), Node::Text("b".into())];
        let el = span().children(nodes);
        assert_eq!(el.child_nodes().len(), 2);
    }

    #[test]
    fn test_main_content_tag() {
        assert_eq!(main_content().tag(), "main");
    }
}
