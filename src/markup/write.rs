//! Document serialization.
//!
//! Walks the element tree and emits HTML through `quick-xml`'s event
//! writer. Text nodes are escaped by the writer; raw nodes bypass it.

use super::{Document, Element, Node};
use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io::{Cursor, Write};

type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Elements that never take a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

impl Document {
    /// Serialize to an HTML string.
    ///
    /// The only fallible step of a page render; errors carry enough context
    /// to identify the failing construct.
    pub fn to_html(&self) -> Result<String> {
        let mut writer = Writer::new(Cursor::new(Vec::with_capacity(4096)));

        writer.get_mut().write_all(b"<!DOCTYPE html>")?;

        let mut html = BytesStart::new("html");
        if !self.lang.is_empty() {
            html.push_attribute(("lang", self.lang.as_str()));
        }
        writer.write_event(Event::Start(html))?;

        write_element(&mut writer, &self.head)?;
        write_element(&mut writer, &self.body)?;

        writer.write_event(Event::End(BytesEnd::new("html")))?;

        let bytes = writer.into_inner().into_inner();
        Ok(String::from_utf8(bytes)?)
    }
}

impl Element {
    /// Serialize a lone element, without the document shell.
    pub fn to_fragment(&self) -> Result<String> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        write_element(&mut writer, self)?;
        let bytes = writer.into_inner().into_inner();
        Ok(String::from_utf8(bytes)?)
    }
}

fn write_node(writer: &mut XmlWriter, node: &Node) -> Result<()> {
    match node {
        Node::Element(element) => write_element(writer, element),
        Node::Text(text) => {
            writer.write_event(Event::Text(BytesText::new(text)))?;
            Ok(())
        }
        Node::Raw(markup) => {
            writer.get_mut().write_all(markup.as_bytes())?;
            Ok(())
        }
    }
}

fn write_element(writer: &mut XmlWriter, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.tag());
    for (name, value) in element.attrs() {
        start.push_attribute((name, value));
    }

    if VOID_ELEMENTS.contains(&element.tag()) {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;

    // Space ensures proper HTML parsing of script tags
    if element.tag() == "script" && element.child_nodes().is_empty() {
        writer.write_event(Event::Text(BytesText::new(" ")))?;
    }

    for child in element.child_nodes() {
        write_node(writer, child)?;
    }

    writer.write_event(Event::End(BytesEnd::new(element.tag())))?;
    Ok(())
}
