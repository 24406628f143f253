//! HTML serialisation of markup trees.

use crate::node::{Element, Node};
use std::fmt::Write as _;

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// Render a tree to an HTML string
///
/// Keys, listeners and references are not part of the markup.
#[must_use]
pub fn render<A>(node: &Node<A>) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node<A>(out: &mut String, node: &Node<A>) {
    match node {
        Node::Element(element) => write_element(out, element),
        Node::Text(content) => out.push_str(&escape(content)),
        Node::Empty => {},
    }
}

fn write_element<A>(out: &mut String, element: &Element<A>) {
    out.push('<');
    out.push_str(element.tag);

    for (name, value) in &element.attributes {
        if value.is_empty() {
            let _ = write!(out, " {name}");
        } else {
            let _ = write!(out, " {name}=\"{}\"", escape(value));
        }
    }

    if !element.style.is_empty() {
        let declarations: Vec<String> = element
            .style
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect();
        let _ = write!(out, " style=\"{}\"", escape(&declarations.join("; ")));
    }

    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag) {
        return;
    }

    for child in &element.children {
        write_node(out, child);
    }

    let _ = write!(out, "</{}>", element.tag);
}

/// Escape text for use in element content and quoted attribute values
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
