// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Canonical text rendering of a [`Document`].

use quick_xml::escape::partial_escape;

use super::{Document, Element, Node};

/// XML declaration every rendered [`Document`] starts with.
pub const DECLARATION: &str =
    r#"<?xml version="1.0" encoding="utf-8" standalone="yes"?>"#;

const INDENT: &str = "  ";

/// Renders the given [`Document`]: the [`DECLARATION`], a line break, and
/// every root element.
///
/// Element-only content is indented by two spaces per level, one node per
/// line. Once an element contains text or CDATA, its content is written as
/// is, without any indentation. Childless elements are written as
/// `<name a="v" />`. No trailing line break is added.
#[must_use]
pub fn to_string(document: &Document) -> String {
    let mut out = String::from(DECLARATION);
    for root in document.roots() {
        out.push('\n');
        element(&mut out, root);
    }
    out
}

/// Renders a single [`Element`] with its subtree, starting at zero depth.
pub(super) fn element(out: &mut String, el: &Element) {
    write_element(out, el, 0, true);
}

fn write_element(out: &mut String, el: &Element, depth: usize, indent: bool) {
    out.push('<');
    out.push_str(el.name());
    for attr in el.attributes() {
        out.push(' ');
        out.push_str(&attr.name);
        out.push_str("=\"");
        escape_attribute(out, &attr.value);
        out.push('"');
    }

    if el.children().is_empty() {
        out.push_str(" />");
        return;
    }
    out.push('>');

    let indent = indent && !el.children().iter().any(Node::is_text);
    for child in el.children() {
        if indent {
            new_line(out, depth + 1);
        }
        match child {
            Node::Element(el) => write_element(out, el, depth + 1, indent),
            Node::Text(text) => out.push_str(&partial_escape(text.as_str())),
            Node::CData(data) => {
                out.push_str("<![CDATA[");
                out.push_str(data);
                out.push_str("]]>");
            }
            Node::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->");
            }
            Node::ProcessingInstruction(pi) => {
                out.push_str("<?");
                out.push_str(pi);
                out.push_str("?>");
            }
        }
    }
    if indent {
        new_line(out, depth);
    }

    out.push_str("</");
    out.push_str(el.name());
    out.push('>');
}

fn new_line(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

/// Escapes markup characters, quotes and whitespace that attribute value
/// normalization would otherwise eat.
fn escape_attribute(out: &mut String, value: &str) {
    for ch in partial_escape(value).chars() {
        match ch {
            '"' => out.push_str("&quot;"),
            '\t' => out.push_str("&#x9;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            ch => out.push(ch),
        }
    }
}
