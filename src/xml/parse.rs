// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Whole-document XML parsing into an owned [`Document`].

use derive_more::with_trait::{Display, Error};
use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};

use super::{Attribute, Document, Element, Node};

/// Error of parsing text which is not a well-formed XML document.
#[derive(Debug, Display, Error)]
pub enum XmlError {
    /// Syntax error reported by the XML reader.
    #[display("{_0}")]
    Syntax(quick_xml::Error),

    /// Input ended while an element was still open.
    #[display("element `<{name}>` is not closed")]
    Unclosed {
        /// Qualified name of the unclosed element.
        #[error(not(source))]
        name: String,
    },

    /// Closing tag without a matching opening one.
    #[display("closing tag `</{name}>` has no opening tag")]
    Unopened {
        /// Qualified name in the closing tag.
        #[error(not(source))]
        name: String,
    },

    /// Non-whitespace character data outside of any element.
    #[display("text content found outside of the root element")]
    TextOutsideRoot,

    /// Input has no element at all.
    #[display("root element is missing")]
    MissingRoot,
}

impl From<quick_xml::Error> for XmlError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Syntax(err)
    }
}

impl From<quick_xml::events::attributes::AttrError> for XmlError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Self::Syntax(err.into())
    }
}

/// Parses the given XML `text` into a [`Document`].
///
/// Whitespace-only text is dropped, any other text is kept verbatim
/// (unescaped). Comments and processing instructions outside of the root are
/// dropped together with the XML declaration and `DOCTYPE`. More than one
/// top-level element is accepted: each becomes a root of the [`Document`].
///
/// # Errors
///
/// If the `text` is not well-formed XML.
pub fn parse(text: &str) -> Result<Document, XmlError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = Reader::from_str(text);

    let mut open: Vec<Element> = vec![];
    let mut roots = vec![];
    loop {
        match reader.read_event()? {
            Event::Start(start) => open.push(element(&start)?),
            Event::Empty(start) => {
                attach(&mut open, &mut roots, element(&start)?.into())?;
            }
            Event::End(end) => {
                let Some(el) = open.pop() else {
                    return Err(XmlError::Unopened {
                        name: String::from_utf8_lossy(end.name().as_ref())
                            .into_owned(),
                    });
                };
                attach(&mut open, &mut roots, el.into())?;
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                if !text.trim().is_empty() {
                    attach(&mut open, &mut roots, Node::Text(text.into_owned()))?;
                }
            }
            Event::CData(cdata) => {
                let cdata = String::from_utf8_lossy(&cdata).into_owned();
                attach(&mut open, &mut roots, Node::CData(cdata))?;
            }
            Event::Comment(comment) => {
                if let Some(parent) = open.last_mut() {
                    parent.push(Node::Comment(
                        String::from_utf8_lossy(&comment).into_owned(),
                    ));
                }
            }
            Event::PI(pi) => {
                if let Some(parent) = open.last_mut() {
                    parent.push(Node::ProcessingInstruction(
                        String::from_utf8_lossy(&pi).into_owned(),
                    ));
                }
            }
            Event::Decl(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    if let Some(el) = open.pop() {
        return Err(XmlError::Unclosed { name: el.name });
    }
    if roots.is_empty() {
        return Err(XmlError::MissingRoot);
    }
    Ok(Document { roots })
}

/// Creates an [`Element`] out of an opening tag.
fn element(start: &BytesStart<'_>) -> Result<Element, XmlError> {
    let mut el = Element::new(String::from_utf8_lossy(start.name().as_ref()));
    for attr in start.attributes() {
        let attr = attr?;
        el.attributes.push(Attribute {
            name: String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            value: attr.unescape_value()?.into_owned(),
        });
    }
    Ok(el)
}

/// Attaches the given `node` to the innermost `open` element, or makes it a
/// root if there is none.
fn attach(
    open: &mut [Element],
    roots: &mut Vec<Element>,
    node: Node,
) -> Result<(), XmlError> {
    match (open.last_mut(), node) {
        (Some(parent), node) => parent.push(node),
        (None, Node::Element(el)) => roots.push(el),
        (None, _) => return Err(XmlError::TextOutsideRoot),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_elements_with_attributes() {
        let doc = parse(
            r#"<?xml version="1.0" encoding="UTF-8"?>
            <testsuite name="unit" tests="2">
                <testcase name="a" time="0.1"/>
                <testcase name="b"><failure message="x &amp; y">boom</failure></testcase>
            </testsuite>"#,
        )
        .unwrap();

        assert_eq!(doc.roots().len(), 1);
        let suite = &doc.roots()[0];
        assert_eq!(suite.name(), "testsuite");
        assert_eq!(suite.attribute("tests"), Some("2"));

        let cases = suite.child_elements().collect::<Vec<_>>();
        assert_eq!(cases.len(), 2);
        assert!(cases[0].children().is_empty());

        let failure = cases[1].child_elements().next().unwrap();
        assert_eq!(failure.attribute("message"), Some("x & y"));
        assert_eq!(failure.children(), [Node::Text("boom".into())]);
    }

    #[test]
    fn keeps_cdata_comments_and_instructions() {
        let doc = parse(
            "<testcase><!-- retried --><?trace on?>\
             <system-out><![CDATA[<raw>]]></system-out></testcase>",
        )
        .unwrap();
        let case = &doc.roots()[0];

        assert_eq!(case.children()[0], Node::Comment(" retried ".into()));
        assert_eq!(
            case.children()[1],
            Node::ProcessingInstruction("trace on".into()),
        );
        let out = case.child_elements().next().unwrap();
        assert_eq!(out.children(), [Node::CData("<raw>".into())]);
    }

    #[test]
    fn accepts_several_top_level_elements() {
        let doc = parse("<testsuite/>\n<testsuites></testsuites>").unwrap();
        let names = doc.roots().iter().map(Element::name).collect::<Vec<_>>();
        assert_eq!(names, ["testsuite", "testsuites"]);
    }

    #[test]
    fn skips_byte_order_mark() {
        let doc = parse("\u{feff}<testsuites/>").unwrap();
        assert_eq!(doc.roots()[0].name(), "testsuites");
    }

    #[test]
    fn rejects_unclosed_element() {
        let err = parse("<testsuites><testsuite>").unwrap_err();
        assert!(
            matches!(err, XmlError::Unclosed { .. } | XmlError::Syntax(_)),
            "{err:?}",
        );
    }

    #[test]
    fn rejects_mismatched_closing_tag() {
        let err = parse("<testsuites></testsuite>").unwrap_err();
        assert!(matches!(err, XmlError::Syntax(_)), "{err:?}");
    }

    #[test]
    fn rejects_text_outside_root() {
        let err = parse("<testsuite/>trailing").unwrap_err();
        assert!(matches!(err, XmlError::TextOutsideRoot), "{err:?}");
    }

    #[test]
    fn rejects_empty_input() {
        let err = parse("  \n").unwrap_err();
        assert!(matches!(err, XmlError::MissingRoot), "{err:?}");
        assert_eq!(err.to_string(), "root element is missing");
    }
}
