// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Owned XML element tree used to move JUnit elements between documents.
//!
//! The tree keeps element names, attributes in their original order, and
//! child nodes (elements, text, CDATA, comments and processing
//! instructions). It is built by [`parse()`] and rendered back by
//! [`write`].
//!
//! Elements are plain owned values, so moving one into another document is a
//! move in the Rust sense: [`Element::take_descendants()`] detaches matching
//! elements from their parents and hands them over to the caller.

mod namespace;
pub mod parse;
pub mod write;

use std::{fmt, mem};

pub use self::parse::{parse, XmlError};

use self::namespace::Bindings;

/// Single `name="value"` pair of an [`Element`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attribute {
    /// Qualified name of this [`Attribute`], as written in the source.
    pub name: String,

    /// Unescaped value of this [`Attribute`].
    pub value: String,
}

impl Attribute {
    /// Creates a new [`Attribute`].
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Child node of an [`Element`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Node {
    /// Nested [`Element`].
    Element(Element),

    /// Unescaped character data.
    Text(String),

    /// Content of a `<![CDATA[...]]>` section.
    CData(String),

    /// Content of a `<!--...-->` comment.
    Comment(String),

    /// Content of a `<?...?>` processing instruction.
    ProcessingInstruction(String),
}

impl Node {
    /// Indicates whether this [`Node`] carries character data, which makes
    /// its parent's content mixed.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_) | Self::CData(_))
    }

    /// Returns the [`Element`] of this [`Node`], if it's one.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

/// XML element owning its attributes and children.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Element {
    /// Qualified name (`prefix:local` or `local`).
    name: String,

    /// Attributes in insertion order, names are unique.
    attributes: Vec<Attribute>,

    /// Child nodes in document order.
    children: Vec<Node>,
}

impl Element {
    /// Creates a new empty [`Element`] with the given qualified `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: vec![],
            children: vec![],
        }
    }

    /// Qualified name of this [`Element`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of this [`Element`] without its namespace prefix.
    #[must_use]
    pub fn local_name(&self) -> &str {
        self.name
            .split_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    /// Namespace prefix of this [`Element`], if any.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(prefix, _)| prefix)
    }

    /// Attributes of this [`Element`] in their order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Returns the value of the attribute with the given qualified `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Sets the attribute `name` to `value`.
    ///
    /// An existing attribute keeps its position, a new one is appended.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        let (name, value) = (name.into(), value.into());
        match self.attributes.iter_mut().find(|attr| attr.name == name) {
            Some(attr) => attr.value = value,
            None => self.attributes.push(Attribute { name, value }),
        }
    }

    /// Builder-style version of [`Element::set_attribute()`].
    #[must_use]
    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Child nodes of this [`Element`].
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Iterates over the direct child [`Element`]s.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Appends the given `node` as the last child.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Builder-style version of [`Element::push()`].
    #[must_use]
    pub fn with_child(mut self, node: impl Into<Node>) -> Self {
        self.push(node);
        self
    }

    /// Collects all descendant [`Element`]s with the given `local_name` in
    /// document order, at any depth (matches nested into matches included).
    #[must_use]
    pub fn descendants(&self, local_name: &str) -> Vec<&Element> {
        let mut found = vec![];
        self.collect_descendants(local_name, &mut found);
        found
    }

    fn collect_descendants<'me>(
        &'me self,
        local_name: &str,
        found: &mut Vec<&'me Element>,
    ) {
        for child in self.child_elements() {
            if child.local_name() == local_name {
                found.push(child);
            }
            child.collect_descendants(local_name, found);
        }
    }

    /// Detaches all descendant [`Element`]s with the given `local_name` and
    /// returns them in document order.
    ///
    /// A matching element is moved out together with its whole subtree, so
    /// matches nested inside it stay where they are. Namespace prefixes a
    /// detached element relies on, but which were declared on one of its
    /// former ancestors, are re-declared on it.
    pub fn take_descendants(&mut self, local_name: &str) -> Vec<Element> {
        let mut taken = vec![];
        self.take_matching(local_name, &mut Bindings::default(), &mut taken);
        taken
    }

    fn take_matching(
        &mut self,
        local_name: &str,
        bindings: &mut Bindings,
        taken: &mut Vec<Element>,
    ) {
        let mark = bindings.enter(self);

        // Iterate over a snapshot, so nothing is reparented mid-iteration.
        let children = mem::take(&mut self.children);
        self.children.reserve(children.len());
        for node in children {
            match node {
                Node::Element(mut child) if child.local_name() == local_name => {
                    namespace::rebind(&mut child, bindings);
                    taken.push(child);
                }
                Node::Element(mut child) => {
                    child.take_matching(local_name, bindings, taken);
                    self.children.push(Node::Element(child));
                }
                other => self.children.push(other),
            }
        }

        bindings.leave(mark);
    }
}

impl Extend<Element> for Element {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        self.children.extend(iter.into_iter().map(Node::Element));
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write::element(&mut out, self);
        f.write_str(&out)
    }
}

/// Sequence of top-level [`Element`]s.
///
/// A parsed input normally has exactly one of them, while a composed report
/// always has exactly one.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Document {
    roots: Vec<Element>,
}

impl Document {
    /// Creates a new [`Document`] with the given single `root`.
    #[must_use]
    pub fn with_root(root: Element) -> Self {
        Self { roots: vec![root] }
    }

    /// Top-level [`Element`]s of this [`Document`].
    #[must_use]
    pub fn roots(&self) -> &[Element] {
        &self.roots
    }

    /// Mutable access to the top-level [`Element`]s of this [`Document`].
    pub fn roots_mut(&mut self) -> &mut [Element] {
        &mut self.roots
    }

    /// Appends another top-level [`Element`].
    pub fn push_root(&mut self, root: Element) {
        self.roots.push(root);
    }

    /// Consumes this [`Document`], giving away its top-level [`Element`]s.
    #[must_use]
    pub fn into_roots(self) -> Vec<Element> {
        self.roots
    }

    /// Renders this [`Document`] with the XML declaration.
    ///
    /// See [`write::to_string()`] for the exact format.
    #[must_use]
    pub fn to_xml(&self) -> String {
        write::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suite(name: &str) -> Element {
        Element::new("testsuite").with_attribute("name", name)
    }

    #[test]
    fn splits_qualified_name() {
        let el = Element::new("j:testsuite");
        assert_eq!(el.local_name(), "testsuite");
        assert_eq!(el.prefix(), Some("j"));

        let el = Element::new("testsuite");
        assert_eq!(el.local_name(), "testsuite");
        assert_eq!(el.prefix(), None);
    }

    #[test]
    fn set_attribute_keeps_position_of_existing() {
        let mut el = Element::new("testsuite")
            .with_attribute("tests", "1")
            .with_attribute("name", "a");
        el.set_attribute("tests", "2");
        el.set_attribute("errors", "0");

        let names = el
            .attributes()
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["tests", "name", "errors"]);
        assert_eq!(el.attribute("tests"), Some("2"));
        assert_eq!(el.attribute("failures"), None);
    }

    #[test]
    fn descendants_are_in_document_order() {
        let root = Element::new("testsuites")
            .with_child(suite("a").with_child(Element::new("testcase")))
            .with_child(Element::new("group").with_child(suite("b")))
            .with_child(Node::Text("noise".into()));

        let found = root
            .descendants("testsuite")
            .into_iter()
            .map(|el| el.attribute("name").unwrap_or_default())
            .collect::<Vec<_>>();
        assert_eq!(found, ["a", "b"]);
        assert_eq!(root.descendants("testcase").len(), 1);
    }

    #[test]
    fn take_descendants_detaches_from_parent() {
        let mut root = Element::new("testsuites")
            .with_child(Node::Comment(" shard 1 ".into()))
            .with_child(suite("a"))
            .with_child(Element::new("group").with_child(suite("b")));

        let taken = root.take_descendants("testsuite");

        assert_eq!(taken, [suite("a"), suite("b")]);
        assert!(root.descendants("testsuite").is_empty());
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.child_elements().count(), 1);
    }

    #[test]
    fn take_descendants_moves_outermost_match_whole() {
        let inner = Element::new("testcase").with_attribute("name", "inner");
        let outer = Element::new("testcase")
            .with_attribute("name", "outer")
            .with_child(inner);
        let mut root = suite("a").with_child(outer.clone());

        assert_eq!(root.take_descendants("testcase"), [outer]);
        assert!(root.children().is_empty());
    }

    #[test]
    fn take_descendants_redeclares_inherited_prefixes() {
        let mut root = Element::new("testsuites")
            .with_attribute("xmlns:j", "urn:junit")
            .with_attribute("xmlns:x", "urn:unused")
            .with_child(
                Element::new("testsuite")
                    .with_child(Element::new("j:property")),
            );

        let taken = root.take_descendants("testsuite");

        assert_eq!(taken.len(), 1);
        assert_eq!(taken[0].attribute("xmlns:j"), Some("urn:junit"));
        assert_eq!(taken[0].attribute("xmlns:x"), None);
    }

    #[test]
    fn extend_appends_elements_as_children() {
        let mut root = Element::new("testsuite");
        root.extend([Element::new("testcase"), Element::new("testcase")]);
        assert_eq!(root.child_elements().count(), 2);
    }

    #[test]
    fn document_gives_away_roots() {
        let mut doc = Document::with_root(suite("a"));
        doc.push_root(suite("b"));
        doc.roots_mut()[1].set_attribute("tests", "3");

        assert_eq!(doc.roots().len(), 2);
        let roots = doc.into_roots();
        assert_eq!(roots[1].attribute("tests"), Some("3"));
    }
}
