// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Namespace declarations tracking for detached [`Element`]s.

use super::Element;

/// In-scope namespace declarations as `(prefix, uri)` pairs, innermost last.
///
/// The default namespace uses an empty prefix.
#[derive(Debug, Default)]
pub(super) struct Bindings(Vec<(String, String)>);

impl Bindings {
    /// Pushes the declarations of the given [`Element`], returning a mark to
    /// [`Bindings::leave()`] with.
    pub(super) fn enter(&mut self, el: &Element) -> usize {
        let mark = self.0.len();
        self.0.extend(el.attributes().iter().filter_map(|attr| {
            declared_prefix(&attr.name)
                .map(|prefix| (prefix.to_owned(), attr.value.clone()))
        }));
        mark
    }

    /// Pops everything pushed since the given `mark`.
    pub(super) fn leave(&mut self, mark: usize) {
        self.0.truncate(mark);
    }

    fn resolve(&self, prefix: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(p, _)| p == prefix)
            .map(|(_, uri)| uri.as_str())
    }
}

/// Re-declares on `el` every prefix its subtree uses without declaring it,
/// taking the URI from the `inherited` scope.
pub(super) fn rebind(el: &mut Element, inherited: &Bindings) {
    let mut unbound = vec![];
    collect_unbound(el, &mut Bindings::default(), &mut unbound);

    for prefix in unbound {
        let Some(uri) = inherited.resolve(&prefix).filter(|uri| !uri.is_empty())
        else {
            continue;
        };
        let name = if prefix.is_empty() {
            "xmlns".to_owned()
        } else {
            format!("xmlns:{prefix}")
        };
        let uri = uri.to_owned();
        el.set_attribute(name, uri);
    }
}

fn collect_unbound(el: &Element, local: &mut Bindings, out: &mut Vec<String>) {
    let mark = local.enter(el);

    note_usage(el.prefix().unwrap_or_default(), local, out);
    for attr in el.attributes() {
        if let Some(prefix) = attribute_prefix(&attr.name) {
            note_usage(prefix, local, out);
        }
    }
    for child in el.child_elements() {
        collect_unbound(child, local, out);
    }

    local.leave(mark);
}

fn note_usage(prefix: &str, local: &Bindings, out: &mut Vec<String>) {
    if local.resolve(prefix).is_none() && !out.iter().any(|p| p == prefix) {
        out.push(prefix.to_owned());
    }
}

/// Prefix declared by an attribute with the given name, if it's a namespace
/// declaration.
fn declared_prefix(name: &str) -> Option<&str> {
    if name == "xmlns" {
        Some("")
    } else {
        name.strip_prefix("xmlns:")
    }
}

/// Prefix an attribute name refers to. `xml` is bound implicitly, and
/// declarations themselves don't refer to anything.
fn attribute_prefix(name: &str) -> Option<&str> {
    name.split_once(':')
        .map(|(prefix, _)| prefix)
        .filter(|prefix| !matches!(*prefix, "xml" | "xmlns"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope(decls: &[(&str, &str)]) -> Bindings {
        let mut el = Element::new("testsuites");
        for (name, uri) in decls {
            el.set_attribute(*name, *uri);
        }
        let mut bindings = Bindings::default();
        _ = bindings.enter(&el);
        bindings
    }

    #[test]
    fn recognizes_declarations() {
        assert_eq!(declared_prefix("xmlns"), Some(""));
        assert_eq!(declared_prefix("xmlns:j"), Some("j"));
        assert_eq!(declared_prefix("name"), None);
        assert_eq!(attribute_prefix("xml:lang"), None);
        assert_eq!(attribute_prefix("xmlns:j"), None);
        assert_eq!(attribute_prefix("j:id"), Some("j"));
        assert_eq!(attribute_prefix("id"), None);
    }

    #[test]
    fn innermost_declaration_wins() {
        let mut bindings = scope(&[("xmlns:j", "urn:outer")]);
        let mark = bindings.enter(
            &Element::new("testsuite").with_attribute("xmlns:j", "urn:inner"),
        );
        assert_eq!(bindings.resolve("j"), Some("urn:inner"));

        bindings.leave(mark);
        assert_eq!(bindings.resolve("j"), Some("urn:outer"));
    }

    #[test]
    fn rebinds_default_namespace() {
        let mut el = Element::new("testsuite");
        rebind(&mut el, &scope(&[("xmlns", "urn:junit")]));
        assert_eq!(el.attribute("xmlns"), Some("urn:junit"));
    }

    #[test]
    fn skips_prefixes_declared_inside_subtree() {
        let mut el = Element::new("testsuite").with_child(
            Element::new("k:property").with_attribute("xmlns:k", "urn:inner"),
        );
        rebind(&mut el, &scope(&[("xmlns:k", "urn:outer")]));
        assert_eq!(el.attribute("xmlns:k"), None);
    }

    #[test]
    fn rebinds_attribute_prefixes() {
        let mut el = Element::new("testcase").with_attribute("j:flaky", "true");
        rebind(&mut el, &scope(&[("xmlns:j", "urn:junit")]));
        assert_eq!(el.attribute("xmlns:j"), Some("urn:junit"));
    }

    #[test]
    fn ignores_empty_default_namespace() {
        let mut el = Element::new("testcase");
        rebind(&mut el, &scope(&[("xmlns", "")]));
        assert!(el.attributes().is_empty());
    }
}
