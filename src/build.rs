// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Building composed JUnit [`Document`]s.
//!
//! A compose operation runs the extractor of its [`Mode`] over every target
//! in the given order, accumulating a single [`Totals`] value, and then wraps
//! everything extracted into a fresh JUnit root element.

use derive_more::with_trait::Display;

use crate::{
    error::{ComposeError, Result},
    extract::{self, TESTCASE, TESTSUITE, TESTSUITES},
    source::Source,
    totals::Totals,
    xml::{Document, Element},
};

/// Shape of a composed JUnit report.
#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq, clap::ValueEnum)]
pub enum Mode {
    /// `<testsuites>` root wrapping the original `<testsuite>`s.
    #[default]
    #[display("suites")]
    Suites,

    /// Single synthesized `<testsuite>` root wrapping every `<testcase>`.
    #[display("cases")]
    Cases,
}

impl Mode {
    /// Name of the root element of a report composed in this [`Mode`].
    #[must_use]
    pub const fn root_name(self) -> &'static str {
        match self {
            Self::Suites => TESTSUITES,
            Self::Cases => TESTSUITE,
        }
    }

    /// Name of the elements a report composed in this [`Mode`] consists of.
    #[must_use]
    pub const fn child_name(self) -> &'static str {
        match self {
            Self::Suites => TESTSUITE,
            Self::Cases => TESTCASE,
        }
    }
}

/// Place to look for a JUnit root element in.
#[derive(Debug)]
pub enum Scope<'a> {
    /// The [`Element`] itself is the root.
    Element(&'a mut Element),

    /// The first top-level `<testsuites>` or `<testsuite>` of the
    /// [`Document`] is the root.
    Document(&'a mut Document),
}

impl<'a> Scope<'a> {
    /// Resolves the JUnit root element of this [`Scope`], if there is one.
    #[must_use]
    pub fn root(self) -> Option<&'a mut Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Document(doc) => doc
                .roots_mut()
                .iter_mut()
                .find(|el| matches!(el.local_name(), TESTSUITES | TESTSUITE)),
        }
    }
}

impl Document {
    /// Creates a new [`Document`] with an empty root element of the given
    /// [`Mode`].
    #[must_use]
    pub fn junit(mode: Mode) -> Self {
        Self::with_root(Element::new(mode.root_name()))
    }
}

/// Wraps the given `children` into a new [`Document::junit()`] annotated
/// with the given [`Totals`].
///
/// `children` are expected to be `<testsuite>`s in [`Mode::Suites`] and
/// `<testcase>`s in [`Mode::Cases`], and are appended in their order.
///
/// # Errors
///
/// Never, unless the root element couldn't be resolved, which would be a bug.
pub fn build(mode: Mode, children: Vec<Element>, totals: &Totals) -> Result<Document> {
    let mut document = Document::junit(mode);
    let root = Scope::Document(&mut document)
        .root()
        .ok_or(ComposeError::usage("fresh JUnit document has no root"))?;
    root.extend(children);
    totals.annotate(Scope::Element(root))?;
    Ok(document)
}

/// Composes the given `targets` into a [`Document`] of the given [`Mode`].
///
/// Targets are processed one by one in the given order. In [`Mode::Suites`]
/// the [`Totals`] are summed from every extracted `<testsuite>`, while in
/// [`Mode::Cases`] they are accumulated by the case extraction itself.
///
/// # Errors
///
/// On the first target failing to be read, parsed or extracted. Nothing is
/// returned in such case.
pub fn compose_document<I>(mode: Mode, targets: I) -> Result<Document>
where
    I: IntoIterator,
    I::Item: Into<Source>,
{
    let span = tracing::info_span!("compose", %mode);
    let _entered = span.enter();

    let mut totals = Totals::default();
    let mut children = vec![];
    for target in targets {
        let source = target.into();
        let extracted = match mode {
            Mode::Suites => {
                let suites = extract::suites(&source)?;
                totals
                    .fold_all(&suites)
                    .map_err(|e| ComposeError::malformed(source.name(), e))?;
                suites
            }
            Mode::Cases => extract::cases(&source, &mut totals)?,
        };
        tracing::debug!(
            report = %source.name(),
            count = extracted.len(),
            "collected <{}> elements",
            mode.child_name()
        );
        children.extend(extracted);
    }

    tracing::info!(%totals, children = children.len(), "composed JUnit report");
    build(mode, children, &totals)
}
