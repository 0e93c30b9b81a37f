// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `<testsuite>` extraction.

use super::{TESTSUITE, TESTSUITES};
use crate::{
    error::{ComposeError, MalformedReport, Result},
    source::Source,
    xml::{Document, Element},
};

/// Splits the given parsed report into its `<testsuite>` elements.
///
/// Every top-level element is classified on its own:
/// - `<testsuites>` contributes all its `<testsuite>` descendants in
///   document order;
/// - `<testsuite>` contributes itself.
///
/// # Errors
///
/// With [`MalformedReport::UnexpectedElement`] on any other top-level
/// element.
pub fn extract_suites(document: Document) -> Result<Vec<Element>, MalformedReport> {
    let mut suites = vec![];
    for mut root in document.into_roots() {
        if root.local_name() == TESTSUITES {
            suites.extend(root.take_descendants(TESTSUITE));
        } else if root.local_name() == TESTSUITE {
            suites.push(root);
        } else {
            return Err(MalformedReport::unexpected_element(root.name()));
        }
    }
    Ok(suites)
}

/// Reads, parses and splits the given [`Source`] into its `<testsuite>`
/// elements.
///
/// # Errors
///
/// If the [`Source`] can't be read or parsed, or is a malformed report.
pub fn suites(source: &Source) -> Result<Vec<Element>> {
    let document = source.parse()?;
    let suites =
        extract_suites(document).map_err(|e| ComposeError::malformed(source.name(), e))?;

    for suite in &suites {
        tracing::trace!(report = %source.name(), %suite, "extracted <testsuite>");
    }
    Ok(suites)
}
