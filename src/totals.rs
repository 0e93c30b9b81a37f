// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Totals`] of a composed JUnit report.

use derive_more::with_trait::Display;

use crate::{
    build::Scope,
    error::{ComposeError, MalformedReport},
    xml::Element,
};

/// Name of the attribute counting all the tests of a suite.
pub const TESTS: &str = "tests";

/// Name of the attribute counting failed tests of a suite.
pub const FAILURES: &str = "failures";

/// Name of the attribute counting errored tests of a suite.
pub const ERRORS: &str = "errors";

/// Summed `tests`, `failures` and `errors` counters of `<testsuite>`s.
///
/// A fresh value is created by every compose operation and threaded through
/// it, so independent operations never share their counts.
#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
#[display("tests={tests}, failures={failures}, errors={errors}")]
pub struct Totals {
    /// Number of tests.
    pub tests: u64,

    /// Number of failed tests.
    pub failures: u64,

    /// Number of errored tests.
    pub errors: u64,
}

impl Totals {
    /// Adds the counters of the given `<testsuite>` element.
    ///
    /// Absent attributes count as zero.
    ///
    /// # Errors
    ///
    /// If a present counter attribute is not a non-negative integer. Nothing
    /// is added in such case.
    pub fn fold(&mut self, suite: &Element) -> Result<(), MalformedReport> {
        let tests = counter(suite, TESTS)?;
        let failures = counter(suite, FAILURES)?;
        let errors = counter(suite, ERRORS)?;

        self.tests = self.tests.saturating_add(tests);
        self.failures = self.failures.saturating_add(failures);
        self.errors = self.errors.saturating_add(errors);
        Ok(())
    }

    /// Adds the counters of all the given `<testsuite>` elements.
    ///
    /// # Errors
    ///
    /// On the first suite with a malformed counter attribute.
    pub fn fold_all<'a>(
        &mut self,
        suites: impl IntoIterator<Item = &'a Element>,
    ) -> Result<(), MalformedReport> {
        suites.into_iter().try_for_each(|suite| self.fold(suite))
    }

    /// Writes these [`Totals`] as `tests`, `failures` and `errors` attributes
    /// of the JUnit root element in the given [`Scope`].
    ///
    /// # Errors
    ///
    /// With [`ComposeError::Usage`] if the [`Scope`] has no JUnit root.
    pub fn annotate(&self, scope: Scope<'_>) -> Result<(), ComposeError> {
        let root = scope
            .root()
            .ok_or(ComposeError::usage("no JUnit root element in scope"))?;
        root.set_attribute(TESTS, self.tests.to_string());
        root.set_attribute(FAILURES, self.failures.to_string());
        root.set_attribute(ERRORS, self.errors.to_string());
        Ok(())
    }
}

/// Parses the counter `attribute` of the given `suite`.
fn counter(suite: &Element, attribute: &'static str) -> Result<u64, MalformedReport> {
    suite.attribute(attribute).map_or(Ok(0), |value| {
        value
            .trim()
            .parse()
            .map_err(|_| MalformedReport::non_integer(attribute, value))
    })
}
