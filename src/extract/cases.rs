// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `<testcase>` extraction.

use super::{suites, TESTCASE};
use crate::{
    error::{ComposeError, MalformedReport, Result},
    source::Source,
    totals::Totals,
    xml::Element,
};

/// Flattens the given `<testsuite>` elements into their `<testcase>`
/// descendants (at any depth), suite by suite in document order.
///
/// Counters of every suite are folded into the given [`Totals`].
///
/// # Errors
///
/// With [`MalformedReport::NonIntegerCounter`] if a suite has a malformed
/// counter attribute.
pub fn extract_cases(
    suites: Vec<Element>,
    totals: &mut Totals,
) -> Result<Vec<Element>, MalformedReport> {
    let mut cases = vec![];
    for mut suite in suites {
        totals.fold(&suite)?;
        cases.extend(suite.take_descendants(TESTCASE));
    }
    Ok(cases)
}

/// Reads, parses and flattens the given [`Source`] into its `<testcase>`
/// elements, folding suite counters into the given [`Totals`].
///
/// # Errors
///
/// If the [`Source`] can't be read or parsed, or is a malformed report.
pub fn cases(source: &Source, totals: &mut Totals) -> Result<Vec<Element>> {
    extract_cases(suites(source)?, totals).map_err(|e| ComposeError::malformed(source.name(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suite(tests: &str, cases: &[&str]) -> Element {
        let mut suite = Element::new("testsuite").with_attribute("tests", tests);
        for name in cases {
            suite.push(Element::new("testcase").with_attribute("name", *name));
        }
        suite
    }

    fn names(cases: &[Element]) -> Vec<&str> {
        cases
            .iter()
            .map(|c| c.attribute("name").unwrap_or_default())
            .collect()
    }

    #[test]
    fn flattens_suite_by_suite() {
        let mut totals = Totals::default();
        let cases =
            extract_cases(vec![suite("2", &["a", "b"]), suite("1", &["c"])], &mut totals)
                .unwrap();

        assert_eq!(names(&cases), ["a", "b", "c"]);
        assert_eq!(totals.tests, 3);
    }

    #[test]
    fn finds_cases_at_any_depth() {
        let nested = Element::new("testsuite").with_child(
            Element::new("group")
                .with_child(Element::new("testcase").with_attribute("name", "deep")),
        );

        let cases = extract_cases(vec![nested], &mut Totals::default()).unwrap();
        assert_eq!(names(&cases), ["deep"]);
    }

    #[test]
    fn keeps_case_content() {
        let case = Element::new("testcase")
            .with_attribute("name", "a")
            .with_child(Element::new("failure").with_attribute("message", "boom"));
        let suite = Element::new("testsuite").with_child(case.clone());

        let cases = extract_cases(vec![suite], &mut Totals::default()).unwrap();
        assert_eq!(cases, [case]);
    }

    #[test]
    fn suite_without_cases_still_counts() {
        let mut totals = Totals::default();
        let cases = extract_cases(vec![suite("4", &[])], &mut totals).unwrap();

        assert!(cases.is_empty());
        assert_eq!(totals.tests, 4);
    }

    #[test]
    fn malformed_counter_fails_extraction() {
        let err = extract_cases(vec![suite("four", &["a"])], &mut Totals::default())
            .unwrap_err();
        assert!(err.is_non_integer_counter());
    }

    #[test]
    fn totals_keep_accumulating_across_sources() {
        let mut totals = Totals::default();
        let first = Source::inline("1", r#"<testsuite tests="1"><testcase/></testsuite>"#);
        let second = Source::inline(
            "2",
            r#"<testsuites><testsuite tests="2" errors="1"><testcase/></testsuite></testsuites>"#,
        );

        assert_eq!(cases(&first, &mut totals).unwrap().len(), 1);
        assert_eq!(cases(&second, &mut totals).unwrap().len(), 1);
        assert_eq!(totals, Totals { tests: 3, failures: 0, errors: 1 });
    }
}
