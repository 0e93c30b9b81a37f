// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Extraction of JUnit elements out of parsed reports.
//!
//! - [`suites`]: `<testsuite>` elements of a report, validating its root
//! - [`cases`]: `<testcase>` elements of every suite of a report,
//!   accumulating [`Totals`](crate::Totals) along the way
//!
//! Extracted elements are detached from the parsed report, which is dropped
//! afterwards.

pub mod cases;
pub mod suites;

pub use self::{
    cases::{cases, extract_cases},
    suites::{extract_suites, suites},
};

/// Name of the JUnit element wrapping multiple suites.
pub const TESTSUITES: &str = "testsuites";

/// Name of the JUnit suite element.
pub const TESTSUITE: &str = "testsuite";

/// Name of the JUnit test case element.
pub const TESTCASE: &str = "testcase";
