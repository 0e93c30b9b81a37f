// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Structural errors of JUnit XML reports.
//!
//! These are raised on well-formed XML which doesn't follow the JUnit shape
//! this crate understands.

use derive_more::with_trait::{Display, Error};

/// Well-formed XML which is not a JUnit report this crate can compose.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum MalformedReport {
    /// Top-level element is neither `<testsuites>` nor `<testsuite>`.
    #[display("Unexpected child element found while parsing.")]
    UnexpectedElement {
        /// Qualified name of the offending element.
        #[error(not(source))]
        name: String,
    },

    /// `tests`, `failures` or `errors` attribute of a `<testsuite>` is not a
    /// non-negative integer.
    #[display(
        "testsuite element attributes for tests, value, error must be \
         integers."
    )]
    NonIntegerCounter {
        /// Name of the offending attribute.
        #[error(not(source))]
        attribute: &'static str,

        /// Offending value.
        #[error(not(source))]
        value: String,
    },
}

impl MalformedReport {
    /// Creates a new [`MalformedReport::UnexpectedElement`] error.
    #[must_use]
    pub fn unexpected_element(name: impl Into<String>) -> Self {
        Self::UnexpectedElement { name: name.into() }
    }

    /// Creates a new [`MalformedReport::NonIntegerCounter`] error.
    #[must_use]
    pub fn non_integer(attribute: &'static str, value: impl Into<String>) -> Self {
        Self::NonIntegerCounter {
            attribute,
            value: value.into(),
        }
    }

    /// Returns true if this is an unexpected element error.
    #[must_use]
    pub fn is_unexpected_element(&self) -> bool {
        matches!(self, Self::UnexpectedElement { .. })
    }

    /// Returns true if this is a non-integer counter error.
    #[must_use]
    pub fn is_non_integer_counter(&self) -> bool {
        matches!(self, Self::NonIntegerCounter { .. })
    }
}
