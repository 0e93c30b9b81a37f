// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types of this crate.
//!
//! # Modules
//!
//! - [`core`] - Main [`ComposeError`] type aborting a compose operation
//! - [`report`] - [`MalformedReport`] structural errors of JUnit reports
//!
//! Errors of parsing non-well-formed XML live in [`xml`](crate::xml) as
//! [`XmlError`](crate::xml::XmlError).

pub mod core;
pub mod report;

pub use self::{
    core::{ComposeError, Result},
    report::MalformedReport,
};
