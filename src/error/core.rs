// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Core error type of composing JUnit reports.
//!
//! This module contains the main [`ComposeError`] enum aborting a whole
//! compose operation. Every variant names the target it happened on.

use std::{io, path::PathBuf};

use derive_more::with_trait::{Display, Error};

use super::MalformedReport;
use crate::xml::XmlError;

/// Top-level error type of all compose operations.
///
/// Any of these aborts the operation: no partial report is ever produced.
#[derive(Debug, Display, Error)]
pub enum ComposeError {
    /// Target is well-formed XML, but not a JUnit report.
    #[display("Malformed JUnit report `{target}`: {source}")]
    Malformed {
        /// Name of the offending target.
        #[error(not(source))]
        target: String,

        /// What exactly is wrong.
        source: MalformedReport,
    },

    /// I/O error while reading a target or writing the composed report.
    #[display("I/O operation on `{target}` failed: {source}")]
    Io {
        /// Path or name of the file the operation was performed on.
        #[error(not(source))]
        target: String,

        /// Underlying I/O error.
        source: io::Error,
    },

    /// Target is not well-formed XML.
    #[display("`{target}` is not well-formed XML: {source}")]
    Xml {
        /// Name of the offending target.
        #[error(not(source))]
        target: String,

        /// Underlying parsing error.
        source: XmlError,
    },

    /// Directory to discover reports in couldn't be scanned.
    #[display("Failed to scan directory `{}`: {source}", dir.display())]
    Discovery {
        /// Scanned directory.
        #[error(not(source))]
        dir: PathBuf,

        /// Underlying glob error.
        source: globwalk::GlobError,
    },

    /// Library used in a way it's not supposed to be.
    #[display("Library usage error: {reason}")]
    Usage {
        /// What contract was violated.
        #[error(not(source))]
        reason: &'static str,
    },
}

/// Result type alias using [`ComposeError`] by default.
pub type Result<T, E = ComposeError> = std::result::Result<T, E>;

impl ComposeError {
    /// Creates a new [`ComposeError::Malformed`] error.
    #[must_use]
    pub fn malformed(target: impl Into<String>, source: MalformedReport) -> Self {
        Self::Malformed {
            target: target.into(),
            source,
        }
    }

    /// Creates a new [`ComposeError::Io`] error.
    #[must_use]
    pub fn io(target: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            target: target.into(),
            source,
        }
    }

    /// Creates a new [`ComposeError::Xml`] error.
    #[must_use]
    pub fn xml(target: impl Into<String>, source: XmlError) -> Self {
        Self::Xml {
            target: target.into(),
            source,
        }
    }

    /// Creates a new [`ComposeError::Usage`] error.
    #[must_use]
    pub const fn usage(reason: &'static str) -> Self {
        Self::Usage { reason }
    }

    /// Returns true if this is a malformed report error.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    /// Returns true if this is an I/O error.
    #[must_use]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns true if this is an XML error.
    #[must_use]
    pub fn is_xml_error(&self) -> bool {
        matches!(self, Self::Xml { .. })
    }

    /// Returns the [`MalformedReport`] if applicable.
    #[must_use]
    pub fn malformed_report(&self) -> Option<&MalformedReport> {
        match self {
            Self::Malformed { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Returns the target this error happened on, if any.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Malformed { target, .. }
            | Self::Io { target, .. }
            | Self::Xml { target, .. } => Some(target.as_str()),
            Self::Discovery { .. } | Self::Usage { .. } => None,
        }
    }
}
