// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Inputs of compose operations.

use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    error::{ComposeError, Result},
    xml::{self, Document},
};

/// Single JUnit report to be composed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Source {
    /// UTF-8 encoded file on disk.
    File(PathBuf),

    /// Report text held in memory.
    Inline {
        /// Name to refer to this report with in errors and logs.
        name: String,

        /// XML text of the report.
        xml: String,
    },
}

impl Source {
    /// Creates a new [`Source::Inline`].
    #[must_use]
    pub fn inline(name: impl Into<String>, xml: impl Into<String>) -> Self {
        Self::Inline {
            name: name.into(),
            xml: xml.into(),
        }
    }

    /// Name of this [`Source`]: the file path or the given inline name.
    #[must_use]
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            Self::File(path) => path.to_string_lossy(),
            Self::Inline { name, .. } => name.into(),
        }
    }

    /// Reads the XML text of this [`Source`].
    ///
    /// # Errors
    ///
    /// With [`ComposeError::Io`] if the file can't be read or isn't UTF-8.
    pub fn read(&self) -> Result<Cow<'_, str>> {
        match self {
            Self::File(path) => fs::read_to_string(path)
                .map(Cow::Owned)
                .map_err(|e| ComposeError::io(self.name(), e)),
            Self::Inline { xml, .. } => Ok(xml.into()),
        }
    }

    /// Reads and parses this [`Source`].
    ///
    /// # Errors
    ///
    /// With [`ComposeError::Io`] if it can't be read, or with
    /// [`ComposeError::Xml`] if it's not well-formed XML.
    pub fn parse(&self) -> Result<Document> {
        let text = self.read()?;
        xml::parse(&text).map_err(|e| ComposeError::xml(self.name(), e))
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

impl From<&PathBuf> for Source {
    fn from(path: &PathBuf) -> Self {
        Self::File(path.clone())
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Self::File(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn inline_source_is_named() {
        let source = Source::inline("shard-1", "<testsuite/>");
        assert_eq!(source.name(), "shard-1");
        assert_eq!(source.read().unwrap(), "<testsuite/>");
    }

    #[test]
    fn reads_file_source() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "<testsuites/>").unwrap();

        let source = Source::from(file.path());
        assert_eq!(source.name(), file.path().to_string_lossy());
        assert_eq!(source.parse().unwrap().roots()[0].name(), "testsuites");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = Source::from(dir.path().join("absent.junit"));

        let err = source.parse().unwrap_err();
        assert!(err.is_io_error(), "{err:?}");
        assert!(err.target().unwrap().ends_with("absent.junit"));
    }

    #[test]
    fn malformed_xml_is_xml_error() {
        let err = Source::inline("broken", "<testsuite>").parse().unwrap_err();
        assert!(err.is_xml_error(), "{err:?}");
        assert_eq!(err.target(), Some("broken"));
    }
}
