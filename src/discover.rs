// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Discovery of JUnit report files in directories.

use std::path::{Path, PathBuf};

use crate::error::{ComposeError, Result};

/// Glob pattern of JUnit report file names.
pub const PATTERN: &str = "*.junit*";

/// Recursively lists files under the given `dir` whose names match
/// [`PATTERN`] (case-insensitively), sorted by path.
///
/// Returned paths are rooted at the canonicalized `dir`. Entries which can't
/// be read are skipped.
///
/// # Errors
///
/// If the `dir` can't be canonicalized or the directory walker can't be
/// built for it.
pub fn discover(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir
        .as_ref()
        .canonicalize()
        .map_err(|e| ComposeError::io(dir.as_ref().to_string_lossy(), e))?;
    let walker = globwalk::GlobWalkerBuilder::new(&dir, PATTERN)
        .case_insensitive(true)
        .build()
        .map_err(|source| ComposeError::Discovery {
            dir: dir.clone(),
            source,
        })?;

    let mut found = walker
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect::<Vec<_>>();
    found.sort();
    Ok(found)
}

/// Expands the given `paths` into report files: directories are replaced by
/// their [`discover`]ed files, anything else is kept as is. Order of `paths`
/// is preserved.
///
/// # Errors
///
/// If a directory can't be scanned.
pub fn expand_targets<I>(paths: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    let mut targets = vec![];
    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            let found = discover(path)?;
            tracing::debug!(
                dir = %path.display(),
                count = found.len(),
                "discovered JUnit reports"
            );
            targets.extend(found);
        } else {
            targets.push(path.to_path_buf());
        }
    }
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn files_are_kept_as_given() {
        let targets = expand_targets(["b.junit", "a.junit"]).unwrap();
        assert_eq!(targets, [PathBuf::from("b.junit"), PathBuf::from("a.junit")]);
    }

    #[test]
    fn directory_is_replaced_by_its_reports() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1.junit"), "<testsuite/>").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let targets = expand_targets([Path::new("first.junit"), dir.path()]).unwrap();
        assert_eq!(
            targets,
            [
                PathBuf::from("first.junit"),
                dir.path().canonicalize().unwrap().join("1.junit"),
            ],
        );
    }
}
