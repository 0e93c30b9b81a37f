// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI (command line interface) of the `junit-composer` binary.

use std::{
    fs,
    io::{self, Write as _},
    path::PathBuf,
};

use tracing::level_filters::LevelFilter;

use crate::{
    build::Mode,
    compose,
    discover::expand_targets,
    error::{ComposeError, Result},
};

/// Composes JUnit XML reports into a single one.
#[derive(Clone, Debug, Default, clap::Parser)]
#[command(name = "junit-composer", version, about, long_about = None)]
pub struct Cli {
    /// JUnit report files, or directories to scan for `*.junit*` files.
    #[arg(value_name = "TARGET")]
    pub targets: Vec<PathBuf>,

    /// Shape of the composed report.
    ///
    /// `suites` wraps the original `<testsuite>`s into a `<testsuites>`,
    /// `cases` flattens all `<testcase>`s into a single `<testsuite>`.
    #[arg(short, long, value_enum, default_value_t = Mode::Suites)]
    pub mode: Mode,

    /// File to write the composed report into, instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Increases logging verbosity (`-v` info, `-vv` debug, `-vvv` trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Converts CLI verbosity setting to a [`LevelFilter`].
    #[must_use]
    pub const fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Composes the targets of this [`Cli`] and writes the report followed by
    /// a line break.
    ///
    /// # Errors
    ///
    /// If composing fails, or the report can't be written. Nothing is written
    /// in the former case.
    pub fn run(&self) -> Result<()> {
        let targets = expand_targets(&self.targets)?;
        let report = compose(self.mode, &targets)?;

        match &self.output {
            Some(path) => fs::write(path, format!("{report}\n"))
                .map_err(|e| ComposeError::io(path.to_string_lossy(), e)),
            None => writeln!(io::stdout().lock(), "{report}")
                .map_err(|e| ComposeError::io("<stdout>", e)),
        }
    }
}
