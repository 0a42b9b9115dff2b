// Benchdiff - Benchmark report comparison toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI command definitions and argument parsing.
//!
//! # Organization
//!
//! - [`compare`]: the `compare` command and its options

mod compare;

use crate::commands::{self, CompareOutcome};
use crate::error::CliError;
use clap::Subcommand;

pub use compare::CompareArgs;

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use benchdiff_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two sets of BenchmarkDotNet reports and produce a diff report
    ///
    /// Pairs benchmarks by full name, reports mean time, allocation and GC
    /// deltas, warns about host environment differences and checks the
    /// optional thresholds.
    Compare(CompareArgs),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` when inputs cannot be found or parsed, a threshold is
    /// malformed, or an export cannot be written.
    pub fn execute(self) -> Result<CompareOutcome, CliError> {
        match self {
            Commands::Compare(args) => commands::compare(&args.into()),
        }
    }
}
