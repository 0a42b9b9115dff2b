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

//! benchdiff CLI library.
//!
//! Wires the comparison engine from `benchdiff-core` to the command line:
//! argument parsing, report discovery and loading, export writing and exit
//! codes.
//!
//! # Commands
//!
//! - **compare**: compare baseline reports against target reports
//!
//! # Examples
//!
//! ```no_run
//! use benchdiff_cli::commands::{compare, CompareOptions};
//! use benchdiff_core::ExportFormat;
//!
//! # fn main() -> Result<(), benchdiff_cli::error::CliError> {
//! let outcome = compare(&CompareOptions {
//!     baseline: "artifacts/main".to_string(),
//!     target: "artifacts/pr".to_string(),
//!     threshold_mean: Some("5%".to_string()),
//!     threshold_allocation: None,
//!     formats: vec![ExportFormat::Console, ExportFormat::Markdown],
//!     output: "./BenchmarkReporter".into(),
//!     fail_on_warnings: false,
//!     fail_on_threshold_hit: true,
//! })?;
//! std::process::exit(outcome.exit_code().into());
//! # }
//! ```
//!
//! # Exit Codes
//!
//! - `0`: success
//! - `1`: fatal error (missing input, invalid report, invalid threshold, write failure)
//! - `2`: warnings present with `--fail-on-warnings`
//! - `3`: thresholds hit with `--fail-on-threshold-hit`
//!
//! # Security
//!
//! - **File size limits**: reports larger than `BENCHDIFF_MAX_FILE_SIZE`
//!   bytes (default 1 GB) are rejected before reading

pub mod cli;
pub mod commands;
pub mod error;
pub mod io;
