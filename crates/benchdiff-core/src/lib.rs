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

//! Benchmark report comparison engine.
//!
//! Compares a baseline set of benchmark reports against a target set and
//! produces a [`ComparerReport`]: per benchmark timing, allocation and GC
//! deltas, host environment warnings, and threshold violations.
//!
//! # Pipeline
//!
//! - **validator**: host environment checks between paired reports
//! - **matcher**: pairs benchmark entries by full name
//! - **metric**: baseline/target deltas, including GC rates per 1000 operations
//! - **threshold** and **evaluator**: parse user thresholds and record hits
//! - **exporters**: console, Markdown, JSON and hit list renderings
//!
//! `format` and `table` hold the unit formatting and column layout used by
//! the text exporters.
//!
//! # Examples
//!
//! ```
//! use benchdiff_core::{compare_reports, BenchmarkEntry, ExportFormat, MemoryStats, Report, Thresholds};
//! use rust_decimal_macros::dec;
//!
//! # fn main() -> benchdiff_core::Result<()> {
//! let baseline = Report {
//!     benchmarks: Some(vec![BenchmarkEntry::new("Parser.Parse", "Parser", "Parse")
//!         .with_mean(dec!(12))
//!         .with_memory(MemoryStats::allocated(120))]),
//!     ..Report::default()
//! };
//! let target = Report {
//!     benchmarks: Some(vec![BenchmarkEntry::new("Parser.Parse", "Parser", "Parse")
//!         .with_mean(dec!(1200))
//!         .with_memory(MemoryStats::allocated(120_000))]),
//!     ..Report::default()
//! };
//!
//! let thresholds = Thresholds::parse(Some("10%"), Some("11%"))?;
//! let report = compare_reports(&[baseline], &[target], &thresholds);
//! assert_eq!(report.hit_thresholds.len(), 2);
//!
//! let console = ExportFormat::Console.render(&report)?;
//! assert!(console.unwrap().contains("1.2 μs (9,900%)"));
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Fallible operations return [`Result`] with a [`ComparerError`]. Host
//! environment mismatches and threshold hits are data on the report, not
//! errors.

pub mod comparer;
pub mod comparison;
pub mod error;
pub mod evaluator;
pub mod exporters;
pub mod format;
pub mod matcher;
pub mod metric;
pub mod model;
pub mod table;
pub mod threshold;
pub mod validator;

pub use comparer::compare_reports;
pub use comparison::{Comparison, ComparerReport};
pub use error::{ComparerError, Result};
pub use exporters::{Destination, ExportFormat};
pub use metric::{ComparisonStatus, MetricComparison};
pub use model::{BenchmarkEntry, HostEnvironment, MemoryStats, Report};
pub use threshold::{Threshold, ThresholdKind, Thresholds};
