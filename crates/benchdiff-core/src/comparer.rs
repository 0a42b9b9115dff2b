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

//! The comparison pipeline.

use crate::comparison::ComparerReport;
use crate::evaluator::evaluate_thresholds;
use crate::matcher::{equivalent, match_benchmarks};
use crate::model::Report;
use crate::threshold::Thresholds;
use crate::validator::validate_host_environment;
use tracing::{debug, info};

/// Compares baseline reports against target reports.
///
/// Each baseline report is validated against the target report with the
/// same file name. Benchmark entries of every report on one side are then
/// pooled and matched, and the thresholds are evaluated over the kept
/// comparisons.
///
/// # Examples
///
/// ```
/// use benchdiff_core::{compare_reports, BenchmarkEntry, Report, Thresholds};
/// use rust_decimal_macros::dec;
///
/// let baseline = Report {
///     benchmarks: Some(vec![BenchmarkEntry::new("Bench.Run", "Bench", "Run").with_mean(dec!(50))]),
///     ..Report::default()
/// };
/// let target = Report {
///     benchmarks: Some(vec![BenchmarkEntry::new("Bench.Run", "Bench", "Run").with_mean(dec!(25))]),
///     ..Report::default()
/// };
///
/// let report = compare_reports(&[baseline], &[target], &Thresholds::default());
/// let mean = report.comparisons()[0].mean.as_ref().unwrap();
/// assert_eq!(mean.diff_percentage(), Some(dec!(-50)));
/// ```
pub fn compare_reports(
    baseline: &[Report],
    target: &[Report],
    thresholds: &Thresholds,
) -> ComparerReport {
    let mut report = ComparerReport::new();

    for baseline_report in baseline {
        let target_report = target.iter().find(|t| {
            equivalent(t.file_name.as_deref(), baseline_report.file_name.as_deref())
        });
        report
            .warnings
            .extend(validate_host_environment(Some(baseline_report), target_report));
    }
    if report.has_warnings() {
        debug!(count = report.warnings.len(), "Host environment warnings");
    }

    let comparisons = match_benchmarks(
        baseline.iter().flat_map(Report::benchmarks),
        target.iter().flat_map(Report::benchmarks),
    );
    let total = comparisons.len();
    for comparison in comparisons {
        report.add(comparison);
    }
    debug!(
        kept = report.comparisons().len(),
        dropped = total - report.comparisons().len(),
        "Built comparisons"
    );

    report.hit_thresholds = evaluate_thresholds(report.comparisons(), thresholds);

    info!(
        warnings = report.warnings.len(),
        comparisons = report.comparisons().len(),
        hits = report.hit_thresholds.len(),
        "Comparison finished"
    );
    report
}
