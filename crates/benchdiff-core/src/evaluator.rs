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

//! Threshold evaluation over finished comparisons.

use crate::comparison::Comparison;
use crate::metric::MetricComparison;
use crate::threshold::{Threshold, Thresholds};
use tracing::info;

/// Returns one message per comparison whose delta exceeds a threshold.
///
/// All mean hits come first, then all allocation hits, each group in
/// comparison order.
pub fn evaluate_thresholds(comparisons: &[Comparison], thresholds: &Thresholds) -> Vec<String> {
    let mut hits = Vec::new();

    if let Some(threshold) = &thresholds.mean {
        collect_hits(comparisons, threshold, "Mean", |c| c.mean.as_ref(), &mut hits);
    }
    if let Some(threshold) = &thresholds.allocation {
        collect_hits(
            comparisons,
            threshold,
            "Allocation",
            |c| c.allocated.as_ref(),
            &mut hits,
        );
    }

    hits
}

fn collect_hits<F>(
    comparisons: &[Comparison],
    threshold: &Threshold,
    label: &str,
    metric: F,
    hits: &mut Vec<String>,
) where
    F: Fn(&Comparison) -> Option<&MetricComparison>,
{
    for comparison in comparisons {
        let exceeded = metric(comparison)
            .is_some_and(|m| threshold.is_exceeded_by(m.diff(), m.diff_percentage()));
        if exceeded {
            let full_name = comparison.full_name.as_deref().unwrap_or_default();
            info!(threshold = %threshold, benchmark = full_name, "{} threshold hit", label);
            hits.push(format!("{} threshold hit for '{}'", label, full_name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BenchmarkEntry, MemoryStats};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn comparison(name: &str, baseline: (Decimal, i64), target: (Decimal, i64)) -> Comparison {
        let b = BenchmarkEntry::new(name, "Bmk", name)
            .with_mean(baseline.0)
            .with_memory(MemoryStats::allocated(baseline.1));
        let t = BenchmarkEntry::new(name, "Bmk", name)
            .with_mean(target.0)
            .with_memory(MemoryStats::allocated(target.1));
        Comparison::from_entries(Some(&b), Some(&t)).unwrap()
    }

    #[test]
    fn test_no_thresholds_no_hits() {
        let comparisons = vec![comparison("A", (dec!(1), 1), (dec!(100), 100))];
        assert!(evaluate_thresholds(&comparisons, &Thresholds::default()).is_empty());
    }

    #[test]
    fn test_percentage_thresholds_hit_both() {
        let comparisons = vec![comparison("Bench.Run", (dec!(12), 120), (dec!(1200), 120_000))];
        let thresholds = Thresholds::parse(Some("10%"), Some("11%")).unwrap();

        let hits = evaluate_thresholds(&comparisons, &thresholds);
        assert_eq!(
            hits,
            vec![
                "Mean threshold hit for 'Bench.Run'",
                "Allocation threshold hit for 'Bench.Run'",
            ]
        );
    }

    #[test]
    fn test_absolute_threshold_is_strict() {
        let comparisons = vec![
            comparison("Equal", (dec!(100), 10), (dec!(110), 10)),
            comparison("Over", (dec!(100), 10), (dec!(111), 10)),
        ];
        let thresholds = Thresholds::parse(Some("10ns"), None).unwrap();

        let hits = evaluate_thresholds(&comparisons, &thresholds);
        assert_eq!(hits, vec!["Mean threshold hit for 'Over'"]);
    }

    #[test]
    fn test_mean_hits_before_allocation_hits() {
        let comparisons = vec![
            comparison("A", (dec!(10), 10), (dec!(20), 20)),
            comparison("B", (dec!(10), 10), (dec!(20), 20)),
        ];
        let thresholds = Thresholds::parse(Some("1ns"), Some("1b")).unwrap();

        let hits = evaluate_thresholds(&comparisons, &thresholds);
        assert_eq!(
            hits,
            vec![
                "Mean threshold hit for 'A'",
                "Mean threshold hit for 'B'",
                "Allocation threshold hit for 'A'",
                "Allocation threshold hit for 'B'",
            ]
        );
    }

    #[test]
    fn test_zero_baseline_never_hits_percentage() {
        let comparisons = vec![comparison("Zero", (dec!(0), 0), (dec!(50), 50))];
        let thresholds = Thresholds::parse(Some("1%"), Some("1%")).unwrap();
        assert!(evaluate_thresholds(&comparisons, &thresholds).is_empty());
    }

    #[test]
    fn test_improvements_never_hit() {
        let comparisons = vec![comparison("Faster", (dec!(100), 100), (dec!(10), 10))];
        let thresholds = Thresholds::parse(Some("1ns"), Some("1%")).unwrap();
        assert!(evaluate_thresholds(&comparisons, &thresholds).is_empty());
    }
}
