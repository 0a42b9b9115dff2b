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

//! Metric deltas between a baseline and a target value.
//!
//! Every metric follows "lower is better": a positive difference means the
//! target regressed. Values and differences are exact decimals; only the
//! percentage is scaled in floating point and brought back to fifteen
//! significant digits. A [`MetricComparison`] is only built through the
//! constructors below and is immutable afterwards.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// Unit reported for execution time metrics.
pub const UNIT_EXECUTION_TIME: &str = "ns";

/// Unit reported for memory usage metrics.
pub const UNIT_MEMORY_USAGE: &str = "B";

/// Significant digits kept when a percentage comes back from floating point.
const PERCENTAGE_SIGNIFICANT_DIGITS: u32 = 15;

/// Classification of a metric delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComparisonStatus {
    /// Only the target has a value.
    New,
    /// Only the baseline has a value.
    Removed,
    /// Both values are identical.
    Equal,
    /// The target is lower than the baseline.
    Better,
    /// The target is higher than the baseline.
    Worse,
}

impl ComparisonStatus {
    /// Returns the status name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonStatus::New => "New",
            ComparisonStatus::Removed => "Removed",
            ComparisonStatus::Equal => "Equal",
            ComparisonStatus::Better => "Better",
            ComparisonStatus::Worse => "Worse",
        }
    }

    /// Bracketed label shown for entries present on only one side.
    pub fn presence_label(&self) -> Option<String> {
        match self {
            ComparisonStatus::New | ComparisonStatus::Removed => {
                Some(format!("[{}]", self.as_str().to_uppercase()))
            }
            _ => None,
        }
    }

    /// Returns true when both sides had a value and they differ.
    pub fn is_change(&self) -> bool {
        matches!(self, ComparisonStatus::Better | ComparisonStatus::Worse)
    }
}

/// Baseline/target delta for one numeric metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricComparison {
    unit: Option<String>,
    #[serde(serialize_with = "json_number")]
    baseline: Option<Decimal>,
    #[serde(serialize_with = "json_number")]
    target: Option<Decimal>,
    #[serde(serialize_with = "json_number")]
    diff: Option<Decimal>,
    #[serde(serialize_with = "json_number")]
    diff_percentage: Option<Decimal>,
    status: ComparisonStatus,
}

impl MetricComparison {
    /// Compares two optional values.
    ///
    /// Returns `None` when neither side has a value. `diff` is only set when
    /// both sides are present, and `diff_percentage` additionally requires a
    /// non-zero baseline.
    pub fn compare(
        baseline: Option<Decimal>,
        target: Option<Decimal>,
        unit: Option<&str>,
    ) -> Option<Self> {
        let (diff, diff_percentage, status) = match (baseline, target) {
            (None, None) => return None,
            (None, Some(_)) => (None, None, ComparisonStatus::New),
            (Some(_), None) => (None, None, ComparisonStatus::Removed),
            (Some(baseline), Some(target)) => {
                let diff = target - baseline;
                let status = if diff.is_zero() {
                    ComparisonStatus::Equal
                } else if diff.is_sign_positive() {
                    ComparisonStatus::Worse
                } else {
                    ComparisonStatus::Better
                };
                (Some(diff), percentage(diff, baseline), status)
            }
        };

        Some(Self {
            unit: unit.map(str::to_string),
            baseline,
            target,
            diff,
            diff_percentage,
            status,
        })
    }

    /// Compares mean execution times in nanoseconds.
    pub fn execution_time(baseline: Option<Decimal>, target: Option<Decimal>) -> Option<Self> {
        Self::compare(baseline, target, Some(UNIT_EXECUTION_TIME))
    }

    /// Compares bytes allocated per operation.
    pub fn memory_usage(baseline: Option<Decimal>, target: Option<Decimal>) -> Option<Self> {
        Self::compare(baseline, target, Some(UNIT_MEMORY_USAGE))
    }

    /// Compares garbage collection counts as a rate per 1000 operations.
    ///
    /// Each side is normalized on its own; a side with a missing or
    /// non-positive count or operation total becomes `None`, so it reads as
    /// New/Removed rather than as a zero rate.
    pub fn garbage_collections(
        baseline_count: Option<Decimal>,
        baseline_operations: Option<Decimal>,
        target_count: Option<Decimal>,
        target_operations: Option<Decimal>,
    ) -> Option<Self> {
        Self::compare(
            collection_rate(baseline_count, baseline_operations),
            collection_rate(target_count, target_operations),
            None,
        )
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn baseline(&self) -> Option<Decimal> {
        self.baseline
    }

    pub fn target(&self) -> Option<Decimal> {
        self.target
    }

    /// `target - baseline`, when both sides are present.
    pub fn diff(&self) -> Option<Decimal> {
        self.diff
    }

    /// `diff / baseline * 100`, when both sides are present and the baseline is not zero.
    pub fn diff_percentage(&self) -> Option<Decimal> {
        self.diff_percentage
    }

    pub fn status(&self) -> ComparisonStatus {
        self.status
    }
}

/// `diff / baseline` in decimal, scaled to a percentage in floating point.
fn percentage(diff: Decimal, baseline: Decimal) -> Option<Decimal> {
    if baseline.is_zero() {
        return None;
    }
    let ratio = diff.checked_div(baseline)?.to_f64()?;
    Decimal::from_f64(ratio * 100.0)?
        .round_sf(PERCENTAGE_SIGNIFICANT_DIGITS)
        .map(|p| p.normalize())
}

/// Collections per 1000 operations.
fn collection_rate(count: Option<Decimal>, operations: Option<Decimal>) -> Option<Decimal> {
    match (count, operations) {
        (Some(count), Some(operations))
            if count > Decimal::ZERO && operations > Decimal::ZERO =>
        {
            (count * Decimal::ONE_THOUSAND).checked_div(operations)
        }
        _ => None,
    }
}

/// Writes a decimal as a JSON number: integral values without a fraction,
/// everything else through `f64`.
fn json_number<S: Serializer>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error> {
    let Some(value) = value else {
        return serializer.serialize_none();
    };
    match value.is_integer().then(|| value.to_i64()).flatten() {
        Some(integer) => serializer.serialize_i64(integer),
        None => match value.to_f64() {
            Some(float) => serializer.serialize_f64(float),
            None => serializer.serialize_none(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_both_absent_returns_none() {
        assert!(MetricComparison::compare(None, None, Some("ns")).is_none());
        assert!(MetricComparison::garbage_collections(None, None, None, None).is_none());
    }

    #[test]
    fn test_removed_when_only_baseline() {
        let metric = MetricComparison::execution_time(Some(dec!(12)), None).unwrap();
        assert_eq!(metric.status(), ComparisonStatus::Removed);
        assert_eq!(metric.unit(), Some("ns"));
        assert_eq!(metric.baseline(), Some(dec!(12)));
        assert_eq!(metric.diff(), None);
        assert_eq!(metric.diff_percentage(), None);
    }

    #[test]
    fn test_new_when_only_target() {
        let metric = MetricComparison::memory_usage(None, Some(dec!(37))).unwrap();
        assert_eq!(metric.status(), ComparisonStatus::New);
        assert_eq!(metric.unit(), Some("B"));
        assert_eq!(metric.target(), Some(dec!(37)));
        assert_eq!(metric.diff(), None);
    }

    #[test]
    fn test_better() {
        let metric = MetricComparison::execution_time(Some(dec!(50)), Some(dec!(25))).unwrap();
        assert_eq!(metric.diff(), Some(dec!(-25)));
        assert_eq!(metric.diff_percentage(), Some(dec!(-50)));
        assert_eq!(metric.status(), ComparisonStatus::Better);
    }

    #[test]
    fn test_worse() {
        let metric = MetricComparison::memory_usage(Some(dec!(100)), Some(dec!(150))).unwrap();
        assert_eq!(metric.diff(), Some(dec!(50)));
        assert_eq!(metric.diff_percentage(), Some(dec!(50)));
        assert_eq!(metric.status(), ComparisonStatus::Worse);
    }

    #[test]
    fn test_equal() {
        let metric = MetricComparison::execution_time(Some(dec!(12)), Some(dec!(12))).unwrap();
        assert_eq!(metric.diff(), Some(dec!(0)));
        assert_eq!(metric.diff_percentage(), Some(dec!(0)));
        assert_eq!(metric.status(), ComparisonStatus::Equal);
    }

    #[test]
    fn test_diff_is_exact_decimal() {
        let metric = MetricComparison::execution_time(Some(dec!(0.7)), Some(dec!(0.77))).unwrap();
        assert_eq!(metric.diff(), Some(dec!(0.07)));
        assert_eq!(metric.diff_percentage(), Some(dec!(10)));
        assert_eq!(metric.status(), ComparisonStatus::Worse);
    }

    #[test]
    fn test_percentage_keeps_fifteen_digits() {
        let metric = MetricComparison::execution_time(Some(dec!(3)), Some(dec!(4))).unwrap();
        assert_eq!(metric.diff_percentage(), Some(dec!(33.3333333333333)));
    }

    #[test]
    fn test_zero_baseline_has_no_percentage() {
        let metric = MetricComparison::memory_usage(Some(dec!(0)), Some(dec!(64))).unwrap();
        assert_eq!(metric.diff(), Some(dec!(64)));
        assert_eq!(metric.diff_percentage(), None);
        assert_eq!(metric.status(), ComparisonStatus::Worse);
    }

    #[test]
    fn test_gc_rate_normalization() {
        let metric = MetricComparison::garbage_collections(
            Some(dec!(5)),
            Some(dec!(100)),
            Some(dec!(10)),
            Some(dec!(400)),
        )
        .unwrap();
        assert_eq!(metric.unit(), None);
        assert_eq!(metric.baseline(), Some(dec!(50)));
        assert_eq!(metric.target(), Some(dec!(25)));
        assert_eq!(metric.status(), ComparisonStatus::Better);
    }

    #[test]
    fn test_gc_invalid_side_is_none_not_zero() {
        for operations in [None, Some(dec!(0)), Some(dec!(-3))] {
            let metric = MetricComparison::garbage_collections(
                Some(dec!(5)),
                operations,
                Some(dec!(4)),
                Some(dec!(100)),
            )
            .unwrap();
            assert_eq!(metric.baseline(), None);
            assert_eq!(metric.target(), Some(dec!(40)));
            assert_eq!(metric.status(), ComparisonStatus::New);
        }

        let metric = MetricComparison::garbage_collections(
            Some(dec!(5)),
            Some(dec!(100)),
            Some(dec!(0)),
            Some(dec!(100)),
        )
        .unwrap();
        assert_eq!(metric.status(), ComparisonStatus::Removed);
    }

    #[test]
    fn test_presence_label() {
        assert_eq!(ComparisonStatus::New.presence_label().as_deref(), Some("[NEW]"));
        assert_eq!(
            ComparisonStatus::Removed.presence_label().as_deref(),
            Some("[REMOVED]")
        );
        assert_eq!(ComparisonStatus::Worse.presence_label(), None);
    }

    #[test]
    fn test_serialized_shape() {
        let metric = MetricComparison::execution_time(Some(dec!(50)), Some(dec!(25))).unwrap();
        let json = serde_json::to_string(&metric).unwrap();
        assert_eq!(
            json,
            r#"{"Unit":"ns","Baseline":50,"Target":25,"Diff":-25,"DiffPercentage":-50,"Status":"Better"}"#
        );
    }

    #[test]
    fn test_serialized_fractions_and_absent_values() {
        let metric = MetricComparison::execution_time(Some(dec!(0.7)), None).unwrap();
        let json = serde_json::to_string(&metric).unwrap();
        assert_eq!(
            json,
            r#"{"Unit":"ns","Baseline":0.7,"Target":null,"Diff":null,"DiffPercentage":null,"Status":"Removed"}"#
        );
    }
}
