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

//! Comparison results.
//!
//! A [`ComparerReport`] is produced by one comparison pass and then handed,
//! read-only, to the exporters.

use crate::metric::MetricComparison;
use crate::model::BenchmarkEntry;
use serde::Serialize;

/// Metric deltas for one benchmark, matched or present on a single side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Comparison {
    /// Declaring benchmark type.
    #[serde(rename = "Type")]
    pub type_name: Option<String>,
    /// Benchmark method name.
    pub name: Option<String>,
    /// Key the entries were matched on.
    pub full_name: Option<String>,
    /// Mean execution time delta.
    pub mean: Option<MetricComparison>,
    /// Bytes allocated per operation delta.
    pub allocated: Option<MetricComparison>,
    /// Gen 0 collections per 1000 operations.
    pub gen0_collections: Option<MetricComparison>,
    /// Gen 1 collections per 1000 operations.
    pub gen1_collections: Option<MetricComparison>,
    /// Gen 2 collections per 1000 operations.
    pub gen2_collections: Option<MetricComparison>,
}

impl Comparison {
    /// Builds the comparison of two entries.
    ///
    /// Identity fields come from the baseline when present, otherwise from
    /// the target. Returns `None` when both sides are absent.
    pub fn from_entries(
        baseline: Option<&BenchmarkEntry>,
        target: Option<&BenchmarkEntry>,
    ) -> Option<Self> {
        let identity = baseline.or(target)?;

        let collections = |generation: u8| {
            MetricComparison::garbage_collections(
                baseline.and_then(|b| b.collections(generation)),
                baseline.and_then(BenchmarkEntry::total_operations),
                target.and_then(|t| t.collections(generation)),
                target.and_then(BenchmarkEntry::total_operations),
            )
        };

        Some(Self {
            type_name: identity.type_name.clone(),
            name: identity.method.clone(),
            full_name: identity.full_name.clone(),
            mean: MetricComparison::execution_time(
                baseline.and_then(BenchmarkEntry::mean),
                target.and_then(BenchmarkEntry::mean),
            ),
            allocated: MetricComparison::memory_usage(
                baseline.and_then(BenchmarkEntry::allocated),
                target.and_then(BenchmarkEntry::allocated),
            ),
            gen0_collections: collections(0),
            gen1_collections: collections(1),
            gen2_collections: collections(2),
        })
    }

    /// GC metric for the given generation (0, 1 or 2).
    pub fn collections(&self, generation: u8) -> Option<&MetricComparison> {
        match generation {
            0 => self.gen0_collections.as_ref(),
            1 => self.gen1_collections.as_ref(),
            2 => self.gen2_collections.as_ref(),
            _ => None,
        }
    }

    /// Only comparisons with a mean or an allocation delta are kept in a
    /// report. GC metrics alone do not qualify.
    pub fn is_reportable(&self) -> bool {
        self.mean.is_some() || self.allocated.is_some()
    }
}

/// Outcome of one comparison pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComparerReport {
    /// Host environment mismatches, in report order.
    pub warnings: Vec<String>,
    pub(crate) comparisons: Vec<Comparison>,
    /// Threshold violation messages, mean hits before allocation hits.
    pub hit_thresholds: Vec<String>,
}

impl ComparerReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a comparison, dropping it when it is not reportable.
    ///
    /// Returns whether the comparison was kept.
    pub fn add(&mut self, comparison: Comparison) -> bool {
        if !comparison.is_reportable() {
            return false;
        }
        self.comparisons.push(comparison);
        true
    }

    /// Comparisons in insertion order.
    pub fn comparisons(&self) -> &[Comparison] {
        &self.comparisons
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn has_hit_thresholds(&self) -> bool {
        !self.hit_thresholds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::ComparisonStatus;
    use crate::model::MemoryStats;
    use rust_decimal_macros::dec;

    #[test]
    fn test_identity_from_baseline() {
        let baseline = BenchmarkEntry::new("Ns.Bmk.Run", "Bmk", "Run").with_mean(dec!(10));
        let target = BenchmarkEntry::new("NS.BMK.RUN", "Other", "Other").with_mean(dec!(12));

        let comparison = Comparison::from_entries(Some(&baseline), Some(&target)).unwrap();
        assert_eq!(comparison.type_name.as_deref(), Some("Bmk"));
        assert_eq!(comparison.name.as_deref(), Some("Run"));
        assert_eq!(comparison.full_name.as_deref(), Some("Ns.Bmk.Run"));
        assert_eq!(comparison.mean.unwrap().status(), ComparisonStatus::Worse);
    }

    #[test]
    fn test_identity_from_target_only() {
        let target = BenchmarkEntry::new("Ns.Bmk.New", "Bmk", "New").with_mean(dec!(12));

        let comparison = Comparison::from_entries(None, Some(&target)).unwrap();
        assert_eq!(comparison.full_name.as_deref(), Some("Ns.Bmk.New"));
        assert_eq!(comparison.mean.unwrap().status(), ComparisonStatus::New);
        assert!(comparison.allocated.is_none());
    }

    #[test]
    fn test_no_sides() {
        assert!(Comparison::from_entries(None, None).is_none());
    }

    #[test]
    fn test_gc_rates_use_each_side_operations() {
        let baseline = BenchmarkEntry::new("A", "T", "A").with_memory(MemoryStats {
            gen0_collections: Some(5),
            total_operations: Some(1000),
            ..MemoryStats::default()
        });
        let target = BenchmarkEntry::new("A", "T", "A").with_memory(MemoryStats {
            gen0_collections: Some(5),
            total_operations: Some(2000),
            ..MemoryStats::default()
        });

        let comparison = Comparison::from_entries(Some(&baseline), Some(&target)).unwrap();
        let gen0 = comparison.collections(0).unwrap();
        assert_eq!(gen0.baseline(), Some(dec!(5)));
        assert_eq!(gen0.target(), Some(dec!(2.5)));
        assert_eq!(gen0.status(), ComparisonStatus::Better);
        assert!(comparison.collections(1).is_none());
        assert!(comparison.collections(3).is_none());
    }

    #[test]
    fn test_report_drops_gc_only_comparison() {
        let entry = BenchmarkEntry::new("A", "T", "A").with_memory(MemoryStats {
            gen0_collections: Some(1),
            total_operations: Some(10),
            ..MemoryStats::default()
        });
        let comparison = Comparison::from_entries(Some(&entry), None).unwrap();
        assert!(comparison.gen0_collections.is_some());
        assert!(!comparison.is_reportable());

        let mut report = ComparerReport::new();
        assert!(!report.add(comparison));
        assert!(report.comparisons().is_empty());
    }

    #[test]
    fn test_report_keeps_allocation_only_comparison() {
        let entry = BenchmarkEntry::new("A", "T", "A").with_memory(MemoryStats::allocated(64));
        let mut report = ComparerReport::new();
        assert!(report.add(Comparison::from_entries(None, Some(&entry)).unwrap()));
        assert_eq!(report.comparisons().len(), 1);
    }

    #[test]
    fn test_empty_report_json_keys() {
        let json = serde_json::to_value(ComparerReport::new()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "Warnings": [], "Comparisons": [], "HitThresholds": [] })
        );
    }

    #[test]
    fn test_comparison_json_keys() {
        let entry = BenchmarkEntry::new("Ns.Bmk.Run", "Bmk", "Run").with_mean(dec!(12));
        let comparison = Comparison::from_entries(Some(&entry), None).unwrap();
        let json = serde_json::to_value(&comparison).unwrap();

        assert_eq!(json["Type"], "Bmk");
        assert_eq!(json["Name"], "Run");
        assert_eq!(json["FullName"], "Ns.Bmk.Run");
        assert_eq!(json["Mean"]["Unit"], "ns");
        assert_eq!(json["Mean"]["Status"], "Removed");
        assert!(json["Gen0Collections"].is_null());
    }
}
