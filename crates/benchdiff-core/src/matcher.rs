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

//! Pairing of baseline and target benchmark entries.

use crate::comparison::Comparison;
use crate::model::BenchmarkEntry;
use tracing::debug;

/// Case-insensitive equality where two absent values are equal and an
/// absent value never equals a present one.
///
/// # Examples
///
/// ```
/// use benchdiff_core::matcher::equivalent;
///
/// assert!(equivalent(Some("Bench.Run"), Some("BENCH.run")));
/// assert!(equivalent(None, None));
/// assert!(!equivalent(Some("Bench.Run"), None));
/// ```
pub fn equivalent(left: Option<&str>, right: Option<&str>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => {
            left.eq_ignore_ascii_case(right) || left.to_lowercase() == right.to_lowercase()
        }
        _ => false,
    }
}

/// Pairs baseline entries with target entries by full name.
///
/// Baseline entries keep their order and each one consumes at most one
/// target entry (the first equivalent one still unmatched). Target entries
/// left over are appended afterwards in their original order, so the result
/// holds one comparison per baseline entry plus one per unmatched target.
pub fn match_benchmarks<'a, B, T>(baseline: B, target: T) -> Vec<Comparison>
where
    B: IntoIterator<Item = &'a BenchmarkEntry>,
    T: IntoIterator<Item = &'a BenchmarkEntry>,
{
    let mut remaining: Vec<&BenchmarkEntry> = target.into_iter().collect();
    let mut comparisons = Vec::with_capacity(remaining.len());
    let mut matched = 0usize;

    for entry in baseline {
        let position = remaining
            .iter()
            .position(|t| equivalent(t.full_name.as_deref(), entry.full_name.as_deref()));
        let counterpart = position.map(|index| remaining.remove(index));
        if counterpart.is_some() {
            matched += 1;
        }

        comparisons.extend(Comparison::from_entries(Some(entry), counterpart));
    }

    debug!(
        matched,
        baseline_only = comparisons.len() - matched,
        target_only = remaining.len(),
        "Matched benchmark entries"
    );

    comparisons.extend(
        remaining
            .into_iter()
            .filter_map(|entry| Comparison::from_entries(None, Some(entry))),
    );
    comparisons
}
