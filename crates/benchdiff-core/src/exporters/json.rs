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

//! JSON dump of the comparison report.

use crate::comparison::ComparerReport;
use crate::error::Result;

/// Serializes the whole report as pretty printed JSON.
pub fn render(report: &ComparerReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::Comparison;
    use crate::metric::MetricComparison;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_report() {
        let json = render(&ComparerReport::new()).unwrap();
        assert_eq!(
            json,
            "{\n  \"Warnings\": [],\n  \"Comparisons\": [],\n  \"HitThresholds\": []\n}"
        );
    }

    #[test]
    fn test_metric_fields() {
        let mut report = ComparerReport::new();
        report.add(Comparison {
            type_name: Some("Bmk".to_string()),
            name: Some("Run".to_string()),
            full_name: Some("Bmk.Run".to_string()),
            mean: MetricComparison::execution_time(Some(dec!(50)), Some(dec!(25))),
            ..Comparison::default()
        });
        report.hit_thresholds.push("Mean threshold hit for 'Bmk.Run'".to_string());

        let value: serde_json::Value = serde_json::from_str(&render(&report).unwrap()).unwrap();
        let mean = &value["Comparisons"][0]["Mean"];
        assert_eq!(mean["Unit"], "ns");
        assert_eq!(mean["Baseline"], 50);
        assert_eq!(mean["Target"], 25);
        assert_eq!(mean["Diff"], -25);
        assert_eq!(mean["DiffPercentage"], -50);
        assert_eq!(mean["Status"], "Better");
        assert!(value["Comparisons"][0]["Allocated"].is_null());
        assert_eq!(value["HitThresholds"][0], "Mean threshold hit for 'Bmk.Run'");
    }
}
