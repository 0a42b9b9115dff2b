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

//! Flat list of warnings and threshold hits.

use crate::comparison::ComparerReport;

/// Renders each warning, then each hit, one per line.
///
/// Returns `None` when the report has neither.
pub fn render(report: &ComparerReport) -> Option<String> {
    let lines: Vec<&String> = report
        .warnings
        .iter()
        .chain(&report.hit_thresholds)
        .collect();
    if lines.is_empty() {
        return None;
    }

    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    Some(out)
}
