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

//! Plain text report for the terminal.

use super::{target_cell, CONSOLE_RULE_WIDTH, SECTION_RULE_WIDTH};
use crate::comparison::{Comparison, ComparerReport};
use crate::error::Result;
use crate::format::{beautify_memory, beautify_time};
use crate::table::TableBuilder;

const TITLE_INDENT: usize = 24;

/// Renders the report as console text.
///
/// # Errors
///
/// Only fails on a table layout error, which the fixed column set rules out
/// in practice.
pub fn render(report: &ComparerReport) -> Result<String> {
    let banner = "═".repeat(CONSOLE_RULE_WIDTH);
    let section_rule = ".".repeat(SECTION_RULE_WIDTH);
    let mut out = String::new();

    out.push('\n');
    out.push_str(&banner);
    out.push('\n');
    out.push_str(&" ".repeat(TITLE_INDENT));
    out.push_str("BENCHMARK COMPARISON REPORT\n");
    out.push_str(&banner);
    out.push_str("\n\n");

    if report.has_warnings() {
        out.push_str("⚠️ WARNINGS:\n\n");
        for warning in &report.warnings {
            out.push_str(&format!("   • {}\n", warning));
        }
        out.push('\n');
        out.push_str(&section_rule);
        out.push_str("\n\n");
    }

    out.push_str("📊 RESULTS:\n\n");

    if report.comparisons().is_empty() {
        out.push_str("   No comparisons found.\n");
    } else {
        for row in results_table(report.comparisons())?.build() {
            let last = row.len().saturating_sub(1);
            for (i, cell) in row.iter().enumerate() {
                out.push_str(if i == last { cell.trim_end() } else { cell });
            }
            out.push('\n');
        }
    }

    if report.has_hit_thresholds() {
        out.push('\n');
        out.push_str(&section_rule);
        out.push_str("\n\n");
        out.push_str("🚨 THRESHOLD VIOLATIONS:\n\n");
        for hit in &report.hit_thresholds {
            out.push_str(&format!("   • {}\n", hit));
        }
    }

    out.push('\n');
    out.push_str(&banner);
    out.push('\n');
    Ok(out)
}

fn results_table(comparisons: &[Comparison]) -> Result<TableBuilder> {
    let mut table = TableBuilder::new();
    table.add_header(["Report", "Type", "Method", "Mean", "Allocated"])?;

    for comparison in comparisons {
        let mean = comparison.mean.as_ref();
        let allocated = comparison.allocated.as_ref();

        table.add_row([
            Some("Baseline".to_string()),
            comparison.type_name.clone(),
            comparison.name.clone(),
            Some(beautify_time(mean.and_then(|m| m.baseline()))),
            Some(beautify_memory(allocated.and_then(|m| m.baseline()))),
        ])?;
        table.add_row([
            Some("Target".to_string()),
            None,
            mean.and_then(|m| m.status().presence_label()),
            target_cell(mean, |m| beautify_time(m.target())),
            target_cell(allocated, |m| beautify_memory(m.target())),
        ])?;
    }

    Ok(table)
}
