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

//! Markdown report.

use super::target_cell;
use crate::comparison::{Comparison, ComparerReport};
use crate::format::{beautify_memory, beautify_time};
use crate::metric::MetricComparison;
use crate::table::{pad_left, pad_right};
use rust_decimal::Decimal;

const INDENT: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alignment {
    Left,
    Right,
}

struct Column {
    header: &'static str,
    alignment: Alignment,
    cells: Vec<String>,
}

impl Column {
    fn new(header: &'static str, alignment: Alignment) -> Self {
        Self {
            header,
            alignment,
            cells: Vec::new(),
        }
    }

    fn width(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| cell.chars().count())
            .chain(std::iter::once(self.header.chars().count()))
            .max()
            .unwrap_or_default()
    }

    fn pad(&self, text: &str, width: usize) -> String {
        match self.alignment {
            Alignment::Left => pad_right(text, width),
            Alignment::Right => pad_left(text, width),
        }
    }
}

/// Renders the report as a Markdown document.
pub fn render(report: &ComparerReport) -> String {
    let mut md = String::new();

    md.push_str("# BENCHMARK COMPARISON REPORT\n\n");

    if report.has_warnings() {
        md.push_str("## ⚠️ WARNINGS:\n\n");
        for warning in &report.warnings {
            md.push_str(&format!("{}* {}\n", INDENT, warning));
        }
        md.push_str("\n\n");
    }

    md.push_str("## 📊 RESULTS:\n\n");

    if report.comparisons().is_empty() {
        md.push_str(INDENT);
        md.push_str("NO COMPARISONS FOUND.");
    } else {
        md.push_str(&results_table(report.comparisons()));
    }

    if report.has_hit_thresholds() {
        let mut hits: Vec<&String> = report.hit_thresholds.iter().collect();
        hits.sort();

        md.push_str("\n\n## 🚨 THRESHOLD VIOLATIONS:\n\n");
        for hit in hits {
            md.push_str(&format!("{}* {};\n", INDENT, hit));
        }
    }

    md
}

fn results_table(comparisons: &[Comparison]) -> String {
    let mut report = Column::new("Report", Alignment::Left);
    let mut type_name = Column::new("Type", Alignment::Left);
    let mut method = Column::new("Method", Alignment::Left);
    let mut mean = Column::new("Mean", Alignment::Right);
    let mut allocated = Column::new("Allocated", Alignment::Right);

    let mut collections: Vec<(u8, Column)> = [(0, "Gen0"), (1, "Gen1"), (2, "Gen2")]
        .into_iter()
        .filter(|(generation, _)| comparisons.iter().any(|c| c.collections(*generation).is_some()))
        .map(|(generation, header)| (generation, Column::new(header, Alignment::Right)))
        .collect();

    for comparison in comparisons {
        let mean_metric = comparison.mean.as_ref();
        let allocated_metric = comparison.allocated.as_ref();

        report.cells.push("Baseline".to_string());
        type_name
            .cells
            .push(comparison.type_name.clone().unwrap_or_default());
        method.cells.push(comparison.name.clone().unwrap_or_default());
        mean.cells
            .push(beautify_time(mean_metric.and_then(MetricComparison::baseline)));
        allocated
            .cells
            .push(beautify_memory(allocated_metric.and_then(MetricComparison::baseline)));
        for (generation, column) in &mut collections {
            let rate = comparison
                .collections(*generation)
                .and_then(MetricComparison::baseline);
            column.cells.push(display_rate(rate));
        }

        report.cells.push("Target".to_string());
        type_name.cells.push(String::new());
        method.cells.push(
            mean_metric
                .and_then(|m| m.status().presence_label())
                .unwrap_or_default(),
        );
        mean.cells.push(
            target_cell(mean_metric, |m| beautify_time(m.target())).unwrap_or_default(),
        );
        allocated.cells.push(
            target_cell(allocated_metric, |m| beautify_memory(m.target())).unwrap_or_default(),
        );
        for (generation, column) in &mut collections {
            let cell = target_cell(comparison.collections(*generation), |m| display_rate(m.target()));
            column.cells.push(cell.unwrap_or_default());
        }
    }

    let mut columns = vec![report, type_name, method, mean];
    columns.extend(collections.into_iter().map(|(_, column)| column));
    columns.push(allocated);

    layout(&columns)
}

fn display_rate(rate: Option<Decimal>) -> String {
    rate.map(|r| r.normalize().to_string()).unwrap_or_default()
}

fn layout(columns: &[Column]) -> String {
    let widths: Vec<usize> = columns.iter().map(Column::width).collect();
    let rows = columns.first().map_or(0, |c| c.cells.len());
    let last = columns.len().saturating_sub(1);

    let line = |cells: Vec<String>| -> String {
        let joined = cells
            .into_iter()
            .enumerate()
            .map(|(i, cell)| {
                if i == last {
                    format!(" {}", cell)
                } else {
                    format!(" {} ", cell)
                }
            })
            .collect::<Vec<_>>()
            .join("|");
        format!("{}{}\n", INDENT, joined)
    };

    let mut table = String::new();
    table.push_str(&line(
        columns
            .iter()
            .zip(&widths)
            .map(|(column, &width)| column.pad(column.header, width))
            .collect(),
    ));

    let separator = columns
        .iter()
        .zip(&widths)
        .enumerate()
        .map(|(i, (column, &width))| {
            let dashes = "-".repeat(width);
            match column.alignment {
                Alignment::Right => format!(" {}:", dashes),
                Alignment::Left if i == last => format!(" {}", dashes),
                Alignment::Left => format!(" {} ", dashes),
            }
        })
        .collect::<Vec<_>>()
        .join("|");
    table.push_str(INDENT);
    table.push_str(&separator);
    table.push('\n');

    for row in 0..rows {
        table.push_str(&line(
            columns
                .iter()
                .zip(&widths)
                .map(|(column, &width)| column.pad(&column.cells[row], width))
                .collect(),
        ));
    }

    table
}
