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

//! Report exporters.
//!
//! Every exporter renders a [`ComparerReport`] to text. The closed set of
//! formats is addressed by tag through [`ExportFormat`]; writing the text to
//! stdout or to a file is left to the caller.
//!
//! # Modules
//!
//! - `console`: banner, warnings, results table and violations for the terminal
//! - `markdown`: the same content as a Markdown document with a pipe table
//! - `json`: pretty printed dump of the whole report
//! - `hit_txt`: warnings and threshold hits, one per line

pub mod console;
pub mod hit_txt;
pub mod json;
pub mod markdown;

use crate::comparison::ComparerReport;
use crate::error::{ComparerError, Result};
use crate::format::beautify_percentage;
use crate::metric::MetricComparison;
use std::fmt;
use std::str::FromStr;

/// Width of the double rule framing the console report.
pub(crate) const CONSOLE_RULE_WIDTH: usize = 82;

/// Width of the dotted rule between console sections.
pub(crate) const SECTION_RULE_WIDTH: usize = 81;

/// Where rendered output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    /// A file with this name inside the output directory.
    File(&'static str),
}

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Console,
    Markdown,
    Json,
    HitTxt,
}

impl ExportFormat {
    /// Every format, in registry order.
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Console,
        ExportFormat::Markdown,
        ExportFormat::Json,
        ExportFormat::HitTxt,
    ];

    /// Tag used to select the format.
    pub fn tag(&self) -> &'static str {
        match self {
            ExportFormat::Console => "console",
            ExportFormat::Markdown => "markdown",
            ExportFormat::Json => "json",
            ExportFormat::HitTxt => "hit-txt",
        }
    }

    pub fn destination(&self) -> Destination {
        match self {
            ExportFormat::Console => Destination::Stdout,
            ExportFormat::Markdown => Destination::File("benchmark-comparison-report.md"),
            ExportFormat::Json => Destination::File("benchmark-comparison-report.json"),
            ExportFormat::HitTxt => Destination::File("benchmark-comparison-hits.txt"),
        }
    }

    /// Renders the report in this format.
    ///
    /// Returns `Ok(None)` when the format has nothing to emit for this report.
    pub fn render(&self, report: &ComparerReport) -> Result<Option<String>> {
        match self {
            ExportFormat::Console => console::render(report).map(Some),
            ExportFormat::Markdown => Ok(Some(markdown::render(report))),
            ExportFormat::Json => json::render(report).map(Some),
            ExportFormat::HitTxt => Ok(hit_txt::render(report)),
        }
    }

    /// Comma separated list of every tag.
    pub fn allowed_tags() -> String {
        Self::ALL
            .iter()
            .map(ExportFormat::tag)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for ExportFormat {
    type Err = ComparerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| ComparerError::UnknownFormat {
                tag: s.to_string(),
                allowed: Self::allowed_tags(),
            })
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Target side cell: the rendered value, followed by the percentage delta
/// when the metric got better or worse.
pub(crate) fn target_cell<F>(metric: Option<&MetricComparison>, value: F) -> Option<String>
where
    F: Fn(&MetricComparison) -> String,
{
    metric.map(|m| {
        let rendered = value(m);
        if m.status().is_change() {
            format!("{} ({})", rendered, beautify_percentage(m.diff_percentage()))
        } else {
            rendered
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_tags() {
        assert_eq!("console".parse::<ExportFormat>().unwrap(), ExportFormat::Console);
        assert_eq!("MARKDOWN".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert_eq!("Json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("hit-txt".parse::<ExportFormat>().unwrap(), ExportFormat::HitTxt);
    }

    #[test]
    fn test_unknown_tag() {
        let err = "html".parse::<ExportFormat>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid format 'html'. Allowed values: console, markdown, json, hit-txt"
        );
    }

    #[test]
    fn test_tag_round_trip() {
        for format in ExportFormat::ALL {
            assert_eq!(format.to_string().parse::<ExportFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_destinations() {
        assert_eq!(ExportFormat::Console.destination(), Destination::Stdout);
        assert_eq!(
            ExportFormat::Json.destination(),
            Destination::File("benchmark-comparison-report.json")
        );
    }

    #[test]
    fn test_hit_txt_skipped_for_clean_report() {
        let report = ComparerReport::new();
        assert_eq!(ExportFormat::HitTxt.render(&report).unwrap(), None);
        assert!(ExportFormat::Markdown.render(&report).unwrap().is_some());
    }

    #[test]
    fn test_target_cell_suffix() {
        let worse = MetricComparison::execution_time(Some(dec!(10)), Some(dec!(15)));
        assert_eq!(
            target_cell(worse.as_ref(), |m| format!("{}", m.target().unwrap())),
            Some("15 (50%)".to_string())
        );

        let equal = MetricComparison::execution_time(Some(dec!(10)), Some(dec!(10)));
        assert_eq!(
            target_cell(equal.as_ref(), |m| format!("{}", m.target().unwrap())),
            Some("10".to_string())
        );
        assert_eq!(target_cell(None, |_| String::new()), None);
    }
}
