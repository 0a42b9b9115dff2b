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

//! End-to-end pipeline tests: JSON reports in, rendered exports out.

use benchdiff_core::{compare_reports, ComparisonStatus, ExportFormat, Report, Thresholds};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

const BASELINE: &str = r#"{
  "Title": "Parser.Benchmarks-20250101-120000",
  "HostEnvironmentInfo": {
    "BenchmarkDotNetVersion": "0.14.0",
    "OsVersion": "Ubuntu 22.04.4 LTS (Jammy Jellyfish)",
    "ProcessorName": "AMD EPYC 7763",
    "PhysicalProcessorCount": 1,
    "PhysicalCoreCount": 2,
    "LogicalCoreCount": 4,
    "RuntimeVersion": ".NET 8.0.8 (8.0.824.36612)",
    "Architecture": "X64",
    "HasAttachedDebugger": false,
    "Configuration": "RELEASE",
    "DotNetCliVersion": "8.0.400",
    "ChronometerFrequency": { "Hertz": 1000000000 }
  },
  "Benchmarks": [
    {
      "DisplayInfo": "Parser.Parse: DefaultJob",
      "Namespace": "Demo",
      "Type": "Parser",
      "Method": "Parse",
      "FullName": "Demo.Parser.Parse",
      "Statistics": { "N": 15, "Mean": 50.0, "Median": 49.5 },
      "Memory": {
        "Gen0Collections": 10,
        "Gen1Collections": 0,
        "Gen2Collections": 0,
        "TotalOperations": 1000,
        "BytesAllocatedPerOperation": 100
      }
    },
    {
      "Type": "Parser",
      "Method": "Validate",
      "FullName": "Demo.Parser.Validate",
      "Statistics": { "Mean": 12.0 },
      "Memory": { "BytesAllocatedPerOperation": 20 }
    }
  ]
}"#;

const TARGET: &str = r#"{
  "Title": "Parser.Benchmarks-20250102-120000",
  "HostEnvironmentInfo": {
    "OsVersion": "Ubuntu 22.04.4 LTS (Jammy Jellyfish)",
    "ProcessorName": "AMD EPYC 7763",
    "PhysicalProcessorCount": 1,
    "PhysicalCoreCount": 2,
    "LogicalCoreCount": 4,
    "RuntimeVersion": ".NET 8.0.8 (8.0.824.36612)",
    "Architecture": "X64",
    "Configuration": "DEBUG",
    "DotNetCliVersion": "8.0.400",
    "ChronometerFrequency": { "Hertz": 1000000000 }
  },
  "Benchmarks": [
    {
      "Type": "Parser",
      "Method": "Tokenize",
      "FullName": "Demo.Parser.Tokenize",
      "Statistics": { "Mean": 3457.0 },
      "Memory": { "BytesAllocatedPerOperation": 3421 }
    },
    {
      "Type": "Parser",
      "Method": "Parse",
      "FullName": "demo.parser.parse",
      "Statistics": { "Mean": 25.0 },
      "Memory": {
        "Gen0Collections": 10,
        "TotalOperations": 2000,
        "BytesAllocatedPerOperation": 75
      }
    }
  ]
}"#;

fn load(json: &str, file_name: &str) -> Report {
    let mut report: Report = serde_json::from_str(json).unwrap();
    report.file_name = Some(file_name.to_string());
    report
}

fn run(thresholds: &Thresholds) -> benchdiff_core::ComparerReport {
    compare_reports(
        &[load(BASELINE, "Demo.Parser-report-full.json")],
        &[load(TARGET, "Demo.Parser-report-full.json")],
        thresholds,
    )
}

#[test]
fn test_pipeline_comparisons_and_warnings() {
    let report = run(&Thresholds::default());

    assert_eq!(
        report.warnings,
        vec!["The target report wasn't executed in RELEASE mode: 'DEBUG'"]
    );

    let names: Vec<_> = report
        .comparisons()
        .iter()
        .map(|c| c.full_name.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(
        names,
        vec!["Demo.Parser.Parse", "Demo.Parser.Validate", "Demo.Parser.Tokenize"]
    );

    let parse = &report.comparisons()[0];
    let mean = parse.mean.as_ref().unwrap();
    assert_eq!(mean.diff(), Some(dec!(-25)));
    assert_eq!(mean.diff_percentage(), Some(dec!(-50)));
    assert_eq!(mean.status(), ComparisonStatus::Better);

    let gen0 = parse.gen0_collections.as_ref().unwrap();
    assert_eq!(gen0.baseline(), Some(dec!(10)));
    assert_eq!(gen0.target(), Some(dec!(5)));
    assert!(parse.gen1_collections.is_none());

    let validate = &report.comparisons()[1];
    assert_eq!(validate.mean.as_ref().unwrap().status(), ComparisonStatus::Removed);

    let tokenize = &report.comparisons()[2];
    assert_eq!(tokenize.mean.as_ref().unwrap().status(), ComparisonStatus::New);
}

#[test]
fn test_pipeline_console_export() {
    let thresholds = Thresholds::parse(Some("1μs"), Some("10%")).unwrap();
    let report = run(&thresholds);
    assert!(report.hit_thresholds.is_empty());

    let console = ExportFormat::Console.render(&report).unwrap().unwrap();
    let lines: Vec<&str> = console.split('\n').collect();
    assert_eq!(
        lines[11..19].to_vec(),
        vec![
            "📊 RESULTS:",
            "",
            "Report       Type       Method        Mean             Allocated",
            "──────────────────────────────────────────────────────────────────",
            "Baseline     Parser     Parse         50 ns            100 B",
            "Target                                25 ns (-50%)     75 B (-25%)",
            "Baseline     Parser     Validate      12 ns            20 B",
            "Target                  [REMOVED]                      ",
        ]
    );
    assert_eq!(
        lines[19..21].to_vec(),
        vec![
            "Baseline     Parser     Tokenize                       ",
            "Target                  [NEW]         3.457 μs         3.341 KB",
        ]
    );
}

#[test]
fn test_pipeline_threshold_hits_and_hit_list() {
    let thresholds = Thresholds::parse(Some("100ns"), Some("1b")).unwrap();
    let report = run(&thresholds);
    assert!(report.hit_thresholds.is_empty());

    let mut regressed = load(TARGET, "Demo.Parser-report-full.json");
    if let Some(entries) = regressed.benchmarks.as_mut() {
        entries[1].statistics.as_mut().unwrap().mean = Some(dec!(500));
    }
    let report = compare_reports(
        &[load(BASELINE, "Demo.Parser-report-full.json")],
        &[regressed],
        &thresholds,
    );
    assert_eq!(report.hit_thresholds, vec!["Mean threshold hit for 'Demo.Parser.Parse'"]);

    let hits = ExportFormat::HitTxt.render(&report).unwrap().unwrap();
    assert_eq!(
        hits,
        "The target report wasn't executed in RELEASE mode: 'DEBUG'\n\
         Mean threshold hit for 'Demo.Parser.Parse'\n"
    );
}

#[test]
fn test_pipeline_json_export_parses_back() {
    let report = run(&Thresholds::default());
    let json = ExportFormat::Json.render(&report).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["Comparisons"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["Comparisons"][0]["Gen0Collections"]["Status"], "Better");
    assert_eq!(value["Comparisons"][2]["Allocated"]["Status"], "New");
    assert_eq!(value["Warnings"][0], "The target report wasn't executed in RELEASE mode: 'DEBUG'");
}
