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

//! The `compare` command.

use crate::error::CliError;
use crate::io::{read_reports, write_export};
use benchdiff_core::{compare_reports, ComparerReport, Destination, ExportFormat, Thresholds};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Inputs of one comparison run.
#[derive(Debug, Clone)]
pub struct CompareOptions {
    /// Baseline report file or directory.
    pub baseline: String,
    /// Target report file or directory.
    pub target: String,
    pub threshold_mean: Option<String>,
    pub threshold_allocation: Option<String>,
    /// Exporters to run, in order.
    pub formats: Vec<ExportFormat>,
    /// Directory receiving file exports.
    pub output: PathBuf,
    pub fail_on_warnings: bool,
    pub fail_on_threshold_hit: bool,
}

/// How a completed run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOutcome {
    Success,
    /// Warnings were found and `fail_on_warnings` was set.
    Warnings,
    /// Thresholds were hit and `fail_on_threshold_hit` was set.
    ThresholdHit,
}

impl CompareOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            CompareOutcome::Success => 0,
            CompareOutcome::Warnings => 2,
            CompareOutcome::ThresholdHit => 3,
        }
    }

    /// Warnings take precedence over threshold hits.
    fn of(report: &ComparerReport, options: &CompareOptions) -> Self {
        if options.fail_on_warnings && report.has_warnings() {
            CompareOutcome::Warnings
        } else if options.fail_on_threshold_hit && report.has_hit_thresholds() {
            CompareOutcome::ThresholdHit
        } else {
            CompareOutcome::Success
        }
    }
}

/// Runs a comparison and every requested exporter.
///
/// Thresholds are parsed before any report is read, so a malformed
/// threshold never produces partial output.
///
/// # Errors
///
/// Returns `Err` when a threshold is malformed, the inputs cannot be found
/// or parsed, or an export cannot be rendered or written.
pub fn compare(options: &CompareOptions) -> Result<CompareOutcome, CliError> {
    let thresholds = Thresholds::parse(
        options.threshold_mean.as_deref(),
        options.threshold_allocation.as_deref(),
    )?;
    debug!(?thresholds, "Parsed thresholds");

    let baseline = read_reports(&options.baseline)?;
    let target = read_reports(&options.target)?;

    let report = compare_reports(&baseline, &target, &thresholds);
    if report.has_warnings() {
        warn!(
            count = report.warnings.len(),
            "Baseline and target host environments differ"
        );
    }

    for format in &options.formats {
        export(&report, *format, options)?;
    }

    let outcome = CompareOutcome::of(&report, options);
    info!(?outcome, "Compare finished");
    Ok(outcome)
}

fn export(report: &ComparerReport, format: ExportFormat, options: &CompareOptions) -> Result<(), CliError> {
    let Some(content) = format.render(report)? else {
        debug!(format = %format, "Nothing to export");
        return Ok(());
    };

    match format.destination() {
        Destination::Stdout => print!("{}", content),
        Destination::File(file_name) => {
            write_export(&options.output, file_name, &content)?;
        }
    }
    Ok(())
}
