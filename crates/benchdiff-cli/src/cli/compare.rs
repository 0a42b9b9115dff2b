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

//! Options of the `compare` command.

use crate::commands::CompareOptions;
use benchdiff_core::ExportFormat;
use clap::Args;
use std::path::PathBuf;

/// Arguments of `benchdiff compare`.
#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Path to the folder or file with baseline reports
    #[arg(short, long, value_name = "PATH")]
    pub baseline: String,

    /// Path to the folder or file with target reports
    #[arg(short, long, value_name = "PATH")]
    pub target: String,

    /// Mean threshold. Examples: 5%, 10ms, 10μs, 100ns, 1s
    #[arg(long, value_name = "THRESHOLD")]
    pub threshold_mean: Option<String>,

    /// Allocation threshold. Examples: 5%, 10b, 10kb, 100mb, 1gb
    #[arg(long, value_name = "THRESHOLD")]
    pub threshold_allocation: Option<String>,

    /// Output format, repeatable (console, markdown, json, hit-txt)
    #[arg(short, long = "format", value_name = "FORMAT", default_value = "console")]
    pub formats: Vec<ExportFormat>,

    /// Output directory for file exports
    #[arg(short, long, value_name = "DIR", default_value = "./BenchmarkReporter")]
    pub output: PathBuf,

    /// Exit with code 2 when the report has environment warnings
    #[arg(long)]
    pub fail_on_warnings: bool,

    /// Exit with code 3 when a threshold is hit
    #[arg(long)]
    pub fail_on_threshold_hit: bool,
}

impl From<CompareArgs> for CompareOptions {
    fn from(args: CompareArgs) -> Self {
        Self {
            baseline: args.baseline,
            target: args.target,
            threshold_mean: args.threshold_mean,
            threshold_allocation: args.threshold_allocation,
            formats: args.formats,
            output: args.output,
            fail_on_warnings: args.fail_on_warnings,
            fail_on_threshold_hit: args.fail_on_threshold_hit,
        }
    }
}
