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

//! benchdiff command line interface

use benchdiff_cli::cli::Commands;
use clap::error::ErrorKind;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// benchdiff - BenchmarkDotNet report comparison
///
/// # Examples
///
/// ```bash
/// # Compare two result folders on the console
/// benchdiff compare -b artifacts/main -t artifacts/pr
///
/// # Fail the build when the mean regresses by more than 5%
/// benchdiff compare -b base -t target --threshold-mean 5% --fail-on-threshold-hit
///
/// # Write Markdown and JSON reports
/// benchdiff compare -b base -t target -f markdown -f json -o ./reports
/// ```
#[derive(Parser)]
#[command(name = "benchdiff")]
#[command(author, version, about = "benchdiff - BenchmarkDotNet report comparison", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("benchdiff_cli=warn,benchdiff_core=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match cli.command.execute() {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
