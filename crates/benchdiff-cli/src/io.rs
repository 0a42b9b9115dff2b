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

//! Report discovery, loading and export writing.

use crate::error::CliError;
use benchdiff_core::Report;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Suffix identifying a full JSON benchmark report.
pub const REPORT_FILE_SUFFIX: &str = "-report-full.json";

/// Default maximum report size (1 GB).
///
/// Can be overridden via the `BENCHDIFF_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Maximum report size from `BENCHDIFF_MAX_FILE_SIZE`, or the default when
/// the variable is unset or not a number.
pub fn max_file_size() -> u64 {
    std::env::var("BENCHDIFF_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Returns true when the file name ends with [`REPORT_FILE_SUFFIX`], ignoring case.
pub fn is_report_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.to_lowercase().ends_with(REPORT_FILE_SUFFIX))
}

/// Resolves a baseline or target argument to report files.
///
/// A directory is searched recursively and must contain at least one report
/// file. A file must exist and carry the report suffix. The result is sorted.
///
/// # Errors
///
/// Returns [`CliError::InputNotFound`] for a blank path, a directory without
/// reports, or a path that is neither.
pub fn find_reports(path: &str) -> Result<Vec<PathBuf>, CliError> {
    if path.trim().is_empty() {
        return Err(CliError::blank_input());
    }

    let root = Path::new(path);
    if root.is_dir() {
        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.file_type().is_file() && is_report_file(entry.path()))
            .map(|entry| entry.into_path())
            .collect();

        if files.is_empty() {
            return Err(CliError::input_not_found(
                root,
                format!(
                    "No {} files found in the provided directory '{}'",
                    REPORT_FILE_SUFFIX, path
                ),
            ));
        }

        files.sort();
        debug!(directory = path, count = files.len(), "Discovered report files");
        return Ok(files);
    }

    if root.is_file() && is_report_file(root) {
        return Ok(vec![root.to_path_buf()]);
    }

    Err(CliError::input_not_found(
        root,
        format!(
            "The provided path '{}' doesn't exist or is not a {} file",
            path, REPORT_FILE_SUFFIX
        ),
    ))
}

/// Loads every report found under `path`.
///
/// Each report gets its absolute `file_path` and its `file_name` filled in.
///
/// # Errors
///
/// Fails on discovery errors, oversized files, unreadable files and invalid
/// report JSON.
pub fn read_reports(path: &str) -> Result<Vec<Report>, CliError> {
    let max_size = max_file_size();
    let reports = find_reports(path)?
        .iter()
        .map(|file| read_report(file, max_size))
        .collect::<Result<Vec<_>, _>>()?;

    info!(path, count = reports.len(), "Loaded reports");
    Ok(reports)
}

/// Loads a single report file, rejecting files larger than `max_size` bytes.
pub fn read_report(path: &Path, max_size: u64) -> Result<Report, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
    if metadata.len() > max_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_size));
    }

    let content = fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))?;
    let mut report: Report =
        serde_json::from_str(&content).map_err(|e| CliError::input_parse(path, &e))?;

    let absolute = fs::canonicalize(path).map_err(|e| CliError::io_error(path, e))?;
    report.file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    report.file_path = Some(absolute.display().to_string());

    debug!(
        file = %absolute.display(),
        benchmarks = report.benchmarks().len(),
        "Parsed report"
    );
    Ok(report)
}

/// Writes an export into `directory`, creating it when needed.
///
/// Prints the absolute path of the written file and returns it.
pub fn write_export(directory: &Path, file_name: &str, content: &str) -> Result<PathBuf, CliError> {
    fs::create_dir_all(directory).map_err(|e| CliError::io_error(directory, e))?;
    let directory = fs::canonicalize(directory).map_err(|e| CliError::io_error(directory, e))?;

    let path = directory.join(file_name);
    fs::write(&path, content).map_err(|e| CliError::io_error(&path, e))?;

    println!("\nFile exported to: '{}'", path.display());
    info!(file = %path.display(), "Export written");
    Ok(path)
}
