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

//! Structured error types for the benchdiff CLI.
//!
//! Every fatal condition aborts the run with exit code 1. Environment
//! warnings and threshold hits are not errors; they are carried on the
//! comparison report and only influence the exit code on request.

use benchdiff_core::ComparerError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for benchdiff CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use benchdiff_cli::error::CliError;
///
/// fn load(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// The baseline or target path does not lead to any report file.
    #[error("{message}")]
    InputNotFound {
        /// The offending path, when one was given
        path: Option<PathBuf>,
        /// Description of what is missing
        message: String,
    },

    /// A report file is not valid report JSON.
    #[error("Failed to deserialize the file '{path}'. {message}")]
    InputParse {
        /// The report file that failed to parse
        path: PathBuf,
        /// The parser error message
        message: String,
    },

    /// File size exceeds the configured limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// I/O operation failed (read, write, directory creation or walk).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Threshold parsing, format lookup or rendering failed.
    #[error(transparent)]
    Comparer(#[from] ComparerError),
}

impl CliError {
    /// Create an input-not-found error for a path.
    pub fn input_not_found(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InputNotFound {
            path: Some(path.into()),
            message: message.into(),
        }
    }

    /// Create an input-not-found error for a blank path argument.
    pub fn blank_input() -> Self {
        Self::InputNotFound {
            path: None,
            message: "The provided path is null or empty.".to_string(),
        }
    }

    /// Create a parse error for a report file.
    pub fn input_parse(path: impl Into<PathBuf>, source: &serde_json::Error) -> Self {
        Self::InputParse {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}
