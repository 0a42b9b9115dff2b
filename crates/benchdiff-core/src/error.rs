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

//! Error types for the comparison engine.
//!
//! Fatal conditions raised while preparing or rendering a comparison. Host
//! environment mismatches are not errors: they are collected as warnings on
//! the [`ComparerReport`](crate::ComparerReport).

use crate::table::TableError;
use thiserror::Error;

/// Result type for comparison operations.
pub type Result<T> = std::result::Result<T, ComparerError>;

/// Errors that can occur while comparing or exporting benchmark reports.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComparerError {
    /// A threshold string is not `<digits><unit>` or `<digits>%`.
    ///
    /// Raised before any output is written.
    #[error("The value '{value}' is not a valid threshold.")]
    InvalidThresholdFormat {
        /// The rejected input
        value: String,
    },

    /// An export format tag that is not registered.
    #[error("Invalid format '{tag}'. Allowed values: {allowed}")]
    UnknownFormat {
        /// The rejected tag
        tag: String,
        /// Comma separated list of accepted tags
        allowed: String,
    },

    /// Table layout misuse while rendering.
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// The report could not be serialized.
    #[error("Serialization error: {message}")]
    Serialization {
        /// The error message
        message: String,
    },
}

impl ComparerError {
    /// Create an invalid threshold error for the given input.
    pub fn invalid_threshold(value: impl Into<String>) -> Self {
        Self::InvalidThresholdFormat {
            value: value.into(),
        }
    }
}

impl From<serde_json::Error> for ComparerError {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_threshold_display() {
        let err = ComparerError::invalid_threshold("10xs");
        assert_eq!(err.to_string(), "The value '10xs' is not a valid threshold.");
    }

    #[test]
    fn test_table_error_conversion() {
        let err: ComparerError = TableError::HeaderAlreadyAdded.into();
        assert!(matches!(err, ComparerError::Table(_)));
        assert!(err.to_string().contains("Header has already been added"));
    }

    #[test]
    fn test_unknown_format_display() {
        let err = ComparerError::UnknownFormat {
            tag: "html".to_string(),
            allowed: "console, markdown".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid format 'html'. Allowed values: console, markdown"
        );
    }
}
