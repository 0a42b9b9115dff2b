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

//! Threshold parsing.
//!
//! Thresholds are written as a run of ASCII digits followed by a unit, for
//! example `10ms`, `512kb` or `5%`. Absolute values are normalized to
//! nanoseconds or bytes. Memory units use decimal multipliers (`kb` is 1000
//! bytes), unlike the 1024-based display scaling in [`crate::format`].

use crate::error::{ComparerError, Result};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Unit vocabulary a threshold is parsed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdKind {
    /// `ns`, `μs`, `ms`, `s`.
    Time,
    /// `b`, `kb`, `mb`, `gb`.
    Memory,
}

impl ThresholdKind {
    /// Unit suffixes and their multipliers, largest first.
    fn units(&self) -> &'static [(&'static str, i64)] {
        match self {
            ThresholdKind::Time => &[
                ("s", 1_000_000_000),
                ("ms", 1_000_000),
                ("μs", 1_000),
                ("ns", 1),
            ],
            ThresholdKind::Memory => &[
                ("gb", 1_000_000_000),
                ("mb", 1_000_000),
                ("kb", 1_000),
                ("b", 1),
            ],
        }
    }
}

/// A pass/fail bound on a metric delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    value: Decimal,
    is_percentage: bool,
    kind: ThresholdKind,
}

impl Threshold {
    /// Parses a threshold against the given unit vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`ComparerError::InvalidThresholdFormat`] when the input is
    /// blank, has no leading digits, is not positive, or ends in a unit
    /// outside the vocabulary.
    pub fn parse(text: &str, kind: ThresholdKind) -> Result<Self> {
        let invalid = || ComparerError::invalid_threshold(text);

        let digits_end = text
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(text.len(), |(i, _)| i);
        let (digits, unit) = text.split_at(digits_end);

        if digits.is_empty() {
            return Err(invalid());
        }
        let number = Decimal::from_str(digits).map_err(|_| invalid())?;
        if number <= Decimal::ZERO {
            return Err(invalid());
        }

        let unit = unit.to_lowercase();
        if unit == "%" {
            return Ok(Self {
                value: number,
                is_percentage: true,
                kind,
            });
        }

        let multiplier = kind
            .units()
            .iter()
            .find(|(suffix, _)| *suffix == unit)
            .map(|(_, multiplier)| Decimal::from(*multiplier))
            .ok_or_else(invalid)?;

        Ok(Self {
            value: number.checked_mul(multiplier).ok_or_else(invalid)?,
            is_percentage: false,
            kind,
        })
    }

    /// Parses an execution time threshold.
    pub fn time(text: &str) -> Result<Self> {
        Self::parse(text, ThresholdKind::Time)
    }

    /// Parses an allocation threshold.
    pub fn memory(text: &str) -> Result<Self> {
        Self::parse(text, ThresholdKind::Memory)
    }

    /// Normalized value: nanoseconds, bytes, or a percentage.
    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn is_percentage(&self) -> bool {
        self.is_percentage
    }

    pub fn kind(&self) -> ThresholdKind {
        self.kind
    }

    /// Returns true when `delta` strictly exceeds this threshold.
    ///
    /// Percentage thresholds are checked against the percentage delta,
    /// absolute ones against the raw delta. A missing delta never exceeds.
    pub fn is_exceeded_by(&self, diff: Option<Decimal>, diff_percentage: Option<Decimal>) -> bool {
        let delta = if self.is_percentage {
            diff_percentage
        } else {
            diff
        };
        delta.is_some_and(|delta| delta > self.value)
    }
}

impl fmt::Display for Threshold {
    /// Canonical form, accepted back by [`Threshold::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_percentage {
            return write!(f, "{}%", self.value.normalize());
        }

        let (suffix, multiplier) = self
            .kind
            .units()
            .iter()
            .map(|(suffix, multiplier)| (*suffix, Decimal::from(*multiplier)))
            .find(|(_, multiplier)| (self.value % multiplier).is_zero())
            .unwrap_or(("", Decimal::ONE));
        write!(f, "{}{}", (self.value / multiplier).normalize(), suffix)
    }
}

/// The optional thresholds supplied for one comparison run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Thresholds {
    pub mean: Option<Threshold>,
    pub allocation: Option<Threshold>,
}

impl Thresholds {
    /// Parses the optional mean and allocation thresholds.
    ///
    /// Absent or blank inputs leave the corresponding threshold unset.
    pub fn parse(mean: Option<&str>, allocation: Option<&str>) -> Result<Self> {
        Ok(Self {
            mean: non_blank(mean).map(Threshold::time).transpose()?,
            allocation: non_blank(allocation).map(Threshold::memory).transpose()?,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
