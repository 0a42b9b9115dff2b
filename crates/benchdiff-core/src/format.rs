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

//! Human readable rendering of raw magnitudes.
//!
//! Numbers use invariant-culture grouping (`1,234.5`), are rounded half away
//! from zero and have trailing zeros trimmed. Absent values render as an
//! empty string so table cells stay blank.

use rust_decimal::{Decimal, RoundingStrategy};

const TIME_UNITS: [&str; 4] = ["ns", "μs", "ms", "s"];
const MEMORY_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

const TIME_STEP: Decimal = Decimal::ONE_THOUSAND;
const MEMORY_STEP: Decimal = Decimal::from_parts(1024, 0, 0, false, 0);
const SECONDS_PER_MINUTE: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Renders nanoseconds, escalating through `ns`, `μs`, `ms` and `s`.
///
/// Durations of a minute or more render as `{m}m` or `{m}m {s}s`, with the
/// minute count written out without grouping.
pub fn beautify_time(nanoseconds: Option<Decimal>) -> String {
    let Some(mut value) = nanoseconds else {
        return String::new();
    };

    let mut unit = 0;
    while value >= TIME_STEP && unit + 1 < TIME_UNITS.len() {
        value /= TIME_STEP;
        unit += 1;
    }

    if unit == TIME_UNITS.len() - 1 && value >= SECONDS_PER_MINUTE {
        let minutes = (value / SECONDS_PER_MINUTE).floor().normalize();
        let seconds = value % SECONDS_PER_MINUTE;
        return if seconds.is_zero() {
            format!("{}m", minutes)
        } else {
            format!("{}m {}s", minutes, format_number(seconds, 0))
        };
    }

    format!("{} {}", format_number(value, 3), TIME_UNITS[unit])
}

/// Renders bytes, escalating by 1024 through `B`, `KB`, `MB`, `GB` and `TB`.
pub fn beautify_memory(bytes: Option<Decimal>) -> String {
    let Some(mut value) = bytes else {
        return String::new();
    };

    let mut unit = 0;
    while value >= MEMORY_STEP && unit + 1 < MEMORY_UNITS.len() {
        value /= MEMORY_STEP;
        unit += 1;
    }

    format!("{} {}", format_number(value, 3), MEMORY_UNITS[unit])
}

/// Renders a percentage with at most two decimals.
pub fn beautify_percentage(percentage: Option<Decimal>) -> String {
    match percentage {
        Some(value) => format!("{}%", format_number(value, 2)),
        None => String::new(),
    }
}

/// Formats `value` with up to `decimals` fractional digits and digit grouping.
fn format_number(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let magnitude = rounded.abs();

    let mut out = String::new();
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(&magnitude.trunc().normalize().to_string()));

    let fraction = magnitude.fract().normalize();
    if !fraction.is_zero() {
        let digits = fraction.to_string();
        out.push('.');
        out.push_str(digits.trim_start_matches("0."));
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
