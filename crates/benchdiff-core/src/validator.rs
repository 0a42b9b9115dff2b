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

//! Host environment validation.
//!
//! Benchmarks are only comparable when both runs used the same machine and
//! toolchain in release mode. Every mismatch becomes a warning on the report;
//! none of them stops the comparison.

use crate::matcher::equivalent;
use crate::model::{HostEnvironment, Report};
use std::fmt::Display;

const RELEASE_CONFIGURATION: &str = "RELEASE";

/// Compares the host environment of two reports.
///
/// When either report is missing a single message explains which one.
/// Otherwise every field is checked and one message is returned per
/// mismatch, followed by the release-mode checks for each side.
pub fn validate_host_environment(baseline: Option<&Report>, target: Option<&Report>) -> Vec<String> {
    let Some(baseline) = baseline else {
        return vec!["The baseline report isn't defined".to_string()];
    };
    let Some(target) = target else {
        return vec!["The target report isn't defined".to_string()];
    };

    let b = baseline.host();
    let t = target.host();
    let mut messages = Vec::new();

    // Text fields are only checked when the baseline carries a host section.
    let text = |field: fn(&HostEnvironment) -> Option<&str>| {
        b.map(|baseline| (field(baseline), t.and_then(field)))
    };
    let count = |field: fn(&HostEnvironment) -> Option<i64>| (b.and_then(field), t.and_then(field));

    check_text(&mut messages, "OS Version", text(|h| h.os_version.as_deref()));
    check_text(&mut messages, "Processor Name", text(|h| h.processor_name.as_deref()));
    check_exact(&mut messages, "Physical Processor Count", count(|h| h.physical_processor_count));
    check_exact(&mut messages, "Physical Core Count", count(|h| h.physical_core_count));
    check_exact(&mut messages, "Logical Core Count", count(|h| h.logical_core_count));
    check_text(&mut messages, "Runtime Version", text(|h| h.runtime_version.as_deref()));
    check_text(&mut messages, "Architecture", text(|h| h.architecture.as_deref()));
    check_text(&mut messages, "DotNet CLI Version", text(|h| h.dot_net_cli_version.as_deref()));
    check_exact(&mut messages, "Chronometer Frequency", count(HostEnvironment::hertz));

    for (side, host) in [("baseline", b), ("target", t)] {
        let configuration = host.and_then(|h| h.configuration.as_deref());
        if !equivalent(Some(RELEASE_CONFIGURATION), configuration) {
            messages.push(format!(
                "The {} report wasn't executed in RELEASE mode: '{}'",
                side,
                configuration.unwrap_or_default()
            ));
        }
    }

    messages
}

fn check_text(messages: &mut Vec<String>, label: &str, values: Option<(Option<&str>, Option<&str>)>) {
    if let Some((baseline, target)) = values {
        if !equivalent(baseline, target) {
            messages.push(mismatch(label, baseline, target));
        }
    }
}

fn check_exact(messages: &mut Vec<String>, label: &str, (baseline, target): (Option<i64>, Option<i64>)) {
    if baseline != target {
        messages.push(mismatch(label, baseline, target));
    }
}

fn mismatch<V: Display>(label: &str, baseline: Option<V>, target: Option<V>) -> String {
    format!(
        "{} is different: '{}' != '{}'",
        label,
        display_or_empty(baseline),
        display_or_empty(target)
    )
}

fn display_or_empty<V: Display>(value: Option<V>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
