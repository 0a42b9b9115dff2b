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

//! Input report model.
//!
//! Mirrors the subset of the BenchmarkDotNet full JSON report that the
//! comparison engine consumes. Field names follow the report's PascalCase
//! keys and every value is optional: reports produced by older tool versions
//! routinely omit whole sections. Fields the engine does not read are
//! ignored during deserialization.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One benchmark run report, typically a `*-report-full.json` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Report {
    /// Absolute path of the source file, filled in after loading.
    #[serde(skip)]
    pub file_path: Option<String>,
    /// File name of the source file, used to pair baseline and target reports.
    #[serde(skip)]
    pub file_name: Option<String>,
    /// Report title.
    #[serde(default)]
    pub title: Option<String>,
    /// Host environment the benchmarks ran on.
    #[serde(default)]
    pub host_environment_info: Option<HostEnvironment>,
    /// Benchmark entries in execution order.
    #[serde(default)]
    pub benchmarks: Option<Vec<BenchmarkEntry>>,
}

impl Report {
    /// Returns the benchmark entries, or an empty slice when the report has none.
    pub fn benchmarks(&self) -> &[BenchmarkEntry] {
        self.benchmarks.as_deref().unwrap_or_default()
    }

    /// Returns the host environment section, if present.
    pub fn host(&self) -> Option<&HostEnvironment> {
        self.host_environment_info.as_ref()
    }
}

/// Host environment metadata recorded by the benchmark runner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HostEnvironment {
    #[serde(default)]
    pub os_version: Option<String>,
    #[serde(default)]
    pub processor_name: Option<String>,
    #[serde(default)]
    pub physical_processor_count: Option<i64>,
    #[serde(default)]
    pub physical_core_count: Option<i64>,
    #[serde(default)]
    pub logical_core_count: Option<i64>,
    #[serde(default)]
    pub runtime_version: Option<String>,
    #[serde(default)]
    pub architecture: Option<String>,
    /// Build configuration, expected to be `RELEASE`.
    #[serde(default)]
    pub configuration: Option<String>,
    #[serde(default)]
    pub dot_net_cli_version: Option<String>,
    #[serde(default)]
    pub chronometer_frequency: Option<ChronometerFrequency>,
}

impl HostEnvironment {
    /// Chronometer frequency in hertz, if recorded.
    pub fn hertz(&self) -> Option<i64> {
        self.chronometer_frequency.as_ref().map(|f| f.hertz)
    }
}

/// Resolution of the timer used to measure the benchmarks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChronometerFrequency {
    pub hertz: i64,
}

/// A single benchmark result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BenchmarkEntry {
    /// Unique key used to match entries across runs.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Declaring benchmark type.
    #[serde(default, rename = "Type")]
    pub type_name: Option<String>,
    /// Benchmark method name.
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub statistics: Option<Statistics>,
    #[serde(default)]
    pub memory: Option<MemoryStats>,
}

impl BenchmarkEntry {
    /// Creates an entry with the given full name, type and method.
    pub fn new(
        full_name: impl Into<String>,
        type_name: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            full_name: Some(full_name.into()),
            type_name: Some(type_name.into()),
            method: Some(method.into()),
            statistics: None,
            memory: None,
        }
    }

    /// Sets the mean execution time in nanoseconds.
    pub fn with_mean(mut self, mean_ns: Decimal) -> Self {
        self.statistics = Some(Statistics {
            mean: Some(mean_ns),
        });
        self
    }

    /// Sets the memory diagnoser results.
    pub fn with_memory(mut self, memory: MemoryStats) -> Self {
        self.memory = Some(memory);
        self
    }

    /// Mean execution time in nanoseconds.
    pub fn mean(&self) -> Option<Decimal> {
        self.statistics.as_ref().and_then(|s| s.mean)
    }

    /// Bytes allocated per operation.
    pub fn allocated(&self) -> Option<Decimal> {
        self.memory
            .as_ref()
            .and_then(|m| m.bytes_allocated_per_operation)
            .map(Decimal::from)
    }

    /// Raw collection count for the given GC generation (0, 1 or 2).
    pub fn collections(&self, generation: u8) -> Option<Decimal> {
        let memory = self.memory.as_ref()?;
        let count = match generation {
            0 => memory.gen0_collections,
            1 => memory.gen1_collections,
            2 => memory.gen2_collections,
            _ => None,
        };
        count.map(Decimal::from)
    }

    /// Total operations executed while collecting memory statistics.
    pub fn total_operations(&self) -> Option<Decimal> {
        self.memory
            .as_ref()
            .and_then(|m| m.total_operations)
            .map(Decimal::from)
    }
}

/// Summary statistics for the measured iterations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statistics {
    /// Mean time per operation in nanoseconds.
    #[serde(default)]
    pub mean: Option<Decimal>,
}

/// Memory diagnoser results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MemoryStats {
    #[serde(default)]
    pub gen0_collections: Option<i64>,
    #[serde(default)]
    pub gen1_collections: Option<i64>,
    #[serde(default)]
    pub gen2_collections: Option<i64>,
    #[serde(default)]
    pub total_operations: Option<i64>,
    #[serde(default)]
    pub bytes_allocated_per_operation: Option<i64>,
}

impl MemoryStats {
    /// Memory stats carrying only the allocation per operation.
    pub fn allocated(bytes: i64) -> Self {
        Self {
            bytes_allocated_per_operation: Some(bytes),
            ..Self::default()
        }
    }
}
