// jmhfmt - JMH Benchmark Report Formatter
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

//! Error types for report generation.
//!
//! Every failure in the pipeline is fatal for the whole run: a partial
//! comparison table is more misleading than no table, so there is no
//! skip-and-continue path for malformed records.

use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while loading and aggregating JMH results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    /// The input document contained no benchmark records.
    #[error("No benchmark results found in {source_name}")]
    EmptyInput {
        /// Human-readable name of the input (usually a path).
        source_name: String,
    },

    /// The input is not a JSON array of JMH result objects.
    #[error("Invalid JMH results JSON: {message}")]
    InvalidJson {
        /// The serde_json error message.
        message: String,
    },

    /// A record belonging to a recognized category lacks a required field
    /// or carries a value that cannot be used.
    #[error("Malformed record #{index} ({benchmark}): field '{field}' {reason}")]
    MalformedRecord {
        /// Position of the record in the input array.
        index: usize,
        /// The record's `benchmark` string.
        benchmark: String,
        /// Dotted path of the offending field.
        field: String,
        /// What is wrong with it.
        reason: String,
    },
}

impl ReportError {
    /// Create a malformed record error.
    ///
    /// # Examples
    ///
    /// ```
    /// use jmhfmt_core::error::ReportError;
    ///
    /// let err = ReportError::malformed(3, "x.Bench.run", "params.messageSize", "is missing");
    /// assert!(err.to_string().contains("params.messageSize"));
    /// ```
    pub fn malformed(
        index: usize,
        benchmark: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedRecord {
            index,
            benchmark: benchmark.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an empty input error.
    pub fn empty_input(source_name: impl Into<String>) -> Self {
        Self::EmptyInput {
            source_name: source_name.into(),
        }
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(source: serde_json::Error) -> Self {
        Self::InvalidJson {
            message: source.to_string(),
        }
    }
}
