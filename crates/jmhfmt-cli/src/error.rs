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

//! Structured error types for the jmhfmt CLI.
//!
//! All command implementations return `Result<T, CliError>`; `main` prints
//! the message and exits with a failure status.

use jmhfmt_core::ReportError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Hint printed when the JMH results file does not exist.
pub const RUN_BENCHMARKS_HINT: &str = "Run the JMH benchmarks first, e.g. `./gradlew jmh`.";

/// The main error type for jmhfmt CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use jmhfmt_cli::error::CliError;
///
/// fn load(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The results file does not exist.
    #[error("Results file '{path}' not found. {hint}")]
    InputUnavailable {
        /// The path that was looked up
        path: PathBuf,
        /// How to produce the file
        hint: String,
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

    /// The results file holds no benchmark records.
    #[error("No benchmark results found in {source_name}. {hint}")]
    NoResults {
        /// The input that was read
        source_name: String,
        /// How to produce results
        hint: String,
    },

    /// Loading or aggregating the results failed.
    #[error(transparent)]
    Report(ReportError),

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    ///
    /// A missing file becomes [`CliError::InputUnavailable`] with the
    /// benchmark hint, since the usual cause is that JMH has not run yet.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            return Self::input_unavailable(path);
        }
        Self::Io {
            path,
            message: source.to_string(),
        }
    }

    /// Create an input-unavailable error with the default hint.
    pub fn input_unavailable(path: impl Into<PathBuf>) -> Self {
        Self::InputUnavailable {
            path: path.into(),
            hint: RUN_BENCHMARKS_HINT.to_string(),
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

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<ReportError> for CliError {
    fn from(source: ReportError) -> Self {
        match source {
            ReportError::EmptyInput { source_name } => Self::NoResults {
                source_name,
                hint: RUN_BENCHMARKS_HINT.to_string(),
            },
            other => Self::Report(other),
        }
    }
}
