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

//! CLI command implementations

mod completion;
mod report;

pub use completion::{
    generate_completion_for_command, print_installation_instructions, unsupported_shell,
};
pub use report::{render_report, report};

use crate::error::CliError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Default maximum input size (1 GB).
/// Can be overridden via the `JMHFMT_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`], in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "JMHFMT_MAX_FILE_SIZE";

fn get_max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// Files larger than the configured maximum are rejected before any
/// memory is allocated for them.
///
/// # Errors
///
/// - [`CliError::InputUnavailable`] if the file does not exist
/// - [`CliError::FileTooLarge`] if it exceeds the limit
/// - [`CliError::Io`] for any other read failure, including invalid UTF-8
pub fn read_file(path: &Path) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file or stdout.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the file or stdout cannot be written.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::Io {
            path: p.to_path_buf(),
            message: e.to_string(),
        }),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_read_missing_file() {
        let err = read_file(Path::new("definitely/not/here/results.json")).unwrap_err();
        match err {
            CliError::InputUnavailable { path, .. } => {
                assert_eq!(path, PathBuf::from("definitely/not/here/results.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_write_output_bad_dir_is_io_error() {
        let err = write_output("x", Some(Path::new("definitely/not/here/out.md"))).unwrap_err();
        // The output path is never reported as a missing benchmark run.
        assert!(matches!(err, CliError::Io { .. }));
    }
}
