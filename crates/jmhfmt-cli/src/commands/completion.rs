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

//! Shell completion generation

use crate::error::CliError;
use clap::Command;
use clap_complete::{generate, Generator};
use std::io;

/// Shells accepted by the `completion` command.
pub const SUPPORTED_SHELLS: &str = "bash, zsh, fish, powershell, elvish";

/// Generate a completion script for `cmd` on stdout.
pub fn generate_completion_for_command<G: Generator>(
    generator: G,
    cmd: &mut Command,
) -> Result<(), CliError> {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
    Ok(())
}

/// Error for a shell name that is not supported.
pub fn unsupported_shell(shell: &str) -> CliError {
    CliError::invalid_input(format!(
        "Unsupported shell: '{}'. Supported shells: {}",
        shell, SUPPORTED_SHELLS
    ))
}

/// Installation instructions for shell completions.
///
/// Shell names are case-insensitive.
///
/// # Errors
///
/// Returns [`CliError::InvalidInput`] for an unsupported shell.
pub fn print_installation_instructions(shell: &str) -> Result<String, CliError> {
    let instructions = match shell.to_lowercase().as_str() {
        "bash" => {
            r#"# Bash completion installation:

# For current session only:
eval "$(jmhfmt completion bash)"

# Or save to completions directory:
jmhfmt completion bash > ~/.local/share/bash-completion/completions/jmhfmt
"#
        }
        "zsh" => {
            r#"# Zsh completion installation:

# For current session only:
eval "$(jmhfmt completion zsh)"

# Or save to a directory in $fpath:
jmhfmt completion zsh > ~/.zsh/completions/_jmhfmt
"#
        }
        "fish" => {
            r#"# Fish completion installation:

jmhfmt completion fish > ~/.config/fish/completions/jmhfmt.fish
"#
        }
        "powershell" | "pwsh" => {
            r#"# PowerShell completion installation:

# Add this line to your $PROFILE:
jmhfmt completion powershell | Out-String | Invoke-Expression
"#
        }
        "elvish" => {
            r#"# Elvish completion installation:

# Add this line to ~/.elvish/rc.elv:
eval (jmhfmt completion elvish | slurp)
"#
        }
        _ => return Err(unsupported_shell(shell)),
    };
    Ok(instructions.to_string())
}
