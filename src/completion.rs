//! Shell completion scripts, generated from the clap definition.
//!
//! ```bash
//! moodmuse completion bash > ~/.local/share/bash-completion/completions/moodmuse
//! moodmuse completion fish > ~/.config/fish/completions/moodmuse.fish
//! ```

use clap::Command;
use clap_complete::{generate, Generator, Shell as CompletionShell};
use std::io::Write;

/// Writes completions for `cmd` to `out`.
pub fn generate_completions<G: Generator>(gen: G, cmd: &mut Command, out: &mut dyn Write) {
    let name = cmd.get_name().to_string();
    generate(gen, cmd, name, out);
}

/// Convert our Shell enum to clap_complete's Shell enum
#[must_use]
pub fn shell_to_completion_shell(shell: crate::cli::Shell) -> CompletionShell {
    match shell {
        crate::cli::Shell::Bash => CompletionShell::Bash,
        crate::cli::Shell::Zsh => CompletionShell::Zsh,
        crate::cli::Shell::Fish => CompletionShell::Fish,
        crate::cli::Shell::PowerShell => CompletionShell::PowerShell,
        crate::cli::Shell::Elvish => CompletionShell::Elvish,
    }
}
