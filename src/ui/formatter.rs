//! Pure formatting functions for UI output.
//!
//! Everything here writes to stderr. Stdout carries only command results so
//! callers can capture them by value.

use std::path::Path;

use console::style;

use crate::boundary::ReleaseWarning;
use crate::gateway::WriteOutcome;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a release warning to the user.
pub fn display_release_warning(warning: &ReleaseWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Show the content a dry run would have written.
///
/// # Arguments
/// * `path` - File that would have been written
/// * `contents` - The computed new contents
/// * `max_lines` - How many leading lines to show
pub fn display_dry_run_preview(path: &Path, contents: &str, max_lines: usize) {
    eprintln!(
        "\n{} {}",
        style("Dry run, would write:").bold(),
        style(path.display()).cyan()
    );
    for line in contents.lines().take(max_lines) {
        eprintln!("  {} {}", style("|").dim(), line);
    }

    let total = contents.lines().count();
    if total > max_lines {
        eprintln!("  ... and {} more lines", total - max_lines);
    }
}

/// Summarise what happened to one file.
pub fn display_outcome(path: &Path, outcome: WriteOutcome) {
    match outcome {
        WriteOutcome::Written => display_success(&format!("Updated {}", path.display())),
        WriteOutcome::DryRun => display_status(&format!("Would update {}", path.display())),
        WriteOutcome::Unchanged => display_status(&format!("{} unchanged", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_dry_run_preview_truncates() {
        // Visual verification test - output is printed to stderr
        display_dry_run_preview(Path::new("CHANGELOG.md"), "a\nb\nc\nd\n", 2);
    }

    #[test]
    fn test_display_outcome_variants() {
        for outcome in [WriteOutcome::Written, WriteOutcome::DryRun, WriteOutcome::Unchanged] {
            display_outcome(Path::new("VERSION"), outcome);
        }
    }
}
