//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Write};

use anyhow::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_dry_run_preview, display_error, display_outcome, display_release_warning,
    display_status, display_success,
};

/// Prompts user to confirm an action with a yes/no prompt.
///
/// The prompt goes to stderr; "y" or "yes" (case-insensitive) confirms.
/// Default is "no" if user presses Enter.
///
/// # Returns
/// * `Ok(true)` - If user entered "y" or "yes"
/// * `Ok(false)` - Otherwise (including Enter, or "n"/"no")
/// * `Err` - If input error occurs
pub fn confirm_action(prompt: &str) -> Result<bool> {
    let stdin = io::stdin();
    confirm_with(prompt, &mut stdin.lock(), &mut io::stderr())
}

fn confirm_with(prompt: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<bool> {
    write!(output, "\n{} (y/N): ", prompt)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let response = line.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(text: &str) -> bool {
        let mut input = io::Cursor::new(text.as_bytes().to_vec());
        let mut output = Vec::new();
        confirm_with("Proceed?", &mut input, &mut output).unwrap()
    }

    #[test]
    fn test_confirm_accepts_yes() {
        assert!(answer("y\n"));
        assert!(answer("YES\n"));
    }

    #[test]
    fn test_confirm_defaults_to_no() {
        assert!(!answer("\n"));
        assert!(!answer(""));
        assert!(!answer("nope\n"));
    }

    #[test]
    fn test_confirm_writes_prompt() {
        let mut input = io::Cursor::new(b"n\n".to_vec());
        let mut output = Vec::new();
        confirm_with("Release 1.0.0?", &mut input, &mut output).unwrap();
        assert!(String::from_utf8(output).unwrap().contains("Release 1.0.0? (y/N)"));
    }
}
