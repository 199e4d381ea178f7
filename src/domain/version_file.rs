//! Version declaration files, e.g. a shell `VERSION="1.2.3"` line.

/// Rewrite every line starting with `line_pattern` to `line_pattern"new_version"`.
///
/// Whatever followed the pattern is discarded; line terminators are kept. Text
/// with no matching line comes back byte-for-byte unchanged.
///
/// # Example
/// ```
/// use releaser::domain::version_file::rewrite;
///
/// let text = "VERSION=\"0.1.0\"\nOTHER=\"x\"\n";
/// assert_eq!(rewrite(text, "VERSION=", "0.2.0"), "VERSION=\"0.2.0\"\nOTHER=\"x\"\n");
/// ```
pub fn rewrite(file_contents: &str, line_pattern: &str, new_version: &str) -> String {
    let mut output = String::with_capacity(file_contents.len());

    for line in file_contents.split_inclusive('\n') {
        if !line.starts_with(line_pattern) {
            output.push_str(line);
            continue;
        }

        output.push_str(line_pattern);
        output.push('"');
        output.push_str(new_version);
        output.push('"');
        if line.ends_with('\n') {
            output.push('\n');
        }
    }

    output
}

/// Whether any line starts with `line_pattern`
pub fn declares(file_contents: &str, line_pattern: &str) -> bool {
    file_contents
        .lines()
        .any(|line| line.starts_with(line_pattern))
}

/// Value declared on the first line starting with `line_pattern`, quotes stripped
pub fn read_version(file_contents: &str, line_pattern: &str) -> Option<String> {
    let line = file_contents
        .lines()
        .find(|line| line.starts_with(line_pattern))?;

    let value = line[line_pattern.len()..].trim();
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value);

    Some(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_single_line() {
        let text = "VERSION=\"0.1.0\"\nOTHER=\"x\"\n";
        assert_eq!(
            rewrite(text, "VERSION=", "0.2.0"),
            "VERSION=\"0.2.0\"\nOTHER=\"x\"\n"
        );
    }

    #[test]
    fn test_rewrite_no_match_is_identity() {
        let text = "NAME=\"tool\"\r\nOTHER=x\n\n";
        assert_eq!(rewrite(text, "VERSION=", "0.2.0"), text);
    }

    #[test]
    fn test_rewrite_multiple_matches() {
        let text = "VERSION=1\nkeep\nVERSION=\"2\" # comment\n";
        assert_eq!(
            rewrite(text, "VERSION=", "3.0.0"),
            "VERSION=\"3.0.0\"\nkeep\nVERSION=\"3.0.0\"\n"
        );
    }

    #[test]
    fn test_rewrite_without_trailing_newline() {
        assert_eq!(
            rewrite("export VERSION=old", "export VERSION=", "1.0.0"),
            "export VERSION=\"1.0.0\""
        );
    }

    #[test]
    fn test_rewrite_pattern_must_start_line() {
        let text = "# VERSION=\"0.1.0\"\n";
        assert_eq!(rewrite(text, "VERSION=", "0.2.0"), text);
    }

    #[test]
    fn test_rewrite_empty_input() {
        assert_eq!(rewrite("", "VERSION=", "1.0.0"), "");
    }

    #[test]
    fn test_declares() {
        assert!(declares("a\nVERSION=\"1\"\n", "VERSION="));
        assert!(!declares("a\nversion=\"1\"\n", "VERSION="));
    }

    #[test]
    fn test_read_version() {
        assert_eq!(
            read_version("X=1\nVERSION=\"0.4.2\"\n", "VERSION="),
            Some("0.4.2".to_string())
        );
        assert_eq!(
            read_version("VERSION='0.4.2'", "VERSION="),
            Some("0.4.2".to_string())
        );
        assert_eq!(
            read_version("VERSION=0.4.2\n", "VERSION="),
            Some("0.4.2".to_string())
        );
        assert_eq!(read_version("X=1\n", "VERSION="), None);
    }
}
