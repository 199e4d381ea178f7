//! Changelog header rules.
//!
//! Only the first line of a changelog is interpreted. It is parsed into a
//! [`ChangelogHeaderLine`] and [`compute_new_header`] decides how the top of the
//! document should change for a release.

use super::version::{is_valid, Version};
use chrono::NaiveDate;

const HEADER_PREFIX: &str = "### ";
const UNRELEASED_SUFFIX: &str = " - Unreleased";

/// Date format used in release headers, e.g. `2017-Apr-30`
pub const HEADER_DATE_FORMAT: &str = "%Y-%b-%d";

/// The recognised shapes of a changelog's first line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangelogHeaderLine {
    /// `### 0.1.0 (2017-Apr-29)`
    Released {
        version: String,
        date: Option<String>,
    },
    /// `### 0.1.0 - Unreleased`
    Unreleased { version: String },
    /// Anything else, including an empty line
    Other,
}

impl ChangelogHeaderLine {
    /// Parse a header line. Trailing whitespace and `\r` are ignored.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end();

        let Some(rest) = line.strip_prefix(HEADER_PREFIX) else {
            return ChangelogHeaderLine::Other;
        };

        // The unreleased marker wins over everything else, whatever it names.
        if let Some(version) = rest.strip_suffix(UNRELEASED_SUFFIX) {
            return ChangelogHeaderLine::Unreleased {
                version: version.trim().to_string(),
            };
        }

        let (token, tail) = match rest.find(char::is_whitespace) {
            Some(idx) => rest.split_at(idx),
            None => (rest, ""),
        };

        if is_valid(token) {
            ChangelogHeaderLine::Released {
                version: token.to_string(),
                date: parenthesised(tail),
            }
        } else {
            ChangelogHeaderLine::Other
        }
    }

    /// Version named by a recognised header
    pub fn version(&self) -> Option<&str> {
        match self {
            ChangelogHeaderLine::Released { version, .. }
            | ChangelogHeaderLine::Unreleased { version } => Some(version),
            ChangelogHeaderLine::Other => None,
        }
    }
}

fn parenthesised(text: &str) -> Option<String> {
    let start = text.find('(')?;
    let end = text[start..].find(')')? + start;
    Some(text[start + 1..end].to_string())
}

/// What to do with the top of the changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangelogUpdate {
    /// Leave the document untouched
    NoChange,
    /// Replace line 0 in place
    ReplaceFirstLine(String),
    /// Insert the line and a blank line before the existing content
    PrependLine(String),
}

impl ChangelogUpdate {
    /// Apply the update to a whole document.
    ///
    /// Returns `None` for [`ChangelogUpdate::NoChange`].
    pub fn apply(&self, document: &str) -> Option<String> {
        match self {
            ChangelogUpdate::NoChange => None,
            ChangelogUpdate::ReplaceFirstLine(line) => {
                let rest = document.find('\n').map_or("", |idx| {
                    let start = if document[..idx].ends_with('\r') { idx - 1 } else { idx };
                    &document[start..]
                });
                Some(format!("{}{}", line, rest))
            }
            ChangelogUpdate::PrependLine(line) => Some(format!("{}\n\n{}", line, document)),
        }
    }
}

/// Format the canonical header for a release
pub fn release_header(version: &Version, today: NaiveDate) -> String {
    format!(
        "{}{} ({})",
        HEADER_PREFIX,
        version,
        today.format(HEADER_DATE_FORMAT)
    )
}

/// Decide how the changelog header changes for `target`.
///
/// 1. An unreleased marker, whatever version it names, is finalised to `target` and `today`.
/// 2. A header already naming `target` as a whole token is left alone.
/// 3. Anything else gets a new header stacked above it.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use releaser::domain::header::{compute_new_header, ChangelogUpdate};
/// use releaser::domain::version::Version;
///
/// let today = NaiveDate::from_ymd_opt(2017, 4, 30).unwrap();
/// let target = Version::parse("0.2.0").unwrap();
/// assert_eq!(
///     compute_new_header("### 0.1.0 - Unreleased", &target, today),
///     ChangelogUpdate::ReplaceFirstLine("### 0.2.0 (2017-Apr-30)".to_string())
/// );
/// ```
pub fn compute_new_header(
    current_first_line: &str,
    target: &Version,
    today: NaiveDate,
) -> ChangelogUpdate {
    if let ChangelogHeaderLine::Unreleased { .. } = ChangelogHeaderLine::parse(current_first_line)
    {
        return ChangelogUpdate::ReplaceFirstLine(release_header(target, today));
    }

    if names_version(current_first_line, target) {
        ChangelogUpdate::NoChange
    } else {
        ChangelogUpdate::PrependLine(release_header(target, today))
    }
}

/// `### <target>` followed by whitespace or the end of the line.
///
/// Matched on the raw line because a target's suffix may itself contain whitespace.
fn names_version(line: &str, target: &Version) -> bool {
    line.trim_end_matches(['\r', '\n'])
        .strip_prefix(HEADER_PREFIX)
        .and_then(|rest| rest.strip_prefix(target.as_str()))
        .is_some_and(|tail| tail.is_empty() || tail.starts_with(char::is_whitespace))
}
