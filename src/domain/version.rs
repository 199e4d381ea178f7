use crate::error::{ReleaserError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Prefix match only: anything but a line break may follow the third numeric group.
fn version_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)(.*)$").ok())
        .as_ref()
}

/// Same check as [`validate`] without logging, for probing arbitrary text.
pub fn is_valid(version: &str) -> bool {
    version_pattern().is_some_and(|re| re.is_match(version))
}

/// Checks that a string looks like `MAJOR.MINOR.PATCH`, optionally followed by a suffix.
///
/// # Returns
/// * `Ok(())` - The string starts with three dot-separated numeric groups
/// * `Err(InvalidVersion)` - The string is empty or lacks the numeric groups
///
/// # Example
/// ```
/// use releaser::domain::version::validate;
///
/// assert!(validate("1.2.3").is_ok());
/// assert!(validate("1.2.3-rc.1").is_ok());
/// assert!(validate("1.2").is_err());
/// ```
pub fn validate(version: &str) -> Result<()> {
    if version.is_empty() {
        tracing::error!("version string is empty");
        return Err(ReleaserError::invalid_version("version string is empty"));
    }

    if !is_valid(version) {
        tracing::error!(version, "version does not match MAJOR.MINOR.PATCH");
        return Err(ReleaserError::invalid_version(format!(
            "'{}' - expected MAJOR.MINOR.PATCH",
            version
        )));
    }

    Ok(())
}

/// Semantic version representation
///
/// Field order drives the derived ordering: (major, minor, patch) first, then the suffix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Free text following the third numeric group, e.g. `-rc.1`
    pub suffix: String,
    raw: String,
}

impl Version {
    /// Validate and split a version string
    pub fn parse(input: &str) -> Result<Self> {
        validate(input)?;

        if input.chars().any(char::is_control) {
            tracing::error!(version = input, "version contains control characters");
            return Err(ReleaserError::invalid_version(format!(
                "'{}' - control characters are not allowed",
                input.escape_debug()
            )));
        }

        let captures = version_pattern()
            .and_then(|re| re.captures(input))
            .ok_or_else(|| ReleaserError::invalid_version(input))?;

        let component = |index: usize| -> Result<u64> {
            captures[index].parse::<u64>().map_err(|_| {
                ReleaserError::invalid_version(format!(
                    "'{}' - numeric component out of range",
                    input
                ))
            })
        };

        Ok(Version {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
            suffix: captures[4].to_string(),
            raw: input.to_string(),
        })
    }

    /// The version text exactly as it was validated
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Version {
    type Err = ReleaserError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_plain_versions() {
        for v in ["0.0.0", "1.2.3", "10.20.30"] {
            assert!(validate(v).is_ok(), "{} should be valid", v);
        }
    }

    #[test]
    fn test_validate_accepts_trailing_text() {
        assert!(validate("1.2.3-beta.1").is_ok());
        assert!(validate("1.2.3+build.5").is_ok());
        assert!(validate("1.2.3.4").is_ok());
    }

    #[test]
    fn test_validate_rejects_empty() {
        let err = validate("").unwrap_err();
        assert!(matches!(err, ReleaserError::InvalidVersion(_)));
    }

    #[test]
    fn test_validate_rejects_malformed() {
        for v in ["1.2", "v1.2.3", "1..3", "a.b.c", " 1.2.3", "1.2.x"] {
            assert!(
                matches!(validate(v), Err(ReleaserError::InvalidVersion(_))),
                "{} should be rejected",
                v
            );
        }
    }

    #[test]
    fn test_version_parse_components() {
        let v = Version::parse("1.22.333-rc.1").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 22);
        assert_eq!(v.patch, 333);
        assert_eq!(v.suffix, "-rc.1");
    }

    #[test]
    fn test_version_display_keeps_input() {
        let v: Version = "0.2.0".parse().unwrap();
        assert_eq!(v.to_string(), "0.2.0");
        assert_eq!(v.as_str(), "0.2.0");
    }

    #[test]
    fn test_version_parse_overflow() {
        assert!(Version::parse("99999999999999999999999.0.0").is_err());
    }

    #[test]
    fn test_version_rejects_line_breaks() {
        assert!(validate("1.2.3\n### 9.9.9").is_err());
        assert!(Version::parse("1.2.3\n### 9.9.9").is_err());
        assert!(Version::parse("1.2.3\r").is_err());
        assert!(Version::parse("1.2.3\tbeta").is_err());
        assert!(Version::parse("1.2.3 beta").is_ok());
    }

    #[test]
    fn test_version_ordering() {
        let mut versions: Vec<Version> = ["0.10.0", "0.2.0", "1.0.0", "0.2.1"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        versions.sort();
        let sorted: Vec<String> = versions.iter().map(|v| v.to_string()).collect();
        assert_eq!(sorted, vec!["0.2.0", "0.2.1", "0.10.0", "1.0.0"]);
    }
}
