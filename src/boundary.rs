use std::fmt;
use std::path::PathBuf;

/// Non-fatal outcomes of a release step that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseWarning {
    /// Changelog already names the target version
    ChangelogUpToDate { path: PathBuf, version: String },
    /// No line of the version file starts with the pattern
    PatternNotFound { path: PathBuf, pattern: String },
    /// A write was computed but skipped
    DryRunSkippedWrite { path: PathBuf },
}

impl fmt::Display for ReleaseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseWarning::ChangelogUpToDate { path, version } => write!(
                f,
                "Changelog '{}' already has an entry for {}",
                path.display(),
                version
            ),
            ReleaseWarning::PatternNotFound { path, pattern } => write!(
                f,
                "No line starting with '{}' in '{}'",
                pattern,
                path.display()
            ),
            ReleaseWarning::DryRunSkippedWrite { path } => {
                write!(f, "Dry run: not writing '{}'", path.display())
            }
        }
    }
}
