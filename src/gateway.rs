//! Filesystem side of release bookkeeping.
//!
//! [`ReleaseFileGateway`] reads a changelog or version file, runs the pure rules
//! from [`crate::domain`], and writes the result back. The dry-run flag from
//! [`Settings`] is checked in one place, the private write step.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::NaiveDate;

use crate::boundary::ReleaseWarning;
use crate::config::Settings;
use crate::domain::header::{compute_new_header, ChangelogHeaderLine};
use crate::domain::version::Version;
use crate::domain::version_file;
use crate::error::{ReleaserError, Result};
use crate::ui;

/// Lines of new content shown when a dry run skips a write.
const PREVIEW_LINES: usize = 5;

/// What the gateway did with a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// New content was written
    Written,
    /// New content was computed but the write was skipped
    DryRun,
    /// Nothing needed to change
    Unchanged,
}

/// Reads, rewrites, and writes back changelog and version files.
pub struct ReleaseFileGateway<'a> {
    settings: &'a Settings,
    today: NaiveDate,
}

impl<'a> ReleaseFileGateway<'a> {
    /// Gateway dating release headers with the local current date
    pub fn new(settings: &'a Settings) -> Self {
        Self::with_date(settings, chrono::Local::now().date_naive())
    }

    /// Gateway dating release headers with a fixed date
    pub fn with_date(settings: &'a Settings, today: NaiveDate) -> Self {
        ReleaseFileGateway { settings, today }
    }

    pub fn settings(&self) -> &Settings {
        self.settings
    }

    /// Bring the changelog header in line with `target_version`.
    ///
    /// # Returns
    /// * `Ok(WriteOutcome)` - What happened to the file
    /// * `Err(InvalidVersion)` - The version is malformed
    /// * `Err(FileNotFound)` - The changelog does not exist
    pub fn bump_changelog(&self, path: &Path, target_version: &str) -> Result<WriteOutcome> {
        let target = Version::parse(target_version)?;
        let document = read_existing(path)?;
        let first_line = document.lines().next().unwrap_or("");

        let update = compute_new_header(first_line, &target, self.today);
        tracing::debug!(path = %path.display(), ?update, "computed changelog header");

        match update.apply(&document) {
            Some(new_document) => self.write_back(path, &new_document),
            None => {
                let warning = ReleaseWarning::ChangelogUpToDate {
                    path: path.to_path_buf(),
                    version: target.to_string(),
                };
                tracing::info!("{}", warning);
                Ok(WriteOutcome::Unchanged)
            }
        }
    }

    /// Rewrite every `pattern` line of a version file to declare `target_version`.
    ///
    /// A pattern that matches no line is reported and leaves the file alone.
    pub fn bump_version_file(
        &self,
        path: &Path,
        pattern: &str,
        target_version: &str,
    ) -> Result<WriteOutcome> {
        if pattern.is_empty() {
            tracing::error!(path = %path.display(), "no line pattern given");
            return Err(ReleaserError::missing_argument("line pattern"));
        }
        if target_version.is_empty() {
            tracing::error!(path = %path.display(), "no version given");
            return Err(ReleaserError::missing_argument("version"));
        }

        let contents = read_existing(path)?;

        if !version_file::declares(&contents, pattern) {
            let warning = ReleaseWarning::PatternNotFound {
                path: path.to_path_buf(),
                pattern: pattern.to_string(),
            };
            tracing::warn!("{}", warning);
            ui::display_release_warning(&warning);
            return Ok(WriteOutcome::Unchanged);
        }

        let rewritten = version_file::rewrite(&contents, pattern, target_version);
        if rewritten == contents {
            tracing::info!(path = %path.display(), version = target_version, "already declared");
            return Ok(WriteOutcome::Unchanged);
        }

        self.write_back(path, &rewritten)
    }

    /// Version named by the changelog header, released or not
    pub fn changelog_version(&self, path: &Path) -> Result<Option<String>> {
        let document = read_existing(path)?;
        let first_line = document.lines().next().unwrap_or("");
        Ok(ChangelogHeaderLine::parse(first_line)
            .version()
            .map(str::to_string))
    }

    /// Version declared on the first `pattern` line of a version file
    pub fn version_file_version(&self, path: &Path, pattern: &str) -> Result<Option<String>> {
        if pattern.is_empty() {
            return Err(ReleaserError::missing_argument("line pattern"));
        }
        let contents = read_existing(path)?;
        Ok(version_file::read_version(&contents, pattern))
    }

    fn write_back(&self, path: &Path, contents: &str) -> Result<WriteOutcome> {
        if self.settings.dryrun {
            let warning = ReleaseWarning::DryRunSkippedWrite {
                path: path.to_path_buf(),
            };
            tracing::info!(new_contents = %contents, "{}", warning);
            ui::display_dry_run_preview(path, contents, PREVIEW_LINES);
            return Ok(WriteOutcome::DryRun);
        }

        fs::write(path, contents)?;
        tracing::info!(path = %path.display(), "updated");
        Ok(WriteOutcome::Written)
    }
}

fn read_existing(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::error!(path = %path.display(), "file not found");
            Err(ReleaserError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}
