//! Release workflow orchestration
//!
//! Keeps the multi-file release sequence out of main.rs so it can be called
//! programmatically without depending on clap.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::{Settings, VersionFileTarget};
use crate::domain::version::validate;
use crate::gateway::{ReleaseFileGateway, WriteOutcome};

/// Arguments for the release workflow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReleaseWorkflowArgs {
    /// Version being released
    pub version: String,

    /// Changelog to update instead of the configured one
    pub changelog: Option<PathBuf>,

    /// Version files to update, ahead of the configured ones
    pub version_files: Vec<VersionFileTarget>,
}

/// Result of a successful release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The version that was released
    pub version: String,

    /// What happened to the changelog
    pub changelog: (PathBuf, WriteOutcome),

    /// What happened to each version file, in processing order
    pub version_files: Vec<(PathBuf, WriteOutcome)>,

    /// Whether writes were skipped
    pub dry_run: bool,
}

/// Main release workflow
///
/// 1. Validate the target version
/// 2. Bump the changelog
/// 3. Bump every version file
///
/// Stops at the first failure; files already written stay written.
pub fn run_release_workflow(
    args: ReleaseWorkflowArgs,
    gateway: &ReleaseFileGateway<'_>,
) -> Result<WorkflowResult> {
    validate(&args.version).with_context(|| format!("Cannot release '{}'", args.version))?;

    let settings: &Settings = gateway.settings();
    let changelog_path = args
        .changelog
        .unwrap_or_else(|| settings.changelog_file.clone());

    tracing::info!(version = %args.version, changelog = %changelog_path.display(), "starting release");

    let changelog_outcome = gateway
        .bump_changelog(&changelog_path, &args.version)
        .with_context(|| format!("Failed to update changelog '{}'", changelog_path.display()))?;

    let mut version_files = Vec::new();
    for target in args.version_files.iter().chain(settings.version_files.iter()) {
        let outcome = gateway
            .bump_version_file(&target.path, &target.pattern, &args.version)
            .with_context(|| format!("Failed to update version file '{}'", target.path.display()))?;
        version_files.push((target.path.clone(), outcome));
    }

    Ok(WorkflowResult {
        version: args.version,
        changelog: (changelog_path, changelog_outcome),
        version_files,
        dry_run: settings.dryrun,
    })
}

/// Parse a `FILE=PATTERN` command line value.
///
/// Splits on the first `=`, so the pattern may itself contain `=`,
/// e.g. `bin/tool=VERSION=`.
pub fn parse_version_file_arg(value: &str) -> std::result::Result<VersionFileTarget, String> {
    let (path, pattern) = value
        .split_once('=')
        .ok_or_else(|| format!("expected FILE=PATTERN, got '{}'", value))?;

    if path.is_empty() {
        return Err(format!("missing file in '{}'", value));
    }
    if pattern.is_empty() {
        return Err(format!("missing pattern in '{}'", value));
    }

    Ok(VersionFileTarget {
        path: PathBuf::from(path),
        pattern: pattern.to_string(),
    })
}
