use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use releaser::cli::orchestration::{parse_version_file_arg, run_release_workflow, ReleaseWorkflowArgs};
use releaser::config::{self, LogLevel, Settings, VersionFileTarget};
use releaser::domain::version::validate;
use releaser::gateway::ReleaseFileGateway;
use releaser::git::{self, Git2Repository};
use releaser::logging::init_logging;
use releaser::ui;

#[derive(Parser)]
#[command(
    name = "releaser",
    version,
    about = "Keep changelog headers, version files and git tags in step for a release"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, global = true, help = "Compute changes without writing any file")]
    dry_run: bool,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check that a version looks like MAJOR.MINOR.PATCH
    Validate { version: String },

    /// Add or finalise the changelog header for a version
    Changelog {
        version: String,

        #[arg(short, long, help = "Changelog file (default from config)")]
        file: Option<PathBuf>,
    },

    /// Rewrite the version line of a version file
    VersionFile {
        file: PathBuf,

        #[arg(help = "Literal prefix of the version line, e.g. VERSION=")]
        pattern: String,

        version: String,
    },

    /// Print the version named by the changelog header (or a version file)
    CurrentVersion {
        #[arg(short, long, help = "Changelog file (default from config)")]
        file: Option<PathBuf>,

        #[arg(long, value_name = "FILE=PATTERN", value_parser = parse_version_file_arg, help = "Read from a version file instead")]
        version_file: Option<VersionFileTarget>,
    },

    /// Print the highest tag of the git repository
    LatestTag {
        #[arg(long, default_value = ".", help = "Directory inside the repository")]
        repo: PathBuf,
    },

    /// Update the changelog and every version file for a release
    Release {
        version: String,

        #[arg(short, long, help = "Changelog file (default from config)")]
        file: Option<PathBuf>,

        #[arg(long, value_name = "FILE=PATTERN", value_parser = parse_version_file_arg, help = "Version file to update (repeatable)")]
        version_file: Vec<VersionFileTarget>,

        #[arg(long, help = "Skip confirmation prompt")]
        force: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut settings = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };
    if args.dry_run {
        settings.dryrun = true;
    }
    if args.verbose {
        settings.log_level = LogLevel::Debug;
    }

    init_logging(settings.log_level);
    tracing::debug!(?settings, "settings resolved");

    if let Err(e) = run(args.command, &settings) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn run(command: Command, settings: &Settings) -> Result<()> {
    let gateway = ReleaseFileGateway::new(settings);

    match command {
        Command::Validate { version } => {
            validate(&version)?;
            ui::display_success(&format!("'{}' is a valid version", version));
        }
        Command::Changelog { version, file } => {
            let path = file.unwrap_or_else(|| settings.changelog_file.clone());
            let outcome = gateway.bump_changelog(&path, &version)?;
            ui::display_outcome(&path, outcome);
        }
        Command::VersionFile {
            file,
            pattern,
            version,
        } => {
            let outcome = gateway.bump_version_file(&file, &pattern, &version)?;
            ui::display_outcome(&file, outcome);
        }
        Command::CurrentVersion { file, version_file } => {
            let (source, found) = match version_file {
                Some(target) => (
                    target.path.clone(),
                    gateway.version_file_version(&target.path, &target.pattern)?,
                ),
                None => {
                    let path = file.unwrap_or_else(|| settings.changelog_file.clone());
                    let found = gateway.changelog_version(&path)?;
                    (path, found)
                }
            };
            match found {
                Some(version) => println!("{}", version),
                None => bail!("No version found in '{}'", source.display()),
            }
        }
        Command::LatestTag { repo } => {
            let repo = Git2Repository::discover(&repo)?;
            println!("{}", git::latest_tag(&repo)?);
        }
        Command::Release {
            version,
            file,
            version_file,
            force,
        } => {
            if !force
                && !settings.dryrun
                && !ui::confirm_action(&format!("Release version {}?", version))?
            {
                ui::display_status("Release cancelled by user.");
                return Ok(());
            }

            let result = run_release_workflow(
                ReleaseWorkflowArgs {
                    version,
                    changelog: file,
                    version_files: version_file,
                },
                &gateway,
            )?;

            let (changelog_path, changelog_outcome) = &result.changelog;
            ui::display_outcome(changelog_path, *changelog_outcome);
            for (path, outcome) in &result.version_files {
                ui::display_outcome(path, *outcome);
            }

            if result.dry_run {
                ui::display_status(&format!("Dry run for {} complete, nothing written", result.version));
            } else {
                ui::display_success(&format!("Release {} recorded", result.version));
            }
        }
    }

    Ok(())
}
