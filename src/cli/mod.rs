//! Command-line interface for gitgather

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::gather::{gather, GatherOutcome};

/// Concatenate git repository files for LLM context analysis
#[derive(Parser, Debug)]
#[command(name = "gitgather")]
#[command(
    author,
    version,
    about = "Concatenate git repository files for LLM context analysis",
    long_about = None
)]
pub struct Cli {
    /// Path to the git repository
    #[arg(value_name = "REPO_PATH")]
    pub repo_path: PathBuf,

    /// Output file path (created or overwritten)
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: PathBuf,

    /// Include all files, not just those tracked by git
    #[arg(long)]
    pub no_git: bool,

    /// Include all files, including hidden ones (overrides --no-dotfiles)
    #[arg(long)]
    pub all: bool,

    /// Exclude dotfiles
    #[arg(long)]
    pub no_dotfiles: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Include files matching this pattern (repeatable)
    #[arg(long, value_name = "PATTERN")]
    pub include: Vec<String>,

    /// Exclude files matching this pattern (repeatable)
    #[arg(long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Prepend a directory tree of the included files
    #[arg(long)]
    pub tree: bool,

    /// Path to config file (defaults to gitgather.toml in the repository)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            no_git: self.no_git.then_some(true),
            all: self.all.then_some(true),
            no_dotfiles: self.no_dotfiles.then_some(true),
            tree: self.tree.then_some(true),
            include: (!self.include.is_empty()).then(|| self.include.clone()),
            exclude: (!self.exclude.is_empty()).then(|| self.exclude.clone()),
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = log_filter(cli.verbose, std::env::var(EnvFilter::DEFAULT_ENV).ok());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let cwd = std::env::current_dir().context("Failed to determine the current directory")?;
    execute(&cli, &cwd)?;
    Ok(())
}

/// Tracing filter for a run.
///
/// A set `RUST_LOG` is used as given, with `--verbose` raising it to at least
/// DEBUG. Without it the level is DEBUG for `--verbose` and ERROR otherwise.
fn log_filter(verbose: bool, rust_log: Option<String>) -> EnvFilter {
    match rust_log.filter(|directives| !directives.trim().is_empty()) {
        Some(directives) => {
            let filter = EnvFilter::new(directives);
            let reaches_debug =
                matches!(filter.max_level_hint(), Some(max) if max >= LevelFilter::DEBUG);
            if verbose && !reaches_debug {
                filter.add_directive(Level::DEBUG.into())
            } else {
                filter
            }
        }
        None if verbose => EnvFilter::new("debug"),
        None => EnvFilter::new("error"),
    }
}

/// Run one invocation with paths resolved against `cwd`.
pub fn execute(cli: &Cli, cwd: &Path) -> Result<GatherOutcome> {
    let repo_path = cwd.join(&cli.repo_path);
    let output_file = cwd.join(&cli.output_file);
    let config_path = cli.config.as_ref().map(|path| cwd.join(path));

    let file_config = load_config(&repo_path, config_path.as_deref())?;
    let merged = merge_cli_with_config(file_config, cli.overrides());

    let outcome = gather(&repo_path, &output_file, &merged)
        .with_context(|| format!("Failed to gather '{}'", cli.repo_path.display()))?;
    Ok(outcome)
}
