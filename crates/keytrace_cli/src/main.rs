//! # Commands
//!
//! - `keytrace scan` - Scan a repository's full commit history for secrets
//! - `keytrace patterns` - List detection signatures

mod commands;
mod ui;

use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use console::style;

use crate::ui::colors;

const REPO_URL: &str = "https://github.com/keytrace/keytrace";

#[derive(Debug, Parser)]
#[command(
    name = "keytrace",
    version,
    styles = ui::clap_styles(),
    arg_required_else_help = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(visible_alias = "s")]
    Scan(ScanArgs),

    #[command(visible_alias = "p")]
    Patterns(PatternsArgs),
}

/// Output format for scan results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Arguments for the `keytrace scan` command.
#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// Path to the git repository to scan.
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Always exit with code 0, even when secrets are found.
    #[arg(long)]
    pub exit_zero: bool,
}

/// Arguments for the `keytrace patterns` command.
#[derive(Debug, Parser)]
pub struct PatternsArgs {
    /// Show signature details including the regular expression.
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() {
    #[cfg(feature = "tracing")]
    {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).without_time())
            .with(EnvFilter::from_default_env())
            .init();
    }

    let cli = parse_cli();

    if let Err(e) = run(cli.command) {
        ui::print_error(&format!("{e:#}"));
        std::process::exit(ui::exit::ERROR);
    }
}

fn parse_cli() -> Cli {
    let cmd = Cli::command().about(build_about()).after_help(build_after_help());

    let matches = cmd.get_matches();

    #[expect(clippy::expect_used, reason = "clap already validated args; this cannot fail")]
    Cli::from_arg_matches(&matches).expect("failed to parse arguments")
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Scan(args) => commands::scan::run(&args),
        Command::Patterns(args) => commands::patterns::run(args.verbose),
    }
}

fn build_about() -> String {
    format!(
        r"
  {} finds secrets that were ever committed to a git repository.

  Walks every commit, inspects the lines it added, and reports API
  keys, tokens, and private-key material with full provenance.",
        colors::accent().apply_to("keytrace").bold()
    )
}

fn build_after_help() -> String {
    format!(
        r"
  {}
    keytrace scan                  Scan the repository in the current directory
    keytrace scan path/to/repo     Scan a specific repository
    keytrace scan --format json    Output as JSON
    keytrace scan --exit-zero      Report findings without a failing exit code
    keytrace patterns              List detection signatures
    keytrace patterns --verbose    Show signature regular expressions

  Learn more: {}",
        style("Examples:").bold(),
        colors::accent().apply_to(REPO_URL).underlined()
    )
}
