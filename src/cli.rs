use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shared application context for global flags
#[derive(Clone, Debug)]
pub struct AppContext {
    pub quiet: bool,    // global --quiet
    pub no_color: bool, // global --no-color
    pub dry_run: bool,  // global --dry-run
}

#[derive(Parser)]
#[command(name = "simcheck")]
#[command(
    about = "A lightweight CLI that scores similarity between Python source files via frequency-weighted edit distance"
)]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Show what would be done without writing result files
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare one pair of source files and print the score
    Compare(CompareArgs),

    /// Compare many pairs listed in a manifest file
    Batch(BatchArgs),

    /// Initialize a simcheck.toml config file
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// Original source file
    pub source: PathBuf,

    /// Edited file to score against the original
    pub edited: PathBuf,

    /// Skip comments and docstrings during categorization (default: keep them)
    #[arg(long)]
    pub skip_docs: bool,

    /// Append the result line to this file in addition to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit JSON output (single line)
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// Manifest file: one "source edited" path pair per line
    pub manifest: PathBuf,

    /// Output file results are appended to
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip comments and docstrings during categorization (default: keep them)
    #[arg(long)]
    pub skip_docs: bool,
}

#[derive(Parser)]
pub struct InitArgs {
    /// Directory to initialize config in
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Parser)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,

    /// Output directory; if omitted and --stdout not set, prints error
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Print completion script to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}
