use anyhow::Result;
use clap::Parser;
use simcheck::cli::{AppContext, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Diagnostics go to stderr so output files and stdout stay clean.
    // Warnings (e.g. tokenizer truncation) show by default; RUST_LOG
    // overrides.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Build a context once, pass everywhere
    let ctx = AppContext {
        quiet: cli.quiet,
        no_color: cli.no_color,
        dry_run: cli.dry_run,
    };

    match cli.command {
        Commands::Compare(args) => simcheck::compare_run(args, &ctx),
        Commands::Batch(args) => simcheck::batch_run(args, &ctx),
        Commands::Init(args) => simcheck::infra::config::init(args, &ctx),
        Commands::Completions(args) => simcheck::completion::run(args),
    }
}
