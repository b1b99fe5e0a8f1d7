use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::{AppContext, InitArgs};

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Drop comments and docstrings before comparison (default: false,
    /// meaning they are kept and scored like everything else)
    pub skip_docs_and_comments: bool,

    /// Batch runner defaults
    pub batch: BatchConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// File batch results are appended to
    pub output_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip_docs_and_comments: false,
            batch: BatchConfig::default(),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output_file: "results.txt".to_string(),
        }
    }
}

pub fn load_config() -> Result<Config> {
    let mut builder = config::Config::builder();

    // Load from config files in priority order
    let config_paths = ["simcheck.toml", ".simcheck.toml"];

    for path in &config_paths {
        if Path::new(path).exists() {
            builder = builder.add_source(config::File::with_name(path));
            break;
        }
    }

    // Add environment variables with SIMCHECK_ prefix
    builder = builder.add_source(config::Environment::with_prefix("SIMCHECK").separator("_"));

    let cfg = builder.build().context("Failed to load configuration")?;
    let parsed: Config = cfg
        .try_deserialize()
        .context("Failed to parse configuration")?;

    Ok(parsed)
}

pub fn init(args: InitArgs, ctx: &AppContext) -> Result<()> {
    let config_path = args.path.join("simcheck.toml");

    if config_path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).context("Failed to serialize default config")?;

    std::fs::write(&config_path, toml_string).context("Failed to write config file")?;

    if !ctx.quiet {
        println!("Created config file at {}", config_path.display());
    }
    Ok(())
}
