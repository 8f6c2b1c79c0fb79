//! CLI commands implementation.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use console::style;

use crate::config::AssetConfig;
use crate::helpers::AssetHelpers;
use crate::models::App;

#[derive(Parser, Debug)]
#[command(name = "app-assets")]
#[command(about = "Resolve icon, favicon and slug values for the app catalog")]
#[command(version)]
pub struct Cli {
    /// Base path prefixed to generated asset paths
    #[arg(long, global = true, env = "BASE_URL")]
    base: Option<String>,

    /// Config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Icon table file (.json or .toml), replaces the bundled tables
    #[arg(long, global = true)]
    icons: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Truncate text for display
    Slice {
        text: String,
        /// Maximum number of characters to keep
        length: usize,
    },

    /// Show protocol icon info as JSON (null when unknown)
    Protocol { name: String },

    /// Show the icon path for an alternative
    Alternative { name: String },

    /// Show the cached favicon path for a site URL
    Favicon { url: String },

    /// Derive the slug for an app name
    Slug { name: String },

    /// List known protocol and alternative names
    List,
}

/// Parse arguments and run.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    execute(cli, &mut stdout.lock())
}

fn build_config(cli: &Cli) -> anyhow::Result<AssetConfig> {
    let mut config = match &cli.config {
        Some(path) => AssetConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AssetConfig::from_env(),
    };

    if let Some(base) = &cli.base {
        config.base_url = base.clone();
    }
    if let Some(icons) = &cli.icons {
        config.icons_path = Some(icons.clone());
    }
    Ok(config)
}

/// Run a parsed command, writing results to `out`.
pub fn execute<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    let config = build_config(&cli)?;
    let helpers = AssetHelpers::from_config(&config).context("Failed to load icon tables")?;
    tracing::info!("Using base path {:?}", helpers.base());

    match cli.command {
        Commands::Slice { text, length } => {
            writeln!(out, "{}", helpers.slice_text(&text, length))?;
        }
        Commands::Protocol { name } => {
            let info = helpers.protocol_info(&name);
            writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
        }
        Commands::Alternative { name } => {
            writeln!(out, "{}", helpers.alternative_icon(&name))?;
        }
        Commands::Favicon { url } => {
            writeln!(out, "{}", helpers.favicon_path(&url))?;
        }
        Commands::Slug { name } => {
            writeln!(out, "{}", helpers.app_slug(&App::named(name)))?;
        }
        Commands::List => {
            let registry = helpers.registry();
            writeln!(out, "{}", style("Protocols").bold())?;
            for key in registry.protocols().keys() {
                writeln!(out, "  {}", key)?;
            }
            writeln!(out, "{}", style("Alternatives").bold())?;
            for key in registry.alternatives().keys() {
                writeln!(out, "  {}", key)?;
            }
        }
    }

    Ok(())
}
