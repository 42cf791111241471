//! Masthead CLI - Query authors, magazines and articles from a roster file

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;
mod roster;

use commands::{author, completions, io, magazine};
use config::Config;
use masthead_store::MemoryRegistry;
use output::OutputFormat;
use roster::Roster;

#[derive(Parser)]
#[command(name = "masthead")]
#[command(author, version, about = "Query the authors, magazines and articles of a roster")]
pub struct Cli {
    /// Roster file (JSON)
    #[arg(short, long, env = "MASTHEAD_ROSTER", global = true)]
    pub roster: Option<PathBuf>,

    /// Output format: table, json
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the roster and report what it contains
    Check,
    /// Query an author
    Author(author::AuthorArgs),
    /// Query a magazine
    Magazine(magazine::MagazineArgs),
    /// Export every registered article as JSON
    Export(io::ExportArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context: a fresh registry populated from the roster
pub struct AppContext {
    pub registry: MemoryRegistry,
    pub roster: Roster,
    pub roster_path: PathBuf,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn new(cli: &Cli, config: &Config) -> anyhow::Result<Self> {
        let roster_path = cli
            .roster
            .clone()
            .or_else(|| config.roster.clone())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No roster file given. Pass --roster, set MASTHEAD_ROSTER, or run `masthead config set roster <FILE>`"
                )
            })?;

        let format = match cli.format.as_deref().or(config.format.as_deref()) {
            Some(f) => f.parse()?,
            None => OutputFormat::default(),
        };

        tracing::debug!("Using roster at: {:?}", roster_path);

        let registry = MemoryRegistry::new();
        let roster = Roster::load(&roster_path, &registry)?;

        Ok(Self {
            registry,
            roster,
            roster_path,
            format,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting masthead CLI");

    let config = Config::load();

    match &cli.command {
        Commands::Check => io::run_check(&AppContext::new(&cli, &config)?)?,
        Commands::Author(args) => author::run(args, &AppContext::new(&cli, &config)?)?,
        Commands::Magazine(args) => magazine::run(args, &AppContext::new(&cli, &config)?)?,
        Commands::Export(args) => io::run_export(args, &AppContext::new(&cli, &config)?)?,
        Commands::Config(args) => commands::config::run(args, config)?,
        Commands::Completions(args) => completions::run(args)?,
    }

    Ok(())
}
