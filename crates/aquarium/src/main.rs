//! Aquarium - command-line client for the Aquarium lab automation service.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{config, get, items, login, post, samples};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// Aquarium - command-line client for the Aquarium lab automation service
#[derive(Parser)]
#[command(name = "aquarium")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Aquarium server URL (overrides config)
    #[arg(long, global = true, env = "AQUARIUM_URL")]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and print the session response
    Login(login::LoginArgs),

    /// Send an authenticated GET and print the raw body
    Get(get::GetArgs),

    /// Send an authenticated form POST and print the JSON reply
    Post(post::PostArgs),

    /// List sample names by sample type
    Samples(samples::SamplesArgs),

    /// List items of a sample in an object type
    Items(items::ItemsArgs),

    /// Configuration management
    Config(config::ConfigArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "aquarium=debug,aquarium_client=debug,aquarium_config=debug,warn"
    } else {
        "aquarium=info,aquarium_client=info,warn"
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(cli.verbose)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let loaded = aquarium_config::load_config(None)?;
    for warning in &loaded.warnings {
        tracing::warn!("{}", warning);
    }

    let mut settings = loaded.config;
    if let Some(url) = cli.url {
        settings.aquarium_url = Some(url);
    }

    let ctx = commands::Context {
        config: settings,
        json_output: cli.json,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Login(args) => login::run(args, &ctx).await,
        Commands::Get(args) => get::run(args, &ctx).await,
        Commands::Post(args) => post::run(args, &ctx).await,
        Commands::Samples(args) => samples::run(args, &ctx).await,
        Commands::Items(args) => items::run(args, &ctx).await,
        Commands::Config(args) => config::run(args, &ctx).await,
    }
}
