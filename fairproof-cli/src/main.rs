mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::CliConfig;
use fairproof_core::{GameRegistry, Verifier, VerifyError};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fairproof")]
#[command(about = "Provably fair game verifier - check outcomes against published commitments")]
#[command(version)]
struct Cli {
    /// Config file (defaults to <config dir>/fairproof/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify a game commitment
    Verify(commands::VerifyArgs),

    /// List dice rolls for a seed
    Roll(commands::RollArgs),

    /// List supported games and their inputs
    Games,

    /// Print the SHA-256 hex digest of a string
    Hash {
        /// Text to hash
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;

    // Initialize logging
    let log_level = if cli.verbose || config.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "fairproof={},fairproof_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Composition root: the only place games are wired to names
    let verifier = Verifier::new(GameRegistry::with_builtin_games(), config.verifier)?;

    // Execute command
    let result = match cli.command {
        Commands::Verify(args) => commands::handle_verify(args, &verifier).await,
        Commands::Roll(args) => commands::handle_roll(args).await.map(|_| true),
        Commands::Games => commands::handle_games(&verifier).map(|_| true),
        Commands::Hash { text } => commands::handle_hash(text).await.map(|_| true),
    };

    match result {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(2),
        Err(e) => {
            match &e {
                VerifyError::UnknownGame(name) => {
                    eprintln!("Error: Unknown game '{}'", name);
                    eprintln!(
                        "Available games: {}",
                        verifier.registry().accepted_names().join(", ")
                    );
                }
                VerifyError::MissingParam { name } => {
                    eprintln!("Error: Missing required parameter '{}'", name);
                    eprintln!("Use 'fairproof games' to see the inputs each game needs");
                }
                _ => {
                    eprintln!("Error: {}", e);
                }
            }
            std::process::exit(1);
        }
    }
}
