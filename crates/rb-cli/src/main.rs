//! CLI frontend for the clearing battle odds engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::BattleArgs;

#[derive(Parser)]
#[command(
    name = "rb",
    about = "Root battle odds: exact loss distributions for two-die battles",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how often the two dice differ by each amount
    Odds {
        /// Print the distribution as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute the loss matrix and expected losses for a battle
    Battle {
        #[command(flatten)]
        battle: BattleArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Write the output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Roll the dice once and resolve a single battle
    Roll {
        #[command(flatten)]
        battle: BattleArgs,

        /// RNG seed (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List the faction presets
    Factions,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    // RUST_LOG wins when set; -v only picks the fallback level.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Odds { json } => commands::odds::run(json),
        Commands::Battle {
            battle,
            json,
            output,
        } => commands::battle::run(&battle, json, output.as_deref()),
        Commands::Roll { battle, seed } => commands::roll::run(&battle, seed),
        Commands::Factions => commands::factions::run(),
    };

    if let Err(e) = result {
        eprintln!("{e:?}");
        process::exit(1);
    }
}
