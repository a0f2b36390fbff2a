//! CLI frontend for the Bibliomancer divination engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bm",
    about = "Bibliomancer — three-coin I Ching divination",
    version,
    propagate_version = true
)]
struct Cli {
    /// Use the classic engine (name and one-line reading only)
    #[arg(long, global = true)]
    classic: bool,

    /// Engine to bind: classic or enhanced
    #[arg(short, long, global = true)]
    engine: Option<String>,

    /// RNG seed for reproducible castings
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a hexagram with three coins per line
    Cast {
        /// Question to weave the reading into
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Cast a hexagram and append it to a question
    Ask {
        /// The question
        query: String,
    },

    /// Show a hexagram by King Wen number
    Show {
        /// Hexagram number (1-64)
        number: u8,
    },

    /// Report catalog size, engine, and health
    Stats,

    /// List the eight trigrams, or one by name or symbol
    Trigrams {
        /// Trigram name, Chinese name, or symbol
        name: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = commands::Options {
        classic: cli.classic,
        engine: cli.engine,
        seed: cli.seed,
        json: cli.json,
    };

    let result = match cli.command {
        Commands::Cast { query: None } => commands::cast::run(&opts),
        Commands::Cast { query: Some(query) } => {
            commands::ask::run(&opts, &query, "cast --query")
        }
        Commands::Ask { query } => commands::ask::run(&opts, &query, "ask"),
        Commands::Show { number } => commands::show::run(&opts, number),
        Commands::Stats => commands::stats::run(&opts),
        Commands::Trigrams { name } => commands::trigrams::run(&opts, name.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
