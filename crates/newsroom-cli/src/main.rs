//! Newsroom CLI
//!
//! Command-line interface over the newsroom data layer

use clap::{Parser, Subcommand};
use newsroom_core::logging::{self, Profile};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "newsroom")]
#[command(about = "Newsroom - Authors, magazines, and articles over SQLite", long_about = None)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, global = true, default_value = ".newsroom/newsroom.db")]
    db: PathBuf,

    /// Emit JSON instead of human-readable output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database setup (migrate, seed)
    Db(commands::db::DbArgs),
    /// Author queries and creation
    Author(commands::author::AuthorArgs),
    /// Magazine queries, creation, update, delete
    Magazine(commands::magazine::MagazineArgs),
    /// Article queries and creation
    Article(commands::article::ArticleArgs),
    /// Cross-entity statistics
    Stats(commands::stats::StatsArgs),
    /// Multi-statement transactional operations
    Tx(commands::tx::TxArgs),
}

fn main() {
    logging::init(Profile::Development);

    let cli = Cli::parse();
    let ctx = commands::Context {
        db_path: cli.db,
        json: cli.json,
    };

    let result = match cli.command {
        Commands::Db(args) => commands::db::execute(&ctx, args),
        Commands::Author(args) => commands::author::execute(&ctx, args),
        Commands::Magazine(args) => commands::magazine::execute(&ctx, args),
        Commands::Article(args) => commands::article::execute(&ctx, args),
        Commands::Stats(args) => commands::stats::execute(&ctx, args),
        Commands::Tx(args) => commands::tx::execute(&ctx, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
