//! Database setup command
//!
//! Usage: newsroom db init [--seed]

use anyhow::Result;
use clap::{Args, Subcommand};

use super::Context;

#[derive(Debug, Args)]
pub struct DbArgs {
    #[command(subcommand)]
    pub command: DbCommand,
}

#[derive(Debug, Subcommand)]
pub enum DbCommand {
    /// Create the database file and apply migrations
    Init(InitArgs),
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Reset to the fixed sample data set after migrating
    #[arg(long)]
    pub seed: bool,
}

pub fn execute(ctx: &Context, args: DbArgs) -> Result<()> {
    match args.command {
        DbCommand::Init(init_args) => execute_init(ctx, init_args),
    }
}

fn execute_init(ctx: &Context, args: InitArgs) -> Result<()> {
    let mut conn = ctx.open_db()?;
    println!("Database ready at {}", ctx.db_path.display());

    if args.seed {
        let report = newsroom_store::seed::seed_sample_data(&mut conn)?;
        if ctx.json {
            ctx.print_json(&report)?;
        } else {
            println!(
                "Seeded {} authors, {} magazines, {} articles",
                report.authors, report.magazines, report.articles
            );
        }
    }

    Ok(())
}
