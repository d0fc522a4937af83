//! Statistics commands

use anyhow::Result;
use clap::{Args, Subcommand};
use newsroom_store::stats;

use super::Context;

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[command(subcommand)]
    pub command: StatsCommand,
}

#[derive(Debug, Subcommand)]
pub enum StatsCommand {
    /// Article counts per magazine (zero-article magazines included)
    Counts,
    /// Article counts per author
    AuthorCounts,
    /// Magazines with articles from at least 2 distinct authors
    MultiAuthor,
}

pub fn execute(ctx: &Context, args: StatsArgs) -> Result<()> {
    let conn = ctx.open_db()?;

    match args.command {
        StatsCommand::Counts => {
            let counts = stats::article_counts_by_magazine(&conn)?;
            if ctx.json {
                ctx.print_json(&counts)?;
            } else {
                for entry in counts {
                    println!(
                        "{:3} articles  {}",
                        entry.article_count, entry.magazine
                    );
                }
            }
        }
        StatsCommand::AuthorCounts => {
            let counts = stats::author_article_counts(&conn)?;
            if ctx.json {
                ctx.print_json(&counts)?;
            } else {
                for entry in counts {
                    println!("{:3} articles  {}", entry.article_count, entry.author);
                }
            }
        }
        StatsCommand::MultiAuthor => {
            let magazines = stats::magazines_with_multiple_authors(&conn)?;
            if ctx.json {
                ctx.print_json(&magazines)?;
            } else if magazines.is_empty() {
                println!("No magazines with multiple authors.");
            } else {
                for magazine in magazines {
                    println!("{}", magazine);
                }
            }
        }
    }

    Ok(())
}
