//! Transactional operation commands
//!
//! Usage:
//!   newsroom tx add-author "Dr. Smith" --articles '[{"title":"A","magazine_id":1}]'
//!   newsroom tx delete-author 3
//!   newsroom tx transfer 1 2

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use newsroom_core::model::ArticleDraft;
use newsroom_store::transactions;

use super::Context;

#[derive(Debug, Args)]
pub struct TxArgs {
    #[command(subcommand)]
    pub command: TxCommand,
}

#[derive(Debug, Subcommand)]
pub enum TxCommand {
    /// Create an author and all their articles atomically
    AddAuthor {
        /// Author name
        name: String,
        /// Articles as a JSON array of {title, content?, magazine_id}
        #[arg(long)]
        articles: String,
    },
    /// Delete an author and all their articles atomically
    DeleteAuthor {
        /// Author id
        author_id: i64,
    },
    /// Move every article of one magazine to another
    Transfer {
        /// Source magazine id
        from_id: i64,
        /// Target magazine id
        to_id: i64,
    },
}

pub fn execute(ctx: &Context, args: TxArgs) -> Result<()> {
    let mut conn = ctx.open_db()?;

    match args.command {
        TxCommand::AddAuthor { name, articles } => {
            let drafts: Vec<ArticleDraft> = serde_json::from_str(&articles)
                .context("--articles must be a JSON array of {title, content?, magazine_id}")?;

            let report = transactions::add_author_with_articles(&mut conn, &name, &drafts)?;
            if ctx.json {
                ctx.print_json(&report)?;
            } else {
                println!(
                    "Created author {} with {} articles",
                    report.author_id, report.article_count
                );
            }
        }
        TxCommand::DeleteAuthor { author_id } => {
            let report = transactions::delete_author_and_articles(&mut conn, author_id)?;
            if ctx.json {
                ctx.print_json(&report)?;
            } else {
                println!(
                    "Deleted author {} and {} articles",
                    report.author_id, report.deleted_articles
                );
            }
        }
        TxCommand::Transfer { from_id, to_id } => {
            let report =
                transactions::transfer_articles_between_magazines(&mut conn, from_id, to_id)?;
            if ctx.json {
                ctx.print_json(&report)?;
            } else if let Some(note) = &report.note {
                println!("{}", note);
            } else {
                println!(
                    "Transferred {} articles from magazine {} to magazine {}",
                    report.transferred, report.from_magazine_id, report.to_magazine_id
                );
            }
        }
    }

    Ok(())
}
