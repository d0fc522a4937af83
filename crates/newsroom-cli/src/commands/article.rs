//! Article commands

use anyhow::Result;
use clap::{Args, Subcommand};
use newsroom_store::repo::ArticleRepo;

use super::Context;

#[derive(Debug, Args)]
pub struct ArticleArgs {
    #[command(subcommand)]
    pub command: ArticleCommand,
}

#[derive(Debug, Subcommand)]
pub enum ArticleCommand {
    /// List all articles
    List,
    /// Create a new article
    Create {
        /// Article title
        title: String,
        /// Owning author id
        author_id: i64,
        /// Publishing magazine id
        magazine_id: i64,
        /// Body text
        #[arg(long, default_value = "")]
        content: String,
    },
    /// Show one article by id
    Show { id: i64 },
    /// Search articles by title substring
    Search { needle: String },
}

pub fn execute(ctx: &Context, args: ArticleArgs) -> Result<()> {
    let conn = ctx.open_db()?;

    match args.command {
        ArticleCommand::List => {
            let articles = ArticleRepo::all(&conn)?;
            if ctx.json {
                ctx.print_json(&articles)?;
            } else if articles.is_empty() {
                println!("No articles found.");
            } else {
                for article in articles {
                    print_with_relations(&conn, &article)?;
                }
            }
        }
        ArticleCommand::Create {
            title,
            author_id,
            magazine_id,
            content,
        } => {
            let article = ArticleRepo::create(&conn, &title, &content, author_id, magazine_id)?;
            if ctx.json {
                ctx.print_json(&article)?;
            } else {
                println!("Created {}", article);
            }
        }
        ArticleCommand::Show { id } => match ArticleRepo::find_by_id(&conn, id)? {
            Some(article) if ctx.json => ctx.print_json(&article)?,
            Some(article) => print_with_relations(&conn, &article)?,
            None => println!("Not found."),
        },
        ArticleCommand::Search { needle } => {
            let articles = ArticleRepo::find_by_title(&conn, &needle)?;
            if ctx.json {
                ctx.print_json(&articles)?;
            } else if articles.is_empty() {
                println!("No matching articles.");
            } else {
                for article in articles {
                    println!("{}", article);
                }
            }
        }
    }

    Ok(())
}

fn print_with_relations(conn: &rusqlite::Connection, article: &newsroom_core::Article) -> Result<()> {
    let author = ArticleRepo::author(conn, article)?;
    let magazine = ArticleRepo::magazine(conn, article)?;
    println!(
        "'{}' by {} in {}",
        article.title,
        author.map(|a| a.name).unwrap_or_else(|| "Unknown".to_string()),
        magazine.map(|m| m.name).unwrap_or_else(|| "Unknown".to_string()),
    );
    Ok(())
}
