//! Author commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use newsroom_store::repo::AuthorRepo;

use super::Context;

#[derive(Debug, Args)]
pub struct AuthorArgs {
    #[command(subcommand)]
    pub command: AuthorCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuthorCommand {
    /// List all authors
    List,
    /// Create a new author
    Create {
        /// Author name
        name: String,
    },
    /// Find one author by id or exact name
    Find(FindArgs),
    /// List an author's articles
    Articles { id: i64 },
    /// List the distinct magazines an author has written for
    Magazines { id: i64 },
    /// List the distinct categories an author has written in
    Topics { id: i64 },
    /// Show the author with the most articles
    MostProlific,
}

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Author id
    #[arg(long, conflicts_with = "name")]
    pub id: Option<i64>,

    /// Exact author name
    #[arg(long)]
    pub name: Option<String>,
}

pub fn execute(ctx: &Context, args: AuthorArgs) -> Result<()> {
    let conn = ctx.open_db()?;

    match args.command {
        AuthorCommand::List => {
            let authors = AuthorRepo::all(&conn)?;
            if ctx.json {
                ctx.print_json(&authors)?;
            } else if authors.is_empty() {
                println!("No authors found.");
            } else {
                for author in authors {
                    println!("{}", author);
                }
            }
        }
        AuthorCommand::Create { name } => {
            let author = AuthorRepo::create(&conn, &name)?;
            if ctx.json {
                ctx.print_json(&author)?;
            } else {
                println!("Created {}", author);
            }
        }
        AuthorCommand::Find(find) => {
            let author = match (find.id, find.name) {
                (Some(id), _) => AuthorRepo::find_by_id(&conn, id)?,
                (None, Some(name)) => AuthorRepo::find_by_name(&conn, &name)?,
                (None, None) => bail!("pass --id or --name"),
            };
            match author {
                Some(author) if ctx.json => ctx.print_json(&author)?,
                Some(author) => println!("{}", author),
                None => println!("Not found."),
            }
        }
        AuthorCommand::Articles { id } => {
            let articles = AuthorRepo::articles(&conn, id)?;
            if ctx.json {
                ctx.print_json(&articles)?;
            } else {
                for article in articles {
                    println!("{}", article);
                }
            }
        }
        AuthorCommand::Magazines { id } => {
            let magazines = AuthorRepo::magazines(&conn, id)?;
            if ctx.json {
                ctx.print_json(&magazines)?;
            } else {
                for magazine in magazines {
                    println!("{}", magazine);
                }
            }
        }
        AuthorCommand::Topics { id } => {
            let topics = AuthorRepo::topic_areas(&conn, id)?;
            if ctx.json {
                ctx.print_json(&topics)?;
            } else {
                for topic in topics {
                    println!("{}", topic);
                }
            }
        }
        AuthorCommand::MostProlific => match AuthorRepo::most_prolific(&conn)? {
            Some(author) if ctx.json => ctx.print_json(&author)?,
            Some(author) => println!("{}", author),
            None => println!("No authors found."),
        },
    }

    Ok(())
}
