//! Magazine commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use newsroom_store::repo::MagazineRepo;

use super::Context;

#[derive(Debug, Args)]
pub struct MagazineArgs {
    #[command(subcommand)]
    pub command: MagazineCommand,
}

#[derive(Debug, Subcommand)]
pub enum MagazineCommand {
    /// List all magazines
    List,
    /// Create a new magazine
    Create {
        /// Magazine name
        name: String,
        /// Topic category
        category: String,
    },
    /// Find magazines by id, exact name, or category
    Find(FindArgs),
    /// List a magazine's articles
    Articles { id: i64 },
    /// List a magazine's article titles
    Titles { id: i64 },
    /// List the distinct authors who wrote for a magazine
    Contributors { id: i64 },
    /// List authors with more than 2 articles in a magazine
    ContributingAuthors { id: i64 },
    /// Show the magazine with the most articles
    TopPublisher,
    /// Partially update a magazine (only supplied fields change)
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete a magazine (rejected while it still has articles)
    Delete { id: i64 },
}

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Magazine id
    #[arg(long, conflicts_with_all = ["name", "category"])]
    pub id: Option<i64>,

    /// Exact magazine name
    #[arg(long, conflicts_with = "category")]
    pub name: Option<String>,

    /// Exact category (may match several magazines)
    #[arg(long)]
    pub category: Option<String>,
}

pub fn execute(ctx: &Context, args: MagazineArgs) -> Result<()> {
    let conn = ctx.open_db()?;

    match args.command {
        MagazineCommand::List => {
            let magazines = MagazineRepo::all(&conn)?;
            if ctx.json {
                ctx.print_json(&magazines)?;
            } else if magazines.is_empty() {
                println!("No magazines found.");
            } else {
                for magazine in magazines {
                    println!("{}", magazine);
                }
            }
        }
        MagazineCommand::Create { name, category } => {
            let magazine = MagazineRepo::create(&conn, &name, &category)?;
            if ctx.json {
                ctx.print_json(&magazine)?;
            } else {
                println!("Created {}", magazine);
            }
        }
        MagazineCommand::Find(find) => match (find.id, find.name, find.category) {
            (Some(id), _, _) => print_optional(ctx, MagazineRepo::find_by_id(&conn, id)?)?,
            (None, Some(name), _) => {
                print_optional(ctx, MagazineRepo::find_by_name(&conn, &name)?)?
            }
            (None, None, Some(category)) => {
                let magazines = MagazineRepo::find_by_category(&conn, &category)?;
                if ctx.json {
                    ctx.print_json(&magazines)?;
                } else if magazines.is_empty() {
                    println!("Not found.");
                } else {
                    for magazine in magazines {
                        println!("{}", magazine);
                    }
                }
            }
            (None, None, None) => bail!("pass --id, --name, or --category"),
        },
        MagazineCommand::Articles { id } => {
            let articles = MagazineRepo::articles(&conn, id)?;
            if ctx.json {
                ctx.print_json(&articles)?;
            } else {
                for article in articles {
                    println!("{}", article);
                }
            }
        }
        MagazineCommand::Titles { id } => {
            let titles = MagazineRepo::article_titles(&conn, id)?;
            if ctx.json {
                ctx.print_json(&titles)?;
            } else {
                for title in titles {
                    println!("{}", title);
                }
            }
        }
        MagazineCommand::Contributors { id } => {
            let authors = MagazineRepo::contributors(&conn, id)?;
            if ctx.json {
                ctx.print_json(&authors)?;
            } else {
                for author in authors {
                    println!("{}", author);
                }
            }
        }
        MagazineCommand::ContributingAuthors { id } => {
            let authors = MagazineRepo::contributing_authors(&conn, id)?;
            if ctx.json {
                ctx.print_json(&authors)?;
            } else if authors.is_empty() {
                println!("No authors with more than 2 articles.");
            } else {
                for author in authors {
                    println!("{}", author);
                }
            }
        }
        MagazineCommand::TopPublisher => print_optional(ctx, MagazineRepo::top_publisher(&conn)?)?,
        MagazineCommand::Update { id, name, category } => {
            let magazine =
                MagazineRepo::update(&conn, id, name.as_deref(), category.as_deref())?;
            if ctx.json {
                ctx.print_json(&magazine)?;
            } else {
                println!("Updated {}", magazine);
            }
        }
        MagazineCommand::Delete { id } => {
            MagazineRepo::delete(&conn, id)?;
            println!("Deleted magazine {}", id);
        }
    }

    Ok(())
}

fn print_optional(ctx: &Context, magazine: Option<newsroom_core::Magazine>) -> Result<()> {
    match magazine {
        Some(magazine) if ctx.json => ctx.print_json(&magazine)?,
        Some(magazine) => println!("{}", magazine),
        None => println!("Not found."),
    }
    Ok(())
}
