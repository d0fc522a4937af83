//! CLI command modules, one per subcommand group

pub mod article;
pub mod author;
pub mod db;
pub mod magazine;
pub mod stats;
pub mod tx;

use anyhow::Result;
use rusqlite::Connection;
use std::path::PathBuf;

/// Shared command context from the global flags
pub struct Context {
    pub db_path: PathBuf,
    pub json: bool,
}

impl Context {
    /// Open (and migrate) the database this invocation works on
    pub fn open_db(&self) -> Result<Connection> {
        if let Some(parent) = self.db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(newsroom_store::db::open(&self.db_path)?)
    }

    /// Print a serializable value as pretty JSON
    pub fn print_json<T: serde::Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
