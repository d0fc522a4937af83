//! Newsroom Store - SQLite persistence layer
//!
//! Provides:
//! - Connection provider with foreign-key enforcement
//! - Embedded SQL migrations with checksums
//! - Per-entity repositories (authors, magazines, articles)
//! - Multi-statement transactional operations
//! - Cross-entity aggregation queries
//! - Sample-data seeding

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod seed;
pub mod stats;
pub mod transactions;

// Re-export key types
pub use errors::Result;
pub use repo::{ArticleRepo, AuthorRepo, MagazineRepo};
