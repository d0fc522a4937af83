//! Newsroom Core - Domain models and shared facilities
//!
//! This crate provides the foundational pieces for the newsroom data layer:
//! - Author, Magazine, and Article models with validation at construction
//!   and update boundaries
//! - Canonical error taxonomy with stable error codes
//! - Logging facility (single-init tracing setup)

pub mod errors;
pub mod logging;
pub mod model;

// Re-export commonly used types
pub use errors::{NewsroomError, Result};
pub use model::{Article, ArticleDraft, Author, Magazine};
