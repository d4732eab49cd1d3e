//! # PropertyZM Database Crate
//!
//! This crate acts as a high-level, application-specific interface to the
//! PostgreSQL database. It is the system's storage boundary.
//!
//! ## Architectural Principles
//!
//! - **Storage Adapter:** This crate encapsulates all database-specific
//!   logic. It hands the rest of the application client-shaped types from
//!   `core-types`, hiding the underlying SQL and the snake_case schema.
//! - **Parameterized Queries:** Every client-influenced value reaches SQL
//!   as a `$n` bind parameter; the query filter builder keeps placeholder
//!   numbering and bind order in lockstep.
//! - **Asynchronous & Pooled:** All operations are asynchronous and share a
//!   single bounded connection pool (`PgPool`) created at process start.
//!
//! ## Public API
//!
//! - `connect`: The async function to establish the database connection pool.
//! - `run_migrations`: The one-shot setup step that applies the schema and
//!   seed migrations.
//! - `PropertyCatalog`: Listing search, lookup and creation.
//! - `AccountService`: The composite account view and partial profile updates.
//! - `DbError` / `CreateError`: The specific error types returned from this crate.

// Declare the modules that constitute this crate.
pub mod account;
pub mod catalog;
pub mod connection;
pub mod error;
pub mod filter;
pub mod rows;

// Re-export the key components to create a clean, public-facing API.
pub use account::AccountService;
pub use catalog::PropertyCatalog;
pub use connection::{connect, run_migrations};
pub use error::{CreateError, DbError};
pub use filter::QueryFilter;

// The pool type is part of this crate's API surface; callers pass it from
// `connect` into the services without needing their own sqlx dependency.
pub use sqlx::PgPool;
