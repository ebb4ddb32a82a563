//! # Foodcourt Database Crate
//!
//! This crate acts as a high-level, application-specific interface to the
//! SQLite store holding the vendor and menu data.
//!
//! ## Architectural Principles
//!
//! - **Read-only adapter:** This crate encapsulates all database-specific
//!   logic and issues only `SELECT` statements. Schema creation and data
//!   loading belong to an external collaborator; the store file must already
//!   exist when the application starts.
//! - **Typed rows:** Store rows are mapped into explicit record structs
//!   (`Vendor`, `MenuItem`) at this boundary, so downstream code is
//!   statically checked instead of addressing columns by string name.
//! - **Scoped acquisition:** All operations go through a connection pool.
//!   A connection is acquired per query and returned on drop on every exit
//!   path, including error returns.
//!
//! ## Public API
//!
//! - `connect`: The async function to open the connection pool.
//! - `DbRepository`: The main struct that holds the connection pool and
//!   provides the read operations (`all_vendors`, `vendor_by_id`,
//!   `menu_items_for_vendor`).
//! - `distinct_catagories`: Derives the category set of a fetched menu.
//! - `DbError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::connect;
pub use error::DbError;
pub use repository::{distinct_catagories, DbRepository, MenuItem, Vendor};
