//! # Bookshelf - a GraphQL server over an in-memory catalog
//!
//! Two collections, authors and books, live in process memory and are seeded
//! with sample data at start. A GraphQL schema exposes lookups, listings,
//! creates and merging updates over them, and resolves the relations between
//! the two types on demand.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on http://127.0.0.1:5000/graphql (GraphiQL on GET)
//! bookshelf serve
//!
//! # One-off query against a fresh store
//! bookshelf query '{ books { name author { name } } }'
//!
//! # Print the schema
//! bookshelf schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: `.bookshelf.yml` loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: Schema, resolvers and the axum server
//! - [`model`]: `Author`, `Book` and their update patches
//! - [`search`]: Loose author-name matching
//! - [`storage`]: The in-memory store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.bookshelf.yml` files and upward discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `BookshelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP server.
pub mod graphql;

pub mod logging;

/// Data models for authors and books.
pub mod model;

pub mod search;

/// In-memory storage layer.
///
/// `LibraryStore` trait plus the lock-guarded `MemoryStore`.
pub mod storage;
