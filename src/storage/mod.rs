//! In-memory storage for the catalog.
//!
//! Nothing is persisted: every process starts from the same seed data and
//! loses its writes on exit.
//!
//! ## Components
//!
//! - [`LibraryStore`]: the read/create/update operations resolvers call
//! - [`MemoryStore`]: the lock-guarded implementation
//! - [`seed_authors`] / [`seed_books`]: the fixed sample data

mod repository;
mod seed;

pub use repository::{LibraryStore, MemoryStore, SharedStore};
pub use seed::{seed_authors, seed_books};
