//! Data models for the catalog.
//!
//! - [`Author`]: a writer, identified by a sequential integer id
//! - [`Book`]: a title pointing at its author through `author_id`
//! - [`BookPatch`] / [`AuthorPatch`]: partial updates merged into stored records

mod author;
mod book;

pub use author::{Author, AuthorPatch};
pub use book::{Book, BookPatch};
