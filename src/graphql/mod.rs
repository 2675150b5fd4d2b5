//! GraphQL schema, resolvers and HTTP server for the catalog.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server (GraphiQL on http://127.0.0.1:5000/graphql)
//! bookshelf serve
//!
//! # Run a document against a fresh in-process store
//! bookshelf query '{ author(name: "jkrowling") { id name books { name } } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book`, `books`, `author`, `authors`
//! - **Mutations**: `addBook`, `addAuthor`, `updateBook`, `updateAuthor`
//!
//! `Book.author` and `Author.books` are resolved against the live store each
//! time they are selected; there is no batching.

mod schema;
mod server;
mod types;

pub use schema::{BookshelfSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{GRAPHQL_PATH, router, run_server, serve};
pub use types::*;
