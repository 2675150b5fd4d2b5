use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Schema};

use crate::config::SchemaSettings;
use crate::error::BookshelfError;
use crate::model::{AuthorPatch, BookPatch};
use crate::storage::SharedStore;

use super::types::*;

pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: SharedStore, settings: &SchemaSettings) -> BookshelfSchema {
    let mut builder = Schema::build(QueryRoot, MutationRoot, EmptySubscription).data(store);

    if let Some(depth) = settings.max_depth {
        builder = builder.limit_depth(depth);
    }
    if let Some(complexity) = settings.max_complexity {
        builder = builder.limit_complexity(complexity);
    }

    builder.finish()
}

pub(super) fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}

impl ErrorExtensions for BookshelfError {
    fn extend(&self) -> async_graphql::Error {
        if let BookshelfError::NotFound { entity, id } = self {
            tracing::warn!(entity, id, "Update target not found");
        }
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// A single book
    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> async_graphql::Result<Option<Book>> {
        let store = store(ctx)?;
        Ok(id.and_then(|id| store.book(id)).map(Into::into))
    }

    /// List of books
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let store = store(ctx)?;
        Ok(store.books().into_iter().map(Into::into).collect())
    }

    /// A single Author
    async fn author(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
        name: Option<String>,
    ) -> async_graphql::Result<Option<Author>> {
        let store = store(ctx)?;
        Ok(store.author(id, name.as_deref()).map(Into::into))
    }

    /// List of Authors
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Author>> {
        let store = store(ctx)?;
        Ok(store.authors().into_iter().map(Into::into).collect())
    }
}

pub struct MutationRoot;

/// Root Mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        author_id: i32,
        name: String,
    ) -> async_graphql::Result<Book> {
        let store = store(ctx)?;
        Ok(store.add_book(author_id, name).into())
    }

    /// An Author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> async_graphql::Result<Author> {
        let store = store(ctx)?;
        Ok(store.add_author(name).into())
    }

    /// Update Book
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        id: i32,
        name: Option<String>,
        author_id: Option<i32>,
    ) -> async_graphql::Result<Book> {
        let store = store(ctx)?;
        let patch = BookPatch::default()
            .with_name(name)
            .with_author_id(author_id);
        store
            .update_book(id, patch)
            .map(Into::into)
            .map_err(|e| e.extend())
    }

    /// Update an Author
    async fn update_author(
        &self,
        ctx: &Context<'_>,
        id: i32,
        name: Option<String>,
    ) -> async_graphql::Result<Author> {
        let store = store(ctx)?;
        store
            .update_author(id, AuthorPatch::default().with_name(name))
            .map(Into::into)
            .map_err(|e| e.extend())
    }
}
