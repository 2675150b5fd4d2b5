use async_graphql::{Context, Object};

use crate::model;

use super::schema::store;

#[derive(Clone, Debug)]
pub struct Book(pub model::Book);

/// This represents a book written by an author
#[Object]
impl Book {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Id of the author. Published as a string although it is always an integer.
    async fn author_id(&self) -> String {
        self.0.author_id.to_string()
    }

    /// The author who wrote this book, if it exists
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        let store = store(ctx)?;
        Ok(store.author(Some(self.0.author_id), None).map(Into::into))
    }
}

impl From<model::Book> for Book {
    fn from(b: model::Book) -> Self {
        Self(b)
    }
}

#[derive(Clone, Debug)]
pub struct Author(pub model::Author);

/// Represents an Author
#[Object]
impl Author {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Books written by this author
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let store = store(ctx)?;
        Ok(store
            .books_by_author(self.0.id)
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self(a)
    }
}
