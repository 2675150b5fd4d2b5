use super::seed::{seed_authors, seed_books};
use crate::{
    error::{BookshelfError, Result},
    model::{Author, AuthorPatch, Book, BookPatch},
    search::NamePattern,
};
use parking_lot::RwLock;
use std::sync::Arc;

/// Store handle shared by the schema, the HTTP server and the CLI.
pub type SharedStore = Arc<dyn LibraryStore>;

/// Operations over the author and book collections.
///
/// Reads hand out owned snapshots; each call takes the store lock once, so a
/// single call never sees a half-applied write. Separate calls are not isolated
/// from each other.
pub trait LibraryStore: Send + Sync {
    /// First book with the given id.
    fn book(&self, id: i32) -> Option<Book>;

    /// All books in insertion order.
    fn books(&self) -> Vec<Book>;

    /// Books written by `author_id`, in insertion order.
    fn books_by_author(&self, author_id: i32) -> Vec<Book>;

    /// First author whose id equals `id` OR whose name matches the loose
    /// pattern built from `name`. Either argument may be absent.
    fn author(&self, id: Option<i32>, name: Option<&str>) -> Option<Author>;

    /// All authors in insertion order.
    fn authors(&self) -> Vec<Author>;

    /// Append a book under the next book id. `author_id` is not checked.
    fn add_book(&self, author_id: i32, name: String) -> Book;

    /// Append an author under the next author id.
    fn add_author(&self, name: String) -> Author;

    /// Merge `patch` into the stored book and return the result.
    ///
    /// # Errors
    /// [`BookshelfError::NotFound`] when no book has this id; nothing is written.
    fn update_book(&self, id: i32, patch: BookPatch) -> Result<Book>;

    /// Merge `patch` into the stored author and return the result.
    ///
    /// # Errors
    /// [`BookshelfError::NotFound`] when no author has this id; nothing is written.
    fn update_author(&self, id: i32, patch: AuthorPatch) -> Result<Author>;
}

#[derive(Debug, Default)]
struct Catalog {
    authors: Vec<Author>,
    books: Vec<Book>,
    next_author_id: i32,
    next_book_id: i32,
}

impl Catalog {
    fn take_author_id(&mut self) -> i32 {
        let id = self.next_author_id;
        self.next_author_id += 1;
        id
    }

    fn take_book_id(&mut self) -> i32 {
        let id = self.next_book_id;
        self.next_book_id += 1;
        id
    }
}

/// [`LibraryStore`] kept entirely in process memory.
///
/// Ids come from per-collection counters that start one past the highest
/// existing id and only ever grow, so they stay unique even if records were
/// ever removed.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Catalog>,
}

impl MemoryStore {
    pub fn new(authors: Vec<Author>, books: Vec<Book>) -> Self {
        let next_author_id = authors.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let next_book_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Catalog {
                authors,
                books,
                next_author_id,
                next_book_id,
            }),
        }
    }

    /// A store holding the fixed sample authors and books.
    pub fn seeded() -> Self {
        Self::new(seed_authors(), seed_books())
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(self)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl LibraryStore for MemoryStore {
    fn book(&self, id: i32) -> Option<Book> {
        self.inner.read().books.iter().find(|b| b.id == id).cloned()
    }

    fn books(&self) -> Vec<Book> {
        self.inner.read().books.clone()
    }

    fn books_by_author(&self, author_id: i32) -> Vec<Book> {
        self.inner
            .read()
            .books
            .iter()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect()
    }

    fn author(&self, id: Option<i32>, name: Option<&str>) -> Option<Author> {
        let pattern = name.and_then(NamePattern::new);
        self.inner
            .read()
            .authors
            .iter()
            .find(|a| {
                id == Some(a.id) || pattern.as_ref().is_some_and(|p| p.matches(&a.name))
            })
            .cloned()
    }

    fn authors(&self) -> Vec<Author> {
        self.inner.read().authors.clone()
    }

    fn add_book(&self, author_id: i32, name: String) -> Book {
        let mut catalog = self.inner.write();
        let book = Book::new(catalog.take_book_id(), name, author_id);
        catalog.books.push(book.clone());
        tracing::debug!(id = book.id, author_id, "Added book");
        book
    }

    fn add_author(&self, name: String) -> Author {
        let mut catalog = self.inner.write();
        let author = Author::new(catalog.take_author_id(), name);
        catalog.authors.push(author.clone());
        tracing::debug!(id = author.id, "Added author");
        author
    }

    fn update_book(&self, id: i32, patch: BookPatch) -> Result<Book> {
        let mut catalog = self.inner.write();
        let book = catalog
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(BookshelfError::NotFound { entity: "Book", id })?;
        book.apply(patch);
        tracing::debug!(id, "Updated book");
        Ok(book.clone())
    }

    fn update_author(&self, id: i32, patch: AuthorPatch) -> Result<Author> {
        let mut catalog = self.inner.write();
        let author = catalog
            .authors
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(BookshelfError::NotFound {
                entity: "Author",
                id,
            })?;
        author.apply(patch);
        tracing::debug!(id, "Updated author");
        Ok(author.clone())
    }
}
