//! Catalog management service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookListing, CreateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add a book to the catalog
    pub async fn add_book(&self, book: &CreateBook) -> AppResult<Book> {
        let created = self.repository.books.create(book).await?;
        tracing::info!(book_id = created.id, title = %created.title, "Book added");
        Ok(created)
    }

    /// List every book with its availability
    pub async fn list_books(&self) -> AppResult<Vec<BookListing>> {
        self.repository.books.list_with_availability().await
    }

    /// Get a single book with its availability
    pub async fn get_book(&self, id: i64) -> AppResult<BookListing> {
        let book = self
            .repository
            .books
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;
        let available = self.is_available(book.id).await?;

        Ok(BookListing {
            id: book.id,
            title: book.title,
            author: book.author,
            book_type: book.book_type,
            available,
        })
    }

    pub async fn book_exists(&self, id: i64) -> AppResult<bool> {
        Ok(self.repository.books.get_by_id(id).await?.is_some())
    }

    /// A book is available when no active loan references it
    pub async fn is_available(&self, book_id: i64) -> AppResult<bool> {
        Ok(self.repository.books.loan_count(book_id).await? == 0)
    }
}
