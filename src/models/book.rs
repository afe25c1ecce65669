//! Book (catalog entry) model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book row from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Free-form category (novel, textbook, ...)
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub book_type: String,
}

/// Book with its derived availability, as shown in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookListing {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(rename = "type")]
    pub book_type: String,
    /// True when no active loan references this book
    pub available: bool,
}

/// Catalog row joined with its active loan count
#[derive(Debug, FromRow)]
pub(crate) struct BookListingRow {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[sqlx(rename = "type")]
    pub book_type: String,
    pub loan_count: i64,
}

impl From<BookListingRow> for BookListing {
    fn from(row: BookListingRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            author: row.author,
            book_type: row.book_type,
            available: row.loan_count == 0,
        }
    }
}

/// Create book request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    #[serde(rename = "type")]
    pub book_type: String,
}
