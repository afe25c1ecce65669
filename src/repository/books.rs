//! Books repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::AppResult,
    models::book::{Book, BookListing, BookListingRow, CreateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Insert a new book; fields are stored as given, empty strings included
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, type)
            VALUES (?, ?, ?)
            RETURNING id, title, author, type
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.book_type)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>("SELECT id, title, author, type FROM books WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }

    /// All books in insertion order, each with its availability
    pub async fn list_with_availability(&self) -> AppResult<Vec<BookListing>> {
        let rows = sqlx::query_as::<_, BookListingRow>(
            r#"
            SELECT b.id, b.title, b.author, b.type,
                   (SELECT COUNT(l.id) FROM borrowers l WHERE l.book_id = b.id) AS loan_count
            FROM books b
            ORDER BY b.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BookListing::from).collect())
    }

    /// Number of active loans referencing a book
    pub async fn loan_count(&self, book_id: i64) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(id) FROM borrowers WHERE book_id = ?")
            .bind(book_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_pool;

    fn new_book(title: &str) -> CreateBook {
        CreateBook {
            title: title.to_string(),
            author: "Anonymous".to_string(),
            book_type: "Novel".to_string(),
        }
    }

    #[tokio::test]
    async fn test_created_book_is_listed_last() {
        let repo = BooksRepository::new(test_pool().await);

        repo.create(&new_book("First")).await.unwrap();
        let created = repo
            .create(&CreateBook {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                book_type: "Science fiction".to_string(),
            })
            .await
            .unwrap();

        let books = repo.list_with_availability().await.unwrap();
        assert_eq!(books.len(), 2);
        let last = books.last().unwrap();
        assert_eq!(last.id, created.id);
        assert_eq!(last.title, "Dune");
        assert_eq!(last.author, "Frank Herbert");
        assert_eq!(last.book_type, "Science fiction");
        assert!(last.available);
    }

    #[tokio::test]
    async fn test_empty_fields_are_accepted() {
        let repo = BooksRepository::new(test_pool().await);

        let book = repo
            .create(&CreateBook {
                title: String::new(),
                author: String::new(),
                book_type: String::new(),
            })
            .await
            .unwrap();

        assert_eq!(repo.get_by_id(book.id).await.unwrap(), Some(book));
    }

    #[tokio::test]
    async fn test_availability_follows_loans() {
        let pool = test_pool().await;
        let repo = BooksRepository::new(pool.clone());
        let book = repo.create(&new_book("Matilda")).await.unwrap();

        assert_eq!(repo.loan_count(book.id).await.unwrap(), 0);

        for name in ["Ana", "Ben"] {
            sqlx::query(
                "INSERT INTO borrowers (name, grade, book_id, borrow_date, return_date) VALUES (?, 4, ?, '2024-01-01', '2024-01-15')",
            )
            .bind(name)
            .bind(book.id)
            .execute(&pool)
            .await
            .unwrap();
        }

        assert_eq!(repo.loan_count(book.id).await.unwrap(), 2);
        let books = repo.list_with_availability().await.unwrap();
        assert!(!books[0].available);
    }

    #[tokio::test]
    async fn test_unknown_book() {
        let repo = BooksRepository::new(test_pool().await);
        assert_eq!(repo.get_by_id(99).await.unwrap(), None);
    }
}
