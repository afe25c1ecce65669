//! Database schema

use sqlx::{Pool, Sqlite};
use tracing::debug;

use crate::error::AppResult;

/// Create the library tables if they do not exist yet. Safe to run on every
/// start; an existing database is left untouched.
pub async fn bootstrap(pool: &Pool<Sqlite>) -> AppResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT,
            author TEXT,
            type TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS members (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            grade TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Dates are stored as YYYY-MM-DD text
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS borrowers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            grade INTEGER NOT NULL,
            book_id INTEGER NOT NULL,
            borrow_date TEXT NOT NULL,
            return_date TEXT NOT NULL,
            FOREIGN KEY (book_id) REFERENCES books (id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_borrowers_book ON borrowers(book_id)")
        .execute(pool)
        .await?;

    debug!("Database tables ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_pool;

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let pool = test_pool().await;

        sqlx::query("INSERT INTO books (title, author, type) VALUES ('Dune', 'Herbert', 'Novel')")
            .execute(&pool)
            .await
            .unwrap();

        bootstrap(&pool).await.unwrap();
        bootstrap(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_all_tables_exist() {
        let pool = test_pool().await;

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('books', 'members', 'borrowers') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        assert_eq!(tables, vec!["books", "borrowers", "members"]);
    }
}
