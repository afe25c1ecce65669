//! Loans repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::loan::{BorrowedBook, CreateLoan, Loan},
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Sqlite>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get loan by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<Loan>> {
        let loan = sqlx::query_as::<_, Loan>("SELECT * FROM borrowers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(loan)
    }

    /// Create a new loan.
    ///
    /// The book lookup and the insert share one transaction. With
    /// `require_available` set, a book that already has a loan is refused.
    pub async fn create(
        &self,
        loan: &CreateLoan,
        borrow_date: NaiveDate,
        return_date: NaiveDate,
        require_available: bool,
    ) -> AppResult<Loan> {
        let mut tx = self.pool.begin().await?;

        let book_id: Option<i64> = sqlx::query_scalar("SELECT id FROM books WHERE id = ?")
            .bind(loan.book_id)
            .fetch_optional(&mut *tx)
            .await?;

        if book_id.is_none() {
            return Err(AppError::InvalidBookId);
        }

        if require_available {
            let on_loan: i64 = sqlx::query_scalar("SELECT COUNT(id) FROM borrowers WHERE book_id = ?")
                .bind(loan.book_id)
                .fetch_one(&mut *tx)
                .await?;

            if on_loan > 0 {
                return Err(AppError::BookUnavailable(loan.book_id));
            }
        }

        let created = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO borrowers (name, grade, book_id, borrow_date, return_date)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&loan.name)
        .bind(loan.grade)
        .bind(loan.book_id)
        .bind(borrow_date)
        .bind(return_date)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(created)
    }

    /// Return a loan: the row is deleted, no history is kept
    pub async fn delete(&self, id: i64) -> AppResult<Loan> {
        let mut tx = self.pool.begin().await?;

        let loan = sqlx::query_as::<_, Loan>("SELECT * FROM borrowers WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(AppError::InvalidBorrowerId)?;

        sqlx::query("DELETE FROM borrowers WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(loan)
    }

    /// Active loans joined with their book and with members of the same name.
    ///
    /// Loans whose name matches no member are left out; a name shared by
    /// several members yields one row per member.
    pub async fn list_borrowed_books(&self) -> AppResult<Vec<BorrowedBook>> {
        let rows = sqlx::query_as::<_, BorrowedBook>(
            r#"
            SELECT borrowers.id AS borrower_id, books.title, books.author,
                   members.name AS borrower_name,
                   borrowers.borrow_date, borrowers.return_date
            FROM books
            INNER JOIN borrowers ON books.id = borrowers.book_id
            INNER JOIN members ON borrowers.name = members.name
            ORDER BY borrowers.id, members.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Count active loans
    pub async fn count_active(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM borrowers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
