//! Loan management service

use chrono::{Local, NaiveDate};

use crate::{
    config::LibraryConfig,
    error::{AppError, AppResult},
    models::loan::{return_date_for, BorrowedBook, CreateLoan, Loan},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
    config: LibraryConfig,
}

impl LoansService {
    pub fn new(repository: Repository, config: LibraryConfig) -> Self {
        Self { repository, config }
    }

    /// Lend a book, starting today
    pub async fn borrow_book(&self, loan: &CreateLoan) -> AppResult<Loan> {
        self.borrow_book_on(loan, Local::now().date_naive()).await
    }

    /// Lend a book starting on the given date
    pub async fn borrow_book_on(&self, loan: &CreateLoan, borrow_date: NaiveDate) -> AppResult<Loan> {
        let return_date = return_date_for(borrow_date, self.config.loan_duration_days);

        let created = self
            .repository
            .loans
            .create(loan, borrow_date, return_date, !self.config.allow_double_borrow)
            .await?;

        tracing::info!(
            loan_id = created.id,
            book_id = created.book_id,
            %return_date,
            "Book borrowed"
        );
        Ok(created)
    }

    /// Get a single active loan
    pub async fn get_loan(&self, id: i64) -> AppResult<Loan> {
        self.repository
            .loans
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", id)))
    }

    /// Active loans with book and member details
    pub async fn list_borrowed_books(&self) -> AppResult<Vec<BorrowedBook>> {
        self.repository.loans.list_borrowed_books().await
    }

    /// Return a book; the loan record is discarded
    pub async fn return_book(&self, borrower_id: i64) -> AppResult<Loan> {
        let loan = self.repository.loans.delete(borrower_id).await?;
        tracing::info!(loan_id = loan.id, book_id = loan.book_id, "Book returned");
        Ok(loan)
    }

    /// Count active loans
    pub async fn count_active(&self) -> AppResult<i64> {
        self.repository.loans.count_active().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_pool;

    async fn service_with_book(config: LibraryConfig) -> (LoansService, i64) {
        let repository = Repository::new(test_pool().await);
        let book_id: i64 = sqlx::query_scalar(
            "INSERT INTO books (title, author, type) VALUES ('Coraline', 'Neil Gaiman', 'Novel') RETURNING id",
        )
        .fetch_one(&repository.pool)
        .await
        .unwrap();
        (LoansService::new(repository, config), book_id)
    }

    fn request(book_id: i64) -> CreateLoan {
        CreateLoan {
            name: "Ana Ruiz".to_string(),
            grade: 5,
            book_id,
        }
    }

    #[tokio::test]
    async fn test_borrow_sets_fourteen_day_return() {
        let (service, book_id) = service_with_book(LibraryConfig::default()).await;
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let loan = service.borrow_book_on(&request(book_id), start).await.unwrap();

        assert_eq!(loan.borrow_date, start);
        assert_eq!(loan.return_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[tokio::test]
    async fn test_borrow_today() {
        let (service, book_id) = service_with_book(LibraryConfig::default()).await;

        let loan = service.borrow_book(&request(book_id)).await.unwrap();

        assert_eq!((loan.return_date - loan.borrow_date).num_days(), 14);
    }

    #[tokio::test]
    async fn test_loan_duration_is_configurable() {
        let config = LibraryConfig {
            loan_duration_days: 21,
            ..LibraryConfig::default()
        };
        let (service, book_id) = service_with_book(config).await;
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let loan = service.borrow_book_on(&request(book_id), start).await.unwrap();
        assert_eq!(loan.return_date, NaiveDate::from_ymd_opt(2024, 1, 22).unwrap());
    }

    #[tokio::test]
    async fn test_strict_mode_refuses_second_loan() {
        let config = LibraryConfig {
            allow_double_borrow: false,
            ..LibraryConfig::default()
        };
        let (service, book_id) = service_with_book(config).await;

        service.borrow_book(&request(book_id)).await.unwrap();
        let err = service.borrow_book(&request(book_id)).await.unwrap_err();

        assert!(matches!(err, AppError::BookUnavailable(_)));
        assert_eq!(service.count_active().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_return_then_return_again() {
        let (service, book_id) = service_with_book(LibraryConfig::default()).await;
        let loan = service.borrow_book(&request(book_id)).await.unwrap();

        assert_eq!(service.get_loan(loan.id).await.unwrap(), loan);

        let returned = service.return_book(loan.id).await.unwrap();
        assert_eq!(returned.id, loan.id);
        assert_eq!(service.count_active().await.unwrap(), 0);

        let err = service.return_book(loan.id).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidBorrowerId));
        assert!(matches!(service.get_loan(loan.id).await, Err(AppError::NotFound(_))));
    }
}
