//! Loan (borrower record) model and related types

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Active loan, stored in the `borrowers` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub id: i64,
    /// Borrower name, matched against member names
    pub name: String,
    pub grade: i64,
    pub book_id: i64,
    pub borrow_date: NaiveDate,
    pub return_date: NaiveDate,
}

/// Create loan request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateLoan {
    pub name: String,
    pub grade: i64,
    pub book_id: i64,
}

/// Row of the borrowed-books listing (loan joined with its book and member)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowedBook {
    pub borrower_id: i64,
    pub title: String,
    pub author: String,
    pub borrower_name: String,
    pub borrow_date: NaiveDate,
    pub return_date: NaiveDate,
}

/// Date a loan started on `borrow_date` is due back
pub fn return_date_for(borrow_date: NaiveDate, loan_duration_days: u32) -> NaiveDate {
    borrow_date + Duration::days(loan_duration_days as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_date_is_two_weeks_later() {
        let borrowed = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(
            return_date_for(borrowed, 14),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_return_date_crosses_month_and_leap_day() {
        let borrowed = NaiveDate::from_ymd_opt(2024, 2, 20).unwrap();
        assert_eq!(
            return_date_for(borrowed, 14),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
        );
    }
}
