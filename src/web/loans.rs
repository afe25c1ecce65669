//! Borrowing pages

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use maud::Markup;
use serde::Deserialize;

use super::PageResult;
use crate::{
    error::{AppError, AppResult},
    models::{loan::CreateLoan, parse_record_id},
    views, AppState,
};

/// Borrow form fields, kept as typed text until validated
#[derive(Debug, Deserialize)]
pub struct BorrowBookForm {
    pub name: String,
    pub grade: String,
    pub book_id: String,
}

impl BorrowBookForm {
    /// Validate the typed fields. The book id is checked first so that an
    /// unknown book is always reported on the form, whatever the grade says.
    async fn into_loan(self, state: &AppState) -> AppResult<CreateLoan> {
        // An id that cannot be parsed can never name a book
        let book_id = parse_record_id(&self.book_id).ok_or(AppError::InvalidBookId)?;

        let grade = match self.grade.trim().parse() {
            Ok(grade) => grade,
            Err(_) => {
                if !state.services.catalog.book_exists(book_id).await? {
                    return Err(AppError::InvalidBookId);
                }
                return Err(AppError::BadRequest(format!(
                    "Grade must be a number, got {:?}",
                    self.grade
                )));
            }
        };

        Ok(CreateLoan {
            name: self.name,
            grade,
            book_id,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookForm {
    pub borrower_id: String,
}

pub async fn borrow_book_form() -> Markup {
    views::loans::borrow_book_form(None)
}

pub async fn borrow_book(State(state): State<AppState>, Form(form): Form<BorrowBookForm>) -> PageResult<Response> {
    let result = match form.into_loan(&state).await {
        Ok(loan) => state.services.loans.borrow_book(&loan).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(_) => Ok(Redirect::to("/borrowed_books").into_response()),
        Err(err) => match err.form_message() {
            Some(message) => Ok(views::loans::borrow_book_form(Some(&message)).into_response()),
            None => Err(err.into()),
        },
    }
}

/// Active loans
pub async fn list_borrowed_books(State(state): State<AppState>) -> PageResult<Markup> {
    let loans = state.services.loans.list_borrowed_books().await?;
    Ok(views::loans::borrowed_books(&loans))
}

pub async fn return_book_form() -> Markup {
    views::loans::return_book_form(None)
}

pub async fn return_book(State(state): State<AppState>, Form(form): Form<ReturnBookForm>) -> PageResult<Response> {
    let result = match parse_record_id(&form.borrower_id) {
        Some(id) => state.services.loans.return_book(id).await,
        None => Err(AppError::InvalidBorrowerId),
    };

    match result {
        Ok(_) => Ok(Redirect::to("/borrowed_books").into_response()),
        Err(err) => match err.form_message() {
            Some(message) => Ok(views::loans::return_book_form(Some(&message)).into_response()),
            None => Err(err.into()),
        },
    }
}
