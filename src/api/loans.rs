//! Loan management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::loan::{BorrowedBook, CreateLoan, Loan},
    AppState,
};

/// Return response with the removed loan
#[derive(Serialize, ToSchema)]
pub struct ReturnResponse {
    /// Return status
    pub status: String,
    /// The loan as it was before removal
    pub loan: Loan,
}

/// List active loans
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 200, description = "Active loans whose borrower is a registered member", body = Vec<BorrowedBook>)
    )
)]
pub async fn list_loans(State(state): State<AppState>) -> AppResult<Json<Vec<BorrowedBook>>> {
    let loans = state.services.loans.list_borrowed_books().await?;
    Ok(Json(loans))
}

/// Create a new loan (borrow a book)
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = CreateLoan,
    responses(
        (status = 201, description = "Loan created", body = Loan),
        (status = 404, description = "Invalid book ID"),
        (status = 409, description = "Book already borrowed (only when double borrowing is disabled)")
    )
)]
pub async fn create_loan(
    State(state): State<AppState>,
    Json(request): Json<CreateLoan>,
) -> AppResult<(StatusCode, Json<Loan>)> {
    let loan = state.services.loans.borrow_book(&request).await?;
    Ok((StatusCode::CREATED, Json(loan)))
}

/// Get an active loan by ID
#[utoipa::path(
    get,
    path = "/loans/{id}",
    tag = "loans",
    params(("id" = i64, Path, description = "Borrower (loan) ID")),
    responses(
        (status = 200, description = "Loan details", body = Loan),
        (status = 404, description = "No active loan with this ID")
    )
)]
pub async fn get_loan(State(state): State<AppState>, Path(loan_id): Path<i64>) -> AppResult<Json<Loan>> {
    let loan = state.services.loans.get_loan(loan_id).await?;
    Ok(Json(loan))
}

/// Return a borrowed book
#[utoipa::path(
    delete,
    path = "/loans/{id}",
    tag = "loans",
    params(("id" = i64, Path, description = "Borrower (loan) ID")),
    responses(
        (status = 200, description = "Book returned", body = ReturnResponse),
        (status = 404, description = "Invalid borrower ID")
    )
)]
pub async fn return_loan(State(state): State<AppState>, Path(loan_id): Path<i64>) -> AppResult<Json<ReturnResponse>> {
    let loan = state.services.loans.return_book(loan_id).await?;

    Ok(Json(ReturnResponse {
        status: "returned".to_string(),
        loan,
    }))
}
