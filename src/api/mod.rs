//! API handlers for the JSON endpoints

pub mod books;
pub mod health;
pub mod loans;
pub mod members;
pub mod openapi;

use axum::{
    routing::get,
    Router,
};

use crate::AppState;

/// Routes mounted under `/api/v1`
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Catalog
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/:id", get(books::get_book))
        // Members
        .route("/members", get(members::list_members).post(members::create_member))
        // Loans
        .route("/loans", get(loans::list_loans).post(loans::create_loan))
        .route("/loans/:id", get(loans::get_loan).delete(loans::return_loan))
}
