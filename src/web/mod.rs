//! HTML form handlers
//!
//! Every page is a GET that renders a listing or a form, and every form posts
//! back to the same path. Successful writes redirect to the matching listing.

pub mod books;
pub mod loans;
pub mod members;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use maud::Markup;

use crate::{error::AppError, views, AppState};

/// Error raised by a page handler, rendered as an HTML error page
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        let message = self.0.public_message();
        (status, views::error_page(&message)).into_response()
    }
}

pub type PageResult<T> = Result<T, PageError>;

/// Home page
pub async fn home(State(state): State<AppState>) -> PageResult<Markup> {
    let active_loans = state.services.loans.count_active().await?;
    Ok(views::home(active_loans))
}

/// Routes for the browser-facing pages
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/books", get(books::list_books))
        .route("/add_book", get(books::add_book_form).post(books::add_book))
        .route("/members", get(members::list_members))
        .route("/add_member", get(members::add_member_form).post(members::add_member))
        .route("/borrow_book", get(loans::borrow_book_form).post(loans::borrow_book))
        .route("/borrowed_books", get(loans::list_borrowed_books))
        .route("/return_book", get(loans::return_book_form).post(loans::return_book))
}
