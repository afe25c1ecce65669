//! Catalog pages

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use maud::Markup;
use serde::Deserialize;

use super::PageResult;
use crate::{models::book::CreateBook, views, AppState};

/// Add-book form fields
#[derive(Debug, Deserialize)]
pub struct AddBookForm {
    pub title: String,
    pub author: String,
    #[serde(rename = "type")]
    pub book_type: String,
}

impl From<AddBookForm> for CreateBook {
    fn from(form: AddBookForm) -> Self {
        Self {
            title: form.title,
            author: form.author,
            book_type: form.book_type,
        }
    }
}

/// Catalog listing with availability
pub async fn list_books(State(state): State<AppState>) -> PageResult<Markup> {
    let books = state.services.catalog.list_books().await?;
    Ok(views::books::books(&books))
}

pub async fn add_book_form() -> Markup {
    views::books::add_book_form()
}

pub async fn add_book(State(state): State<AppState>, Form(form): Form<AddBookForm>) -> PageResult<Response> {
    state.services.catalog.add_book(&form.into()).await?;
    Ok(Redirect::to("/books").into_response())
}
