//! Member pages

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use maud::Markup;
use serde::Deserialize;

use super::PageResult;
use crate::{models::member::CreateMember, views, AppState};

#[derive(Debug, Deserialize)]
pub struct AddMemberForm {
    pub name: String,
    pub grade: String,
}

pub async fn list_members(State(state): State<AppState>) -> PageResult<Markup> {
    let members = state.services.members.list_members().await?;
    Ok(views::members::members(&members))
}

pub async fn add_member_form() -> Markup {
    views::members::add_member_form()
}

pub async fn add_member(State(state): State<AppState>, Form(form): Form<AddMemberForm>) -> PageResult<Response> {
    let member = CreateMember {
        name: form.name,
        grade: form.grade,
    };
    state.services.members.add_member(&member).await?;
    Ok(Redirect::to("/members").into_response())
}
