//! Member endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::member::{CreateMember, Member},
    AppState,
};

/// List members
#[utoipa::path(
    get,
    path = "/members",
    tag = "members",
    responses(
        (status = 200, description = "All members in insertion order", body = Vec<Member>)
    )
)]
pub async fn list_members(State(state): State<AppState>) -> AppResult<Json<Vec<Member>>> {
    let members = state.services.members.list_members().await?;
    Ok(Json(members))
}

/// Register a member
#[utoipa::path(
    post,
    path = "/members",
    tag = "members",
    request_body = CreateMember,
    responses(
        (status = 201, description = "Member created", body = Member)
    )
)]
pub async fn create_member(
    State(state): State<AppState>,
    Json(data): Json<CreateMember>,
) -> AppResult<(StatusCode, Json<Member>)> {
    let member = state.services.members.add_member(&data).await?;
    Ok((StatusCode::CREATED, Json(member)))
}
