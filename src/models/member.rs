//! Member model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Registered library member. Names are not unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub grade: String,
}

/// Create member request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateMember {
    pub name: String,
    pub grade: String,
}
