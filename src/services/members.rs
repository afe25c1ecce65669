//! Member registry service

use crate::{
    error::AppResult,
    models::member::{CreateMember, Member},
    repository::Repository,
};

#[derive(Clone)]
pub struct MembersService {
    repository: Repository,
}

impl MembersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn add_member(&self, member: &CreateMember) -> AppResult<Member> {
        let created = self.repository.members.create(member).await?;
        tracing::info!(member_id = created.id, "Member added");
        Ok(created)
    }

    pub async fn list_members(&self) -> AppResult<Vec<Member>> {
        self.repository.members.list().await
    }
}
