//! Members repository

use sqlx::{Pool, Sqlite};

use crate::{
    error::AppResult,
    models::member::{CreateMember, Member},
};

#[derive(Clone)]
pub struct MembersRepository {
    pool: Pool<Sqlite>,
}

impl MembersRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Insert a new member. Duplicate names are allowed.
    pub async fn create(&self, member: &CreateMember) -> AppResult<Member> {
        let row = sqlx::query_as::<_, Member>(
            "INSERT INTO members (name, grade) VALUES (?, ?) RETURNING id, name, grade",
        )
        .bind(&member.name)
        .bind(&member.grade)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// All members in insertion order
    pub async fn list(&self) -> AppResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, Member>("SELECT id, name, grade FROM members ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_pool;

    #[tokio::test]
    async fn test_duplicate_names_are_kept() {
        let repo = MembersRepository::new(test_pool().await);

        for grade in ["5", "6"] {
            repo.create(&CreateMember {
                name: "Sam Lee".to_string(),
                grade: grade.to_string(),
            })
            .await
            .unwrap();
        }

        let members = repo.list().await.unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].grade, "5");
        assert_eq!(members[1].grade, "6");
        assert!(members[0].id < members[1].id);
    }
}
