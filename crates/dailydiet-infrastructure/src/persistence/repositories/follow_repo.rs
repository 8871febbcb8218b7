use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::persistence::{RepositoryErrorMapper, SqliteRepositoryBase};
use dailydiet_domain::shared::{DomainError, UserId};
use dailydiet_domain::social::FollowRepository;

pub struct SqliteFollowRepository {
    base: SqliteRepositoryBase,
}

impl SqliteFollowRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl FollowRepository for SqliteFollowRepository {
    async fn follow(&self, follower: UserId, followed: UserId) -> Result<(), DomainError> {
        self.base
            .execute(
                sqlx::query(
                    "INSERT OR IGNORE INTO followers (follower_id, followed_id) VALUES (?1, ?2)",
                )
                .bind(follower.value())
                .bind(followed.value()),
                "Follow user",
            )
            .await?;
        Ok(())
    }

    async fn unfollow(&self, follower: UserId, followed: UserId) -> Result<(), DomainError> {
        self.base
            .execute(
                sqlx::query("DELETE FROM followers WHERE follower_id = ?1 AND followed_id = ?2")
                    .bind(follower.value())
                    .bind(followed.value()),
                "Unfollow user",
            )
            .await?;
        Ok(())
    }

    async fn is_following(&self, follower: UserId, followed: UserId) -> Result<bool, DomainError> {
        let exists: i64 = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM followers WHERE follower_id = ?1 AND followed_id = ?2)",
        )
        .bind(follower.value())
        .bind(followed.value())
        .fetch_one(self.base.pool())
        .await
        .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Check follow edge"))?;

        Ok(exists != 0)
    }

    async fn followed_ids(&self, follower: UserId) -> Result<Vec<UserId>, DomainError> {
        let ids: Vec<i64> = sqlx::query_scalar(
            "SELECT followed_id FROM followers WHERE follower_id = ?1 ORDER BY followed_id",
        )
        .bind(follower.value())
        .fetch_all(self.base.pool())
        .await
        .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "List followed users"))?;

        Ok(ids.into_iter().map(UserId::new).collect())
    }
}
