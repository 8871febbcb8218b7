use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::{decode_instant, encode_instant, SqliteRepositoryBase};
use dailydiet_domain::shared::{DomainError, UserId};
use dailydiet_domain::user::{User, UserRepository};

const USER_COLUMNS: &str =
    "id, username, email, password_hash, refresh_token, refresh_token_expires_at, created_at";

#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    refresh_token: Option<String>,
    refresh_token_expires_at: Option<String>,
    created_at: String,
}

impl UserRow {
    fn try_into_domain(self) -> Result<User, DomainError> {
        let refresh_token_expires_at = self
            .refresh_token_expires_at
            .as_deref()
            .map(|v| decode_instant(v, "refresh_token_expires_at"))
            .transpose()?;
        let created_at = decode_instant(&self.created_at, "created_at")?;

        Ok(User::restore(
            UserId::new(self.id),
            self.username,
            self.email,
            self.password_hash,
            self.refresh_token,
            refresh_token_expires_at,
            created_at,
        ))
    }
}

pub struct SqliteUserRepository {
    base: SqliteRepositoryBase,
}

impl SqliteUserRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }

    async fn find_one(
        &self,
        column: &str,
        value: &str,
        context: &str,
    ) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE {} = ?1", USER_COLUMNS, column);
        let row: Option<UserRow> = self
            .base
            .fetch_optional(sqlx::query_as(&query).bind(value), context)
            .await?;

        row.map(UserRow::try_into_domain).transpose()
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: &User) -> Result<UserId, DomainError> {
        let query = r#"
            INSERT INTO users (
                username, email, password_hash, refresh_token, refresh_token_expires_at, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#;

        let result = self
            .base
            .execute(
                sqlx::query(query)
                    .bind(user.username())
                    .bind(user.email())
                    .bind(user.password_hash())
                    .bind(user.refresh_token())
                    .bind(user.refresh_token_expires_at().map(encode_instant))
                    .bind(encode_instant(user.created_at())),
                "Create user",
            )
            .await?;

        Ok(UserId::new(result.last_insert_rowid()))
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let id = user.persisted_id()?;
        let query = r#"
            UPDATE users
            SET username = ?1, email = ?2, password_hash = ?3,
                refresh_token = ?4, refresh_token_expires_at = ?5
            WHERE id = ?6
        "#;

        let result = self
            .base
            .execute(
                sqlx::query(query)
                    .bind(user.username())
                    .bind(user.email())
                    .bind(user.password_hash())
                    .bind(user.refresh_token())
                    .bind(user.refresh_token_expires_at().map(encode_instant))
                    .bind(id.value()),
                "Update user",
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(format!("User {} not found", id)));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ?1", USER_COLUMNS);
        let row: Option<UserRow> = self
            .base
            .fetch_optional(sqlx::query_as(&query).bind(id.value()), "Find user by ID")
            .await?;

        row.map(UserRow::try_into_domain).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.find_one("email", email, "Find user by email").await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.find_one("username", username, "Find user by username")
            .await
    }

    async fn find_by_refresh_token(&self, token: &str) -> Result<Option<User>, DomainError> {
        self.find_one("refresh_token", token, "Find user by refresh token")
            .await
    }
}
