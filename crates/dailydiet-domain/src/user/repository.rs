use async_trait::async_trait;

use super::User;
use crate::shared::{DomainError, UserId};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Duplicate username or email yields `Conflict`.
    async fn create(&self, user: &User) -> Result<UserId, DomainError>;
    async fn update(&self, user: &User) -> Result<(), DomainError>;
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
    async fn find_by_refresh_token(&self, token: &str) -> Result<Option<User>, DomainError>;
}
