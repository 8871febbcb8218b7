use async_trait::async_trait;

use super::SharedItem;
use crate::shared::{DomainError, SharedItemId, UserId};

#[async_trait]
pub trait SharedItemRepository: Send + Sync {
    /// Persist the item and its meal links atomically.
    async fn create(&self, item: &SharedItem) -> Result<SharedItemId, DomainError>;
    /// Loads the item with its meals, oldest meal first.
    async fn find_by_id(&self, id: SharedItemId) -> Result<Option<SharedItem>, DomainError>;
    /// Items owned by any of `owners`, newest first.
    async fn find_by_owners(&self, owners: &[UserId]) -> Result<Vec<SharedItem>, DomainError>;
}

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// No-op when the edge already exists.
    async fn follow(&self, follower: UserId, followed: UserId) -> Result<(), DomainError>;
    /// No-op when there is no edge.
    async fn unfollow(&self, follower: UserId, followed: UserId) -> Result<(), DomainError>;
    async fn is_following(&self, follower: UserId, followed: UserId) -> Result<bool, DomainError>;
    async fn followed_ids(&self, follower: UserId) -> Result<Vec<UserId>, DomainError>;
}
