use std::sync::Arc;

use crate::application::dtos::SharedItemDto;
use dailydiet_domain::shared::{DomainError, SharedItemId, UserId};
use dailydiet_domain::social::{FollowRepository, SharedItemRepository, SocialDomainService};

/// Social query service
pub struct SocialQueryService {
    shared_item_repo: Arc<dyn SharedItemRepository>,
    follow_repo: Arc<dyn FollowRepository>,
}

impl SocialQueryService {
    pub fn new(
        shared_item_repo: Arc<dyn SharedItemRepository>,
        follow_repo: Arc<dyn FollowRepository>,
    ) -> Self {
        Self {
            shared_item_repo,
            follow_repo,
        }
    }

    pub async fn get_shared_item(
        &self,
        viewer: UserId,
        item_id: SharedItemId,
    ) -> Result<SharedItemDto, DomainError> {
        let item = self
            .shared_item_repo
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| DomainError::SharedItemNotFound("Shared item not found".to_string()))?;

        let follows_owner = if item.is_public() || item.user_id() == viewer {
            false
        } else {
            self.follow_repo.is_following(viewer, item.user_id()).await?
        };
        SocialDomainService::ensure_can_view(&item, viewer, follows_owner)?;

        Ok(SharedItemDto::from(&item))
    }

    /// Items shared by the users `viewer` follows, newest first
    pub async fn feed(&self, viewer: UserId) -> Result<Vec<SharedItemDto>, DomainError> {
        let followed = self.follow_repo.followed_ids(viewer).await?;
        if followed.is_empty() {
            return Ok(Vec::new());
        }

        let items = self.shared_item_repo.find_by_owners(&followed).await?;
        Ok(items.iter().map(SharedItemDto::from).collect())
    }
}
