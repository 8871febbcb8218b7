use std::sync::Arc;

use crate::application::dtos::UserProfileDto;
use dailydiet_domain::shared::{DomainError, UserId};
use dailydiet_domain::user::UserRepository;

/// User query service
pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn profile(&self, user_id: UserId) -> Result<UserProfileDto, DomainError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound("User not found".to_string()))?;
        UserProfileDto::try_from(&user)
    }
}
