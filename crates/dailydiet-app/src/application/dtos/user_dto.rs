use serde::{Deserialize, Serialize};

use dailydiet_domain::shared::{DomainError, UserId};
use dailydiet_domain::user::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfileDto {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

impl TryFrom<&User> for UserProfileDto {
    type Error = DomainError;

    fn try_from(user: &User) -> Result<Self, Self::Error> {
        Ok(Self {
            id: user.persisted_id()?,
            username: user.username().to_string(),
            email: user.email().to_string(),
        })
    }
}
