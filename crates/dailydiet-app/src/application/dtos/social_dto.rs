use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use super::MealDto;
use dailydiet_domain::shared::{SharedItemId, UserId};
use dailydiet_domain::social::SharedItem;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedItemDto {
    pub id: Option<SharedItemId>,
    pub user_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub created_at: String,
    pub meals: Vec<MealDto>,
}

impl From<&SharedItem> for SharedItemDto {
    fn from(item: &SharedItem) -> Self {
        Self {
            id: item.id(),
            user_id: item.user_id(),
            title: item.title().to_string(),
            description: item.description().map(str::to_string),
            is_public: item.is_public(),
            created_at: item.created_at().to_rfc3339_opts(SecondsFormat::AutoSi, true),
            meals: item.meals().iter().map(MealDto::from).collect(),
        }
    }
}
