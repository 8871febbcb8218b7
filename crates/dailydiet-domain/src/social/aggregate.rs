use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::meal::Meal;
use crate::shared::{DomainError, MealId, SharedItemId, UserId};

const MAX_TITLE_LEN: usize = 100;

/// A titled selection of a user's meals, optionally public
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedItem {
    id: Option<SharedItemId>,
    user_id: UserId,
    title: String,
    description: Option<String>,
    is_public: bool,
    created_at: DateTime<Utc>,
    meals: Vec<Meal>,
}

impl SharedItem {
    /// Every meal must belong to `user_id`; a foreign meal is reported as not found.
    pub fn create(
        user_id: UserId,
        title: String,
        description: Option<String>,
        is_public: bool,
        meals: Vec<Meal>,
    ) -> Result<Self, DomainError> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(DomainError::Validation("Title is required".to_string()));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(DomainError::Validation(format!(
                "Title must be at most {} characters",
                MAX_TITLE_LEN
            )));
        }
        if meals.is_empty() {
            return Err(DomainError::Validation(
                "At least one meal is required".to_string(),
            ));
        }
        if let Some(foreign) = meals.iter().find(|m| !m.is_owned_by(user_id)) {
            return Err(DomainError::MealNotFound(format!(
                "Meal {} not found",
                foreign.id().map(|id| id.to_string()).unwrap_or_default()
            )));
        }

        Ok(Self {
            id: None,
            user_id,
            title,
            description: description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            is_public,
            created_at: Utc::now(),
            meals,
        })
    }

    pub fn restore(
        id: SharedItemId,
        user_id: UserId,
        title: String,
        description: Option<String>,
        is_public: bool,
        created_at: DateTime<Utc>,
        meals: Vec<Meal>,
    ) -> Self {
        Self {
            id: Some(id),
            user_id,
            title,
            description,
            is_public,
            created_at,
            meals,
        }
    }

    pub fn with_id(mut self, id: SharedItemId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<SharedItemId> {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn meal_ids(&self) -> Vec<MealId> {
        self.meals.iter().filter_map(|m| m.id()).collect()
    }
}
