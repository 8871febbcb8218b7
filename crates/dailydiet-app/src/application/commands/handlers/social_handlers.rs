use async_trait::async_trait;
use log::info;
use std::collections::HashSet;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::social_commands::*;
use crate::application::dtos::SharedItemDto;
use dailydiet_domain::meal::MealRepository;
use dailydiet_domain::shared::{DomainError, MealId};
use dailydiet_domain::social::{SharedItem, SharedItemRepository};

/// Share meals command handler
pub struct ShareMealsCommandHandler {
    meal_repo: Arc<dyn MealRepository>,
    shared_item_repo: Arc<dyn SharedItemRepository>,
}

impl ShareMealsCommandHandler {
    pub fn new(
        meal_repo: Arc<dyn MealRepository>,
        shared_item_repo: Arc<dyn SharedItemRepository>,
    ) -> Self {
        Self {
            meal_repo,
            shared_item_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<ShareMealsCommand> for ShareMealsCommandHandler {
    type Result = ShareMealsResult;

    async fn handle(&self, cmd: ShareMealsCommand) -> Result<Self::Result, DomainError> {
        if cmd.title.trim().is_empty() || cmd.meal_ids.is_empty() {
            return Err(DomainError::Validation(
                "Missing title or meal_ids".to_string(),
            ));
        }

        // repeated ids count once
        let mut seen = HashSet::new();
        let meal_ids: Vec<MealId> = cmd
            .meal_ids
            .into_iter()
            .filter(|id| seen.insert(*id))
            .collect();

        let meals = self
            .meal_repo
            .find_by_ids_for_user(&meal_ids, cmd.user_id)
            .await?;
        if meals.len() != meal_ids.len() {
            return Err(DomainError::MealNotFound(
                "One or more meals not found or do not belong to the user".to_string(),
            ));
        }

        let item =
            SharedItem::create(cmd.user_id, cmd.title, cmd.description, cmd.is_public, meals)?;
        let item_id = self.shared_item_repo.create(&item).await?;
        let item = item.with_id(item_id);

        info!(
            "User {} shared {} meal(s) as item {}",
            cmd.user_id,
            item.meals().len(),
            item_id
        );
        Ok(SharedItemDto::from(&item))
    }
}
