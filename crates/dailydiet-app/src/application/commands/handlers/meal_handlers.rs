use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::meal_commands::*;
use crate::application::dtos::MealDto;
use dailydiet_domain::meal::{Meal, MealRepository};
use dailydiet_domain::shared::DomainError;

fn meal_not_found() -> DomainError {
    DomainError::MealNotFound(
        "Meal not found or you do not have permission to access it".to_string(),
    )
}

/// Create meal command handler
pub struct CreateMealCommandHandler {
    meal_repo: Arc<dyn MealRepository>,
}

impl CreateMealCommandHandler {
    pub fn new(meal_repo: Arc<dyn MealRepository>) -> Self {
        Self { meal_repo }
    }
}

#[async_trait]
impl CommandHandler<CreateMealCommand> for CreateMealCommandHandler {
    type Result = CreateMealResult;

    async fn handle(&self, cmd: CreateMealCommand) -> Result<Self::Result, DomainError> {
        let meal = Meal::create(cmd.user_id, cmd.draft)?;
        let meal_id = self.meal_repo.create(&meal).await?;
        let meal = meal.with_id(meal_id);

        info!("Meal {} registered for user {}", meal_id, cmd.user_id);
        Ok(MealDto::from(&meal))
    }
}

/// Update meal command handler
pub struct UpdateMealCommandHandler {
    meal_repo: Arc<dyn MealRepository>,
}

impl UpdateMealCommandHandler {
    pub fn new(meal_repo: Arc<dyn MealRepository>) -> Self {
        Self { meal_repo }
    }
}

#[async_trait]
impl CommandHandler<UpdateMealCommand> for UpdateMealCommandHandler {
    type Result = UpdateMealResult;

    async fn handle(&self, cmd: UpdateMealCommand) -> Result<Self::Result, DomainError> {
        let mut meal = self
            .meal_repo
            .find_by_id_for_user(cmd.meal_id, cmd.user_id)
            .await?
            .ok_or_else(meal_not_found)?;

        if cmd.changes.is_empty() {
            return Err(DomainError::Validation("No data provided".to_string()));
        }

        meal.apply(cmd.changes)?;
        self.meal_repo.update(&meal).await?;

        info!("Meal {} updated for user {}", cmd.meal_id, cmd.user_id);
        Ok(MealDto::from(&meal))
    }
}

/// Delete meal command handler
pub struct DeleteMealCommandHandler {
    meal_repo: Arc<dyn MealRepository>,
}

impl DeleteMealCommandHandler {
    pub fn new(meal_repo: Arc<dyn MealRepository>) -> Self {
        Self { meal_repo }
    }
}

#[async_trait]
impl CommandHandler<DeleteMealCommand> for DeleteMealCommandHandler {
    type Result = DeleteMealResult;

    async fn handle(&self, cmd: DeleteMealCommand) -> Result<Self::Result, DomainError> {
        self.meal_repo
            .find_by_id_for_user(cmd.meal_id, cmd.user_id)
            .await?
            .ok_or_else(meal_not_found)?;

        self.meal_repo.delete(cmd.meal_id, cmd.user_id).await?;

        info!("Meal {} deleted for user {}", cmd.meal_id, cmd.user_id);
        Ok(())
    }
}
