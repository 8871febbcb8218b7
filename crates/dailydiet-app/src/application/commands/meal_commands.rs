use crate::application::commands::command_handler::Command;
use crate::application::dtos::MealDto;
use dailydiet_domain::meal::{MealChanges, MealDraft};
use dailydiet_domain::shared::{MealId, UserId};

/// Register meal command
#[derive(Debug, Clone)]
pub struct CreateMealCommand {
    pub user_id: UserId,
    pub draft: MealDraft,
}

impl Command for CreateMealCommand {}

pub type CreateMealResult = MealDto;

/// Update meal command
#[derive(Debug, Clone)]
pub struct UpdateMealCommand {
    pub user_id: UserId,
    pub meal_id: MealId,
    pub changes: MealChanges,
}

impl Command for UpdateMealCommand {}

pub type UpdateMealResult = MealDto;

/// Delete meal command
#[derive(Debug, Clone)]
pub struct DeleteMealCommand {
    pub user_id: UserId,
    pub meal_id: MealId,
}

impl Command for DeleteMealCommand {}

pub type DeleteMealResult = ();
