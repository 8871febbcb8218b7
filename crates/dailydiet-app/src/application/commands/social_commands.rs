use crate::application::commands::command_handler::Command;
use crate::application::dtos::SharedItemDto;
use dailydiet_domain::shared::{MealId, UserId};

/// Share meals command
#[derive(Debug, Clone)]
pub struct ShareMealsCommand {
    pub user_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub meal_ids: Vec<MealId>,
}

impl Command for ShareMealsCommand {}

pub type ShareMealsResult = SharedItemDto;
