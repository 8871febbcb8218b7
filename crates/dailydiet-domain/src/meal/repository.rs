use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::{Meal, ReportWindow};
use crate::shared::{DomainError, MealId, Page, PageRequest, UserId};

/// Optional listing filters; datetime bounds are inclusive
#[derive(Debug, Clone, Default)]
pub struct MealFilter {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub on_diet: Option<bool>,
}

#[async_trait]
pub trait MealRepository: Send + Sync {
    async fn create(&self, meal: &Meal) -> Result<MealId, DomainError>;
    async fn update(&self, meal: &Meal) -> Result<(), DomainError>;
    async fn delete(&self, id: MealId, user_id: UserId) -> Result<(), DomainError>;

    /// Only returns the meal when `user_id` owns it.
    async fn find_by_id_for_user(
        &self,
        id: MealId,
        user_id: UserId,
    ) -> Result<Option<Meal>, DomainError>;

    /// Meals among `ids` owned by `user_id`; foreign or unknown ids are skipped.
    async fn find_by_ids_for_user(
        &self,
        ids: &[MealId],
        user_id: UserId,
    ) -> Result<Vec<Meal>, DomainError>;

    /// Newest first.
    async fn find_page(
        &self,
        user_id: UserId,
        filter: &MealFilter,
        page: PageRequest,
    ) -> Result<Page<Meal>, DomainError>;

    /// Every meal of the user, oldest first. Streak computation relies on this order.
    async fn find_all_by_user_ordered(&self, user_id: UserId) -> Result<Vec<Meal>, DomainError>;

    /// Meals with `start <= datetime < end`, oldest first.
    async fn find_in_window(
        &self,
        user_id: UserId,
        window: &ReportWindow,
    ) -> Result<Vec<Meal>, DomainError>;
}
