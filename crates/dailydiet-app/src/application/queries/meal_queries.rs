use chrono::Utc;
use std::sync::Arc;

use crate::application::dtos::{
    BestSequenceDto, DietStatsDto, MealDto, MealPageDto, MealReportDto,
};
use dailydiet_domain::meal::{
    find_longest_on_diet_streak, parse_date_bound, parse_report_date, DietStats, Granularity,
    MealFilter, MealReport, MealRepository, ReportWindow,
};
use dailydiet_domain::shared::{DomainError, MealId, PageRequest, UserId};

/// Raw listing parameters as they arrive in the query string
#[derive(Debug, Clone, Default)]
pub struct MealListParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub on_diet: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl MealListParams {
    fn filter(&self) -> Result<MealFilter, DomainError> {
        Ok(MealFilter {
            start: non_blank(&self.start_date).map(parse_date_bound).transpose()?,
            end: non_blank(&self.end_date).map(parse_date_bound).transpose()?,
            on_diet: non_blank(&self.on_diet).map(parse_flag).transpose()?,
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> Result<bool, DomainError> {
    match value.to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(DomainError::InvalidInput(format!(
            "on_diet must be 'true' or 'false', got '{}'",
            value
        ))),
    }
}

/// Meal query service
/// Read side of the meal endpoints: listing, statistics, streaks and reports
pub struct MealQueryService {
    meal_repo: Arc<dyn MealRepository>,
}

impl MealQueryService {
    pub fn new(meal_repo: Arc<dyn MealRepository>) -> Self {
        Self { meal_repo }
    }

    /// One page of the user's meals, newest first
    pub async fn list_meals(
        &self,
        user_id: UserId,
        params: MealListParams,
    ) -> Result<MealPageDto, DomainError> {
        let filter = params.filter()?;
        let page = PageRequest::new(params.page, params.per_page);

        let meals = self.meal_repo.find_page(user_id, &filter, page).await?;
        Ok(MealPageDto::new(user_id, meals))
    }

    pub async fn get_meal(&self, user_id: UserId, meal_id: MealId) -> Result<MealDto, DomainError> {
        self.meal_repo
            .find_by_id_for_user(meal_id, user_id)
            .await?
            .map(|meal| MealDto::from(&meal))
            .ok_or_else(|| {
                DomainError::MealNotFound(
                    "Meal not found or you do not have permission to view it".to_string(),
                )
            })
    }

    pub async fn stats(&self, user_id: UserId) -> Result<DietStatsDto, DomainError> {
        let meals = self.meal_repo.find_all_by_user_ordered(user_id).await?;
        Ok(DietStatsDto::new(user_id, DietStats::from_meals(&meals)))
    }

    /// Longest run of on-diet meals over the user's whole history
    pub async fn best_sequence(&self, user_id: UserId) -> Result<BestSequenceDto, DomainError> {
        let meals = self.meal_repo.find_all_by_user_ordered(user_id).await?;
        let streak = find_longest_on_diet_streak(&meals);

        log::debug!(
            "Best sequence for user {}: {} of {} meals",
            user_id,
            streak.length,
            meals.len()
        );
        Ok(BestSequenceDto::new(user_id, streak))
    }

    /// `date` defaults to today (UTC), `period` to daily.
    pub async fn report(
        &self,
        user_id: UserId,
        date: Option<String>,
        period: Option<String>,
    ) -> Result<MealReportDto, DomainError> {
        let reference_date = match non_blank(&date) {
            Some(value) => parse_report_date(value)?,
            None => Utc::now().date_naive(),
        };
        let granularity = match non_blank(&period) {
            Some(value) => value.parse::<Granularity>()?,
            None => Granularity::Daily,
        };

        let window = ReportWindow::build(reference_date, granularity)?;
        let meals = self.meal_repo.find_in_window(user_id, &window).await?;
        let report = MealReport::aggregate(granularity, window, &meals);

        Ok(MealReportDto::new(user_id, reference_date, report))
    }
}
