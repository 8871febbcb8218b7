use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use dailydiet_domain::meal::{DietStats, Meal, MealReport, StreakResult};
use dailydiet_domain::shared::{MealId, Page, UserId};

fn iso(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealDto {
    pub id: Option<MealId>,
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub datetime: String,
    pub is_on_diet: bool,
    pub category: Option<String>,
    pub calories: Option<i64>,
    pub protein_grams: Option<f64>,
    pub carbohydrates_grams: Option<f64>,
    pub fats_grams: Option<f64>,
    pub image_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Meal> for MealDto {
    fn from(meal: &Meal) -> Self {
        let nutrition = meal.nutrition();
        Self {
            id: meal.id(),
            user_id: meal.user_id(),
            name: meal.name().to_string(),
            description: meal.description().to_string(),
            datetime: iso(meal.datetime()),
            is_on_diet: meal.is_on_diet(),
            category: meal.category().map(str::to_string),
            calories: nutrition.calories,
            protein_grams: nutrition.protein_grams,
            carbohydrates_grams: nutrition.carbohydrates_grams,
            fats_grams: nutrition.fats_grams,
            image_url: meal.image_url().map(str::to_string),
            created_at: iso(meal.created_at()),
            updated_at: iso(meal.updated_at()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPageDto {
    pub user_id: UserId,
    pub total_meals: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
    pub meals: Vec<MealDto>,
}

impl MealPageDto {
    pub fn new(user_id: UserId, page: Page<Meal>) -> Self {
        Self {
            user_id,
            total_meals: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages(),
            has_next: page.has_next(),
            has_prev: page.has_prev(),
            meals: page.items.iter().map(MealDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietStatsDto {
    pub user_id: UserId,
    pub total_meals: u32,
    pub on_diet_meals: u32,
    pub off_diet_meals: u32,
    pub on_diet_percentage: f64,
}

impl DietStatsDto {
    pub fn new(user_id: UserId, stats: DietStats) -> Self {
        Self {
            user_id,
            total_meals: stats.total_meals,
            on_diet_meals: stats.on_diet_meals,
            off_diet_meals: stats.off_diet_meals,
            on_diet_percentage: stats.on_diet_percentage,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestSequenceDto {
    pub user_id: UserId,
    pub best_sequence: u32,
    pub meals: Vec<MealDto>,
}

impl BestSequenceDto {
    pub fn new(user_id: UserId, streak: StreakResult) -> Self {
        Self {
            user_id,
            best_sequence: streak.length,
            meals: streak.meals.iter().map(MealDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealReportDto {
    pub user_id: UserId,
    pub period: String,
    pub date: String,
    pub start: String,
    pub end: String,
    pub total_meals: u32,
    pub on_diet_meals: u32,
    pub total_calories: i64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fats: f64,
    pub average_calories_per_meal: f64,
}

impl MealReportDto {
    pub fn new(user_id: UserId, date: chrono::NaiveDate, report: MealReport) -> Self {
        Self {
            user_id,
            period: report.granularity.as_str().to_string(),
            date: date.format("%Y-%m-%d").to_string(),
            start: iso(report.start),
            end: iso(report.end),
            total_meals: report.total_meals,
            on_diet_meals: report.on_diet_meals,
            total_calories: report.total_calories,
            total_protein: report.total_protein,
            total_carbs: report.total_carbs,
            total_fats: report.total_fats,
            average_calories_per_meal: report.average_calories_per_meal,
        }
    }
}
