use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::application::commands::meal_commands::*;
use crate::application::commands::CommandHandler;
use crate::application::dtos::{BestSequenceDto, DietStatsDto, MealPageDto, MealReportDto};
use crate::application::queries::MealListParams;
use crate::application::ResultExt;
use crate::presentation::error::ApiResult;
use crate::presentation::extractors::{CurrentUser, JsonBody};
use crate::presentation::state::SharedState;
use dailydiet_domain::meal::{MealChanges, MealDraft, Nutrition};
use dailydiet_domain::shared::{DomainError, MealId};

/// Body of `POST /meals` and `PUT /meals/:id`
#[derive(Debug, Default, Deserialize)]
pub struct MealRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub datetime: Option<String>,
    pub is_on_diet: Option<bool>,
    pub category: Option<String>,
    pub calories: Option<i64>,
    pub protein_grams: Option<f64>,
    pub carbohydrates_grams: Option<f64>,
    pub fats_grams: Option<f64>,
    pub image_url: Option<String>,
}

impl MealRequest {
    fn into_draft(self) -> Result<MealDraft, DomainError> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("Missing required field: name".to_string());
        }
        if self.description.is_none() {
            missing.push("Missing required field: description".to_string());
        }
        if self.datetime.is_none() {
            missing.push("Missing required field: datetime".to_string());
        }
        if self.is_on_diet.is_none() {
            missing.push("Missing required field: is_on_diet".to_string());
        }
        if !missing.is_empty() {
            return Err(DomainError::ValidationFailed(missing));
        }

        Ok(MealDraft {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            datetime: self.datetime.unwrap_or_default(),
            is_on_diet: self.is_on_diet.unwrap_or_default(),
            category: self.category,
            nutrition: Nutrition {
                calories: self.calories,
                protein_grams: self.protein_grams,
                carbohydrates_grams: self.carbohydrates_grams,
                fats_grams: self.fats_grams,
            },
            image_url: self.image_url,
        })
    }

    fn into_changes(self) -> MealChanges {
        MealChanges {
            name: self.name,
            description: self.description,
            datetime: self.datetime,
            is_on_diet: self.is_on_diet,
            category: self.category,
            calories: self.calories,
            protein_grams: self.protein_grams,
            carbohydrates_grams: self.carbohydrates_grams,
            fats_grams: self.fats_grams,
            image_url: self.image_url,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListMealsQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub on_diet: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl ListMealsQuery {
    fn into_params(self) -> Result<MealListParams, DomainError> {
        Ok(MealListParams {
            start_date: self.start_date,
            end_date: self.end_date,
            on_diet: self.on_diet,
            page: parse_number(self.page, "page")?,
            per_page: parse_number(self.per_page, "per_page")?,
        })
    }
}

fn parse_number(value: Option<String>, what: &str) -> Result<Option<u32>, DomainError> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.trim().parse::<u32>().to_input_err(what))
        .transpose()
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub date: Option<String>,
    pub period: Option<String>,
}

pub async fn create_meal(
    State(state): State<SharedState>,
    CurrentUser(user_id): CurrentUser,
    JsonBody(body): JsonBody<MealRequest>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let meal = state
        .command_handlers
        .create_meal
        .handle(CreateMealCommand {
            user_id,
            draft: body.into_draft()?,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Meal registered successfully",
            "meal": meal,
        })),
    ))
}

pub async fn list_meals(
    State(state): State<SharedState>,
    CurrentUser(user_id): CurrentUser,
    Query(query): Query<ListMealsQuery>,
) -> ApiResult<Json<MealPageDto>> {
    let page = state
        .queries
        .meal
        .list_meals(user_id, query.into_params()?)
        .await?;
    Ok(Json(page))
}

pub async fn get_meal(
    State(state): State<SharedState>,
    CurrentUser(user_id): CurrentUser,
    Path(meal_id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let meal = state
        .queries
        .meal
        .get_meal(user_id, MealId::new(meal_id))
        .await?;
    Ok(Json(json!({ "meal": meal })))
}

pub async fn update_meal(
    State(state): State<SharedState>,
    CurrentUser(user_id): CurrentUser,
    Path(meal_id): Path<i64>,
    JsonBody(body): JsonBody<MealRequest>,
) -> ApiResult<Json<Value>> {
    let meal = state
        .command_handlers
        .update_meal
        .handle(UpdateMealCommand {
            user_id,
            meal_id: MealId::new(meal_id),
            changes: body.into_changes(),
        })
        .await?;

    Ok(Json(json!({
        "message": "Meal updated successfully",
        "meal": meal,
    })))
}

pub async fn delete_meal(
    State(state): State<SharedState>,
    CurrentUser(user_id): CurrentUser,
    Path(meal_id): Path<i64>,
) -> ApiResult<Json<Value>> {
    state
        .command_handlers
        .delete_meal
        .handle(DeleteMealCommand {
            user_id,
            meal_id: MealId::new(meal_id),
        })
        .await?;

    Ok(Json(json!({ "message": "Meal deleted successfully" })))
}

pub async fn stats(
    State(state): State<SharedState>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<DietStatsDto>> {
    Ok(Json(state.queries.meal.stats(user_id).await?))
}

pub async fn best_sequence(
    State(state): State<SharedState>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<BestSequenceDto>> {
    Ok(Json(state.queries.meal.best_sequence(user_id).await?))
}

pub async fn report(
    State(state): State<SharedState>,
    CurrentUser(user_id): CurrentUser,
    Query(query): Query<ReportQuery>,
) -> ApiResult<Json<MealReportDto>> {
    let report = state
        .queries
        .meal
        .report(user_id, query.date, query.period)
        .await?;
    Ok(Json(report))
}
