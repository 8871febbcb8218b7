use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::application::commands::social_commands::*;
use crate::application::commands::CommandHandler;
use crate::application::dtos::SharedItemDto;
use crate::presentation::error::ApiResult;
use crate::presentation::extractors::{CurrentUser, JsonBody};
use crate::presentation::state::SharedState;
use dailydiet_domain::shared::{MealId, SharedItemId};

#[derive(Debug, Deserialize)]
pub struct ShareRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
    pub meal_ids: Option<Vec<i64>>,
}

pub async fn share(
    State(state): State<SharedState>,
    CurrentUser(user_id): CurrentUser,
    JsonBody(body): JsonBody<ShareRequest>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let item = state
        .command_handlers
        .share_meals
        .handle(ShareMealsCommand {
            user_id,
            title: body.title.unwrap_or_default(),
            description: body.description,
            is_public: body.is_public.unwrap_or(false),
            meal_ids: body
                .meal_ids
                .unwrap_or_default()
                .into_iter()
                .map(MealId::new)
                .collect(),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Meals shared successfully",
            "shared_item": item,
        })),
    ))
}

pub async fn get_shared_item(
    State(state): State<SharedState>,
    CurrentUser(viewer): CurrentUser,
    Path(item_id): Path<i64>,
) -> ApiResult<Json<SharedItemDto>> {
    let item = state
        .queries
        .social
        .get_shared_item(viewer, SharedItemId::new(item_id))
        .await?;
    Ok(Json(item))
}

pub async fn feed(
    State(state): State<SharedState>,
    CurrentUser(viewer): CurrentUser,
) -> ApiResult<Json<Vec<SharedItemDto>>> {
    Ok(Json(state.queries.social.feed(viewer).await?))
}
