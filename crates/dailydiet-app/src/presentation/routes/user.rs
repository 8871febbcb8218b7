use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::application::commands::user_commands::*;
use crate::application::commands::CommandHandler;
use crate::application::dtos::UserProfileDto;
use crate::presentation::error::ApiResult;
use crate::presentation::extractors::{CurrentUser, JsonBody};
use crate::presentation::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

pub async fn get_profile(
    State(state): State<SharedState>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<UserProfileDto>> {
    Ok(Json(state.queries.user.profile(user_id).await?))
}

pub async fn update_profile(
    State(state): State<SharedState>,
    CurrentUser(user_id): CurrentUser,
    JsonBody(body): JsonBody<UpdateProfileRequest>,
) -> ApiResult<Json<Value>> {
    let profile = state
        .command_handlers
        .update_profile
        .handle(UpdateProfileCommand {
            user_id,
            username: body.username,
            email: body.email,
        })
        .await?;

    Ok(Json(json!({
        "message": "Profile updated successfully",
        "user": profile,
    })))
}

pub async fn change_password(
    State(state): State<SharedState>,
    CurrentUser(user_id): CurrentUser,
    JsonBody(body): JsonBody<ChangePasswordRequest>,
) -> ApiResult<Json<Value>> {
    state
        .command_handlers
        .change_password
        .handle(ChangePasswordCommand {
            user_id,
            current_password: body.current_password.unwrap_or_default(),
            new_password: body.new_password.unwrap_or_default(),
        })
        .await?;

    Ok(Json(json!({ "message": "Password updated successfully" })))
}

pub async fn follow(
    State(state): State<SharedState>,
    CurrentUser(follower_id): CurrentUser,
    Path(username): Path<String>,
) -> ApiResult<Json<Value>> {
    state
        .command_handlers
        .follow_user
        .handle(FollowUserCommand {
            follower_id,
            username: username.clone(),
        })
        .await?;

    Ok(Json(json!({ "message": format!("You are now following {}", username) })))
}

pub async fn unfollow(
    State(state): State<SharedState>,
    CurrentUser(follower_id): CurrentUser,
    Path(username): Path<String>,
) -> ApiResult<Json<Value>> {
    state
        .command_handlers
        .unfollow_user
        .handle(UnfollowUserCommand {
            follower_id,
            username: username.clone(),
        })
        .await?;

    Ok(Json(json!({ "message": format!("You have unfollowed {}", username) })))
}
