use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::application::commands::auth_commands::*;
use crate::application::commands::CommandHandler;
use crate::application::dtos::TokenPairDto;
use crate::presentation::error::ApiResult;
use crate::presentation::extractors::{ClientAddr, CurrentUser, JsonBody};
use crate::presentation::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: Option<String>,
}

pub async fn register(
    State(state): State<SharedState>,
    ClientAddr(client): ClientAddr,
    JsonBody(body): JsonBody<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    state.runtime.rate_limits.register.check(&client).await?;

    let result = state
        .command_handlers
        .register_user
        .handle(RegisterUserCommand {
            username: body.username.unwrap_or_default(),
            email: body.email.unwrap_or_default(),
            password: body.password.unwrap_or_default(),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User registered successfully",
            "user_id": result.user_id,
        })),
    ))
}

pub async fn login(
    State(state): State<SharedState>,
    ClientAddr(client): ClientAddr,
    JsonBody(body): JsonBody<LoginRequest>,
) -> ApiResult<Json<TokenPairDto>> {
    state.runtime.rate_limits.login.check(&client).await?;

    let pair = state
        .command_handlers
        .login
        .handle(LoginCommand {
            email: body.email.unwrap_or_default(),
            password: body.password.unwrap_or_default(),
        })
        .await?;
    Ok(Json(pair))
}

pub async fn refresh(
    State(state): State<SharedState>,
    JsonBody(body): JsonBody<RefreshRequest>,
) -> ApiResult<Json<TokenPairDto>> {
    let pair = state
        .command_handlers
        .refresh_token
        .handle(RefreshTokenCommand {
            refresh_token: body.refresh_token.unwrap_or_default(),
        })
        .await?;
    Ok(Json(pair))
}

pub async fn logout(
    State(state): State<SharedState>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<Value>> {
    state
        .command_handlers
        .logout
        .handle(LogoutCommand { user_id })
        .await?;
    Ok(Json(json!({ "message": "Logged out successfully" })))
}
