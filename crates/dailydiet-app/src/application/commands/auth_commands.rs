use crate::application::commands::command_handler::Command;
use crate::application::dtos::TokenPairDto;
use dailydiet_domain::shared::UserId;

/// Register user command
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Command for RegisterUserCommand {}

#[derive(Debug, Clone)]
pub struct RegisterUserResult {
    pub user_id: UserId,
}

/// Login command
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl Command for LoginCommand {}

pub type LoginResult = TokenPairDto;

/// Exchange a refresh token for a new token pair
#[derive(Debug, Clone)]
pub struct RefreshTokenCommand {
    pub refresh_token: String,
}

impl Command for RefreshTokenCommand {}

pub type RefreshTokenResult = TokenPairDto;

/// Revoke the user's refresh token
#[derive(Debug, Clone)]
pub struct LogoutCommand {
    pub user_id: UserId,
}

impl Command for LogoutCommand {}

pub type LogoutResult = ();
