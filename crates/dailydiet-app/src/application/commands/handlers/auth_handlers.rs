use async_trait::async_trait;
use chrono::{Duration, Utc};
use log::{info, warn};
use std::sync::Arc;

use crate::application::commands::auth_commands::*;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::dtos::TokenPairDto;
use dailydiet_domain::auth::{AccessTokenIssuer, PasswordHasher, RefreshTokenGenerator};
use dailydiet_domain::shared::DomainError;
use dailydiet_domain::user::{User, UserRepository};

/// Token services shared by the login and refresh handlers
#[derive(Clone)]
pub struct TokenServices {
    pub access_tokens: Arc<dyn AccessTokenIssuer>,
    pub refresh_tokens: Arc<dyn RefreshTokenGenerator>,
    pub access_token_ttl: Duration,
}

impl TokenServices {
    /// Issue an access token and rotate the refresh token on `user`.
    async fn issue_pair(
        &self,
        user_repo: &dyn UserRepository,
        mut user: User,
    ) -> Result<TokenPairDto, DomainError> {
        let user_id = user.persisted_id()?;
        let token = self.access_tokens.issue(user_id)?;
        let refresh_token = self.refresh_tokens.generate();

        user.issue_refresh_token(refresh_token.clone(), Utc::now());
        user_repo.update(&user).await?;

        Ok(TokenPairDto {
            token,
            refresh_token,
            expires_in: self.access_token_ttl.num_seconds(),
        })
    }
}

/// Register user command handler
pub struct RegisterUserCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl RegisterUserCommandHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
        }
    }
}

#[async_trait]
impl CommandHandler<RegisterUserCommand> for RegisterUserCommandHandler {
    type Result = RegisterUserResult;

    async fn handle(&self, cmd: RegisterUserCommand) -> Result<Self::Result, DomainError> {
        info!("Handling RegisterUserCommand for username: {}", cmd.username.trim());

        if cmd.username.trim().is_empty() || cmd.email.trim().is_empty() || cmd.password.is_empty()
        {
            return Err(DomainError::Validation(
                "Missing username, email or password".to_string(),
            ));
        }

        if self
            .user_repo
            .find_by_email(cmd.email.trim())
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict(
                "Email address already registered".to_string(),
            ));
        }
        if self
            .user_repo
            .find_by_username(cmd.username.trim())
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict("Username already taken".to_string()));
        }

        let password_hash = self.password_hasher.hash(&cmd.password)?;
        let user = User::register(cmd.username, cmd.email, password_hash)?;
        let user_id = self.user_repo.create(&user).await?;

        info!("User registered successfully: {} ({})", user.username(), user_id);

        Ok(RegisterUserResult { user_id })
    }
}

/// Login command handler
pub struct LoginCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    tokens: TokenServices,
}

impl LoginCommandHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        tokens: TokenServices,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            tokens,
        }
    }
}

#[async_trait]
impl CommandHandler<LoginCommand> for LoginCommandHandler {
    type Result = LoginResult;

    async fn handle(&self, cmd: LoginCommand) -> Result<Self::Result, DomainError> {
        if cmd.email.trim().is_empty() || cmd.password.is_empty() {
            return Err(DomainError::Validation(
                "Missing email or password".to_string(),
            ));
        }

        let user = match self.user_repo.find_by_email(cmd.email.trim()).await? {
            Some(user) if self.password_hasher.verify(&cmd.password, user.password_hash())? => {
                user
            }
            _ => {
                warn!("Failed login attempt for email: {}", cmd.email.trim());
                return Err(DomainError::InvalidCredentials(
                    "Invalid email or password".to_string(),
                ));
            }
        };

        let pair = self.tokens.issue_pair(self.user_repo.as_ref(), user).await?;
        info!("User logged in: {}", cmd.email.trim());
        Ok(pair)
    }
}

/// Refresh token command handler
pub struct RefreshTokenCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    tokens: TokenServices,
}

impl RefreshTokenCommandHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>, tokens: TokenServices) -> Self {
        Self { user_repo, tokens }
    }
}

#[async_trait]
impl CommandHandler<RefreshTokenCommand> for RefreshTokenCommandHandler {
    type Result = RefreshTokenResult;

    async fn handle(&self, cmd: RefreshTokenCommand) -> Result<Self::Result, DomainError> {
        let invalid = || DomainError::Unauthorized("Invalid or expired refresh token".to_string());

        if cmd.refresh_token.is_empty() {
            return Err(invalid());
        }

        let user = self
            .user_repo
            .find_by_refresh_token(&cmd.refresh_token)
            .await?
            .ok_or_else(invalid)?;

        if !user.has_valid_refresh_token(&cmd.refresh_token, Utc::now()) {
            return Err(invalid());
        }

        self.tokens.issue_pair(self.user_repo.as_ref(), user).await
    }
}

/// Logout command handler
pub struct LogoutCommandHandler {
    user_repo: Arc<dyn UserRepository>,
}

impl LogoutCommandHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl CommandHandler<LogoutCommand> for LogoutCommandHandler {
    type Result = LogoutResult;

    async fn handle(&self, cmd: LogoutCommand) -> Result<Self::Result, DomainError> {
        let mut user = self
            .user_repo
            .find_by_id(cmd.user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound("User not found".to_string()))?;

        user.revoke_refresh_token();
        self.user_repo.update(&user).await?;

        info!("User {} logged out", cmd.user_id);
        Ok(())
    }
}
