use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::user_commands::*;
use crate::application::dtos::UserProfileDto;
use dailydiet_domain::auth::PasswordHasher;
use dailydiet_domain::shared::{DomainError, UserId};
use dailydiet_domain::social::{FollowRepository, SocialDomainService};
use dailydiet_domain::user::{User, UserRepository};

async fn load_user(repo: &dyn UserRepository, id: UserId) -> Result<User, DomainError> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::UserNotFound("User not found".to_string()))
}

async fn load_user_by_name(repo: &dyn UserRepository, username: &str) -> Result<User, DomainError> {
    repo.find_by_username(username)
        .await?
        .ok_or_else(|| DomainError::UserNotFound("User not found".to_string()))
}

/// Update profile command handler
pub struct UpdateProfileCommandHandler {
    user_repo: Arc<dyn UserRepository>,
}

impl UpdateProfileCommandHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl CommandHandler<UpdateProfileCommand> for UpdateProfileCommandHandler {
    type Result = UpdateProfileResult;

    async fn handle(&self, cmd: UpdateProfileCommand) -> Result<Self::Result, DomainError> {
        info!("Handling UpdateProfileCommand for user: {}", cmd.user_id);

        if cmd.username.is_none() && cmd.email.is_none() {
            return Err(DomainError::Validation("No data provided".to_string()));
        }

        let mut user = load_user(self.user_repo.as_ref(), cmd.user_id).await?;

        if let Some(username) = cmd.username {
            let username = username.trim().to_string();
            if username != user.username() {
                if self.user_repo.find_by_username(&username).await?.is_some() {
                    return Err(DomainError::Conflict("Username already taken".to_string()));
                }
                user.update_username(username)?;
            }
        }

        if let Some(email) = cmd.email {
            let email = email.trim().to_string();
            if email != user.email() {
                if self.user_repo.find_by_email(&email).await?.is_some() {
                    return Err(DomainError::Conflict(
                        "Email address already registered".to_string(),
                    ));
                }
                user.update_email(email)?;
            }
        }

        self.user_repo.update(&user).await?;

        info!("Profile updated for user: {}", cmd.user_id);
        UserProfileDto::try_from(&user)
    }
}

/// Change password command handler
pub struct ChangePasswordCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl ChangePasswordCommandHandler {
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
impl CommandHandler<ChangePasswordCommand> for ChangePasswordCommandHandler {
    type Result = ChangePasswordResult;

    async fn handle(&self, cmd: ChangePasswordCommand) -> Result<Self::Result, DomainError> {
        if cmd.current_password.is_empty() || cmd.new_password.is_empty() {
            return Err(DomainError::Validation(
                "Missing current_password or new_password".to_string(),
            ));
        }

        let mut user = load_user(self.user_repo.as_ref(), cmd.user_id).await?;

        if !self
            .password_hasher
            .verify(&cmd.current_password, user.password_hash())?
        {
            return Err(DomainError::InvalidCredentials(
                "Invalid current password".to_string(),
            ));
        }

        let new_hash = self.password_hasher.hash(&cmd.new_password)?;
        user.update_password_hash(new_hash);
        self.user_repo.update(&user).await?;

        info!("Password changed for user: {}", cmd.user_id);
        Ok(())
    }
}

/// Follow user command handler
pub struct FollowUserCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    follow_repo: Arc<dyn FollowRepository>,
}

impl FollowUserCommandHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>, follow_repo: Arc<dyn FollowRepository>) -> Self {
        Self {
            user_repo,
            follow_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<FollowUserCommand> for FollowUserCommandHandler {
    type Result = FollowUserResult;

    async fn handle(&self, cmd: FollowUserCommand) -> Result<Self::Result, DomainError> {
        let target = load_user_by_name(self.user_repo.as_ref(), &cmd.username).await?;
        let target_id = target.persisted_id()?;

        SocialDomainService::ensure_can_follow(cmd.follower_id, target_id)?;
        self.follow_repo.follow(cmd.follower_id, target_id).await?;

        info!("User {} now follows {}", cmd.follower_id, target_id);
        Ok(())
    }
}

/// Unfollow user command handler
pub struct UnfollowUserCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    follow_repo: Arc<dyn FollowRepository>,
}

impl UnfollowUserCommandHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>, follow_repo: Arc<dyn FollowRepository>) -> Self {
        Self {
            user_repo,
            follow_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<UnfollowUserCommand> for UnfollowUserCommandHandler {
    type Result = UnfollowUserResult;

    async fn handle(&self, cmd: UnfollowUserCommand) -> Result<Self::Result, DomainError> {
        let target = load_user_by_name(self.user_repo.as_ref(), &cmd.username).await?;
        let target_id = target.persisted_id()?;

        SocialDomainService::ensure_can_follow(cmd.follower_id, target_id)?;
        self.follow_repo.unfollow(cmd.follower_id, target_id).await?;

        info!("User {} unfollowed {}", cmd.follower_id, target_id);
        Ok(())
    }
}
