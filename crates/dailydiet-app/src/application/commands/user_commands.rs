use crate::application::commands::command_handler::Command;
use crate::application::dtos::UserProfileDto;
use dailydiet_domain::shared::UserId;

/// Update profile command; absent fields stay unchanged
#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub user_id: UserId,
    pub username: Option<String>,
    pub email: Option<String>,
}

impl Command for UpdateProfileCommand {}

pub type UpdateProfileResult = UserProfileDto;

/// Change password command
#[derive(Debug, Clone)]
pub struct ChangePasswordCommand {
    pub user_id: UserId,
    pub current_password: String,
    pub new_password: String,
}

impl Command for ChangePasswordCommand {}

pub type ChangePasswordResult = ();

/// Follow user command
#[derive(Debug, Clone)]
pub struct FollowUserCommand {
    pub follower_id: UserId,
    pub username: String,
}

impl Command for FollowUserCommand {}

pub type FollowUserResult = ();

/// Unfollow user command
#[derive(Debug, Clone)]
pub struct UnfollowUserCommand {
    pub follower_id: UserId,
    pub username: String,
}

impl Command for UnfollowUserCommand {}

pub type UnfollowUserResult = ();
