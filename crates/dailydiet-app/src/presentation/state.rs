use std::sync::Arc;

use crate::application::commands::handlers::*;
use crate::application::queries::{MealQueryService, SocialQueryService, UserQueryService};
use crate::presentation::rate_limit::RateLimits;
use dailydiet_domain::auth::AccessTokenIssuer;
use dailydiet_infrastructure::persistence::Database;

/// Command handlers container
pub struct CommandHandlers {
    pub register_user: Arc<RegisterUserCommandHandler>,
    pub login: Arc<LoginCommandHandler>,
    pub refresh_token: Arc<RefreshTokenCommandHandler>,
    pub logout: Arc<LogoutCommandHandler>,
    pub update_profile: Arc<UpdateProfileCommandHandler>,
    pub change_password: Arc<ChangePasswordCommandHandler>,
    pub follow_user: Arc<FollowUserCommandHandler>,
    pub unfollow_user: Arc<UnfollowUserCommandHandler>,
    pub create_meal: Arc<CreateMealCommandHandler>,
    pub update_meal: Arc<UpdateMealCommandHandler>,
    pub delete_meal: Arc<DeleteMealCommandHandler>,
    pub share_meals: Arc<ShareMealsCommandHandler>,
}

pub struct Runtime {
    pub db: Arc<Database>,
    pub access_tokens: Arc<dyn AccessTokenIssuer>,
    pub rate_limits: RateLimits,
}

pub struct Queries {
    pub meal: Arc<MealQueryService>,
    pub social: Arc<SocialQueryService>,
    pub user: Arc<UserQueryService>,
}

pub struct AppState {
    pub runtime: Runtime,
    pub queries: Queries,
    pub command_handlers: CommandHandlers,
}

pub type SharedState = Arc<AppState>;
