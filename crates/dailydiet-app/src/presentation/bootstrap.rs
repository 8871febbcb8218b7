use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::application::commands::handlers::*;
use crate::application::queries::{MealQueryService, SocialQueryService, UserQueryService};
use crate::presentation::rate_limit::RateLimits;
use crate::presentation::state::{AppState, CommandHandlers, Queries, Runtime};
use dailydiet_domain::auth::{AccessTokenIssuer, PasswordHasher, RefreshTokenGenerator};
use dailydiet_domain::meal::MealRepository;
use dailydiet_domain::shared::DomainError;
use dailydiet_domain::social::{FollowRepository, SharedItemRepository};
use dailydiet_domain::user::UserRepository;
use dailydiet_infrastructure::config::Settings;
use dailydiet_infrastructure::persistence::{
    repositories::{
        SqliteFollowRepository, SqliteMealRepository, SqliteSharedItemRepository,
        SqliteUserRepository,
    },
    Database,
};
use dailydiet_infrastructure::security::{
    Argon2PasswordHasher, HmacAccessTokenIssuer, RandomRefreshTokenGenerator,
};

/// Open the database, apply migrations and wire every handler.
pub async fn build_app_state(settings: &Settings) -> Result<AppState, DomainError> {
    let startup_started_at = Instant::now();

    let started_at = Instant::now();
    let db = Arc::new(Database::connect(&settings.database_url).await?);
    db.run_migrations().await?;
    info!(
        "✓ Database ready at {} ({}ms)",
        settings.database_url,
        started_at.elapsed().as_millis()
    );

    let pool = Arc::new(db.pool().clone());
    let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool.clone()));
    let meal_repo: Arc<dyn MealRepository> = Arc::new(SqliteMealRepository::new(pool.clone()));
    let shared_item_repo: Arc<dyn SharedItemRepository> =
        Arc::new(SqliteSharedItemRepository::new(pool.clone()));
    let follow_repo: Arc<dyn FollowRepository> = Arc::new(SqliteFollowRepository::new(pool));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());
    let access_tokens: Arc<dyn AccessTokenIssuer> = Arc::new(HmacAccessTokenIssuer::new(
        settings.secret_key.as_bytes().to_vec(),
        settings.access_token_ttl,
    ));
    let refresh_tokens: Arc<dyn RefreshTokenGenerator> = Arc::new(RandomRefreshTokenGenerator);
    let tokens = TokenServices {
        access_tokens: access_tokens.clone(),
        refresh_tokens,
        access_token_ttl: settings.access_token_ttl,
    };

    let command_handlers = CommandHandlers {
        register_user: Arc::new(RegisterUserCommandHandler::new(
            user_repo.clone(),
            password_hasher.clone(),
        )),
        login: Arc::new(LoginCommandHandler::new(
            user_repo.clone(),
            password_hasher.clone(),
            tokens.clone(),
        )),
        refresh_token: Arc::new(RefreshTokenCommandHandler::new(user_repo.clone(), tokens)),
        logout: Arc::new(LogoutCommandHandler::new(user_repo.clone())),
        update_profile: Arc::new(UpdateProfileCommandHandler::new(user_repo.clone())),
        change_password: Arc::new(ChangePasswordCommandHandler::new(
            user_repo.clone(),
            password_hasher,
        )),
        follow_user: Arc::new(FollowUserCommandHandler::new(
            user_repo.clone(),
            follow_repo.clone(),
        )),
        unfollow_user: Arc::new(UnfollowUserCommandHandler::new(
            user_repo.clone(),
            follow_repo.clone(),
        )),
        create_meal: Arc::new(CreateMealCommandHandler::new(meal_repo.clone())),
        update_meal: Arc::new(UpdateMealCommandHandler::new(meal_repo.clone())),
        delete_meal: Arc::new(DeleteMealCommandHandler::new(meal_repo.clone())),
        share_meals: Arc::new(ShareMealsCommandHandler::new(
            meal_repo.clone(),
            shared_item_repo.clone(),
        )),
    };

    let queries = Queries {
        meal: Arc::new(MealQueryService::new(meal_repo)),
        social: Arc::new(SocialQueryService::new(shared_item_repo, follow_repo.clone())),
        user: Arc::new(UserQueryService::new(user_repo)),
    };

    info!(
        "✓ Application state built for {} ({}ms)",
        settings.env,
        startup_started_at.elapsed().as_millis()
    );

    Ok(AppState {
        runtime: Runtime {
            db,
            access_tokens,
            rate_limits: RateLimits::default(),
        },
        queries,
        command_handlers,
    })
}
