use axum::http::{header, Method};
use axum::routing::{get, post, put};
use axum::{middleware, Router};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

use crate::presentation::middleware::request_tracing;
use crate::presentation::state::SharedState;

pub mod auth;
pub mod index;
pub mod meals;
pub mod social;
pub mod user;

pub fn build_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(index::index))
        .route("/health", get(index::health))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh))
        .route("/auth/logout", post(auth::logout))
        .route("/user/profile", get(user::get_profile).put(user::update_profile))
        .route("/user/password", put(user::change_password))
        .route("/user/:username/follow", post(user::follow))
        .route("/user/:username/unfollow", post(user::unfollow))
        .route("/meals", post(meals::create_meal).get(meals::list_meals))
        .route("/meals/stats", get(meals::stats))
        .route("/meals/best-sequence", get(meals::best_sequence))
        .route("/meals/report", get(meals::report))
        .route(
            "/meals/:id",
            get(meals::get_meal)
                .put(meals::update_meal)
                .delete(meals::delete_meal),
        )
        .route("/social/share", post(social::share))
        .route("/social/share/:id", get(social::get_shared_item))
        .route("/social/feed", get(social::feed))
        .layer(middleware::from_fn(request_tracing))
        .layer(cors)
        .with_state(state)
}
