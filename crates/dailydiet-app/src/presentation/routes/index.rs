use axum::Json;
use serde_json::{json, Value};

pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Daily Diet API!",
        "endpoints": {
            "auth": ["/auth/register", "/auth/login", "/auth/refresh", "/auth/logout"],
            "user": [
                "/user/profile",
                "/user/password",
                "/user/{username}/follow",
                "/user/{username}/unfollow"
            ],
            "meals": [
                "/meals",
                "/meals/{id}",
                "/meals/stats",
                "/meals/best-sequence",
                "/meals/report"
            ],
            "social": ["/social/share", "/social/share/{id}", "/social/feed"],
            "health": "/health"
        }
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "Daily Diet API is running"
    }))
}
