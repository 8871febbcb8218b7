#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use dailydiet_domain::meal::{Meal, MealDraft, MealRepository, Nutrition};
use dailydiet_domain::shared::{MealId, UserId};
use dailydiet_domain::user::{User, UserRepository};
use dailydiet_infrastructure::persistence::repositories::{
    SqliteMealRepository, SqliteUserRepository,
};
use dailydiet_infrastructure::persistence::Database;

pub async fn setup_in_memory_db() -> SqlitePool {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("connect in-memory db");
    db.run_migrations().await.expect("run migrations");
    db.pool().clone()
}

pub async fn insert_user(pool: &SqlitePool, username: &str) -> UserId {
    let repo = SqliteUserRepository::new(Arc::new(pool.clone()));
    let user = User::register(
        username.to_string(),
        format!("{}@example.com", username),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
    )
    .expect("valid user");
    repo.create(&user).await.expect("create user")
}

pub fn meal_draft(name: &str, datetime: &str, is_on_diet: bool) -> MealDraft {
    MealDraft {
        name: name.to_string(),
        description: format!("{} description", name),
        datetime: datetime.to_string(),
        is_on_diet,
        category: None,
        nutrition: Nutrition::default(),
        image_url: None,
    }
}

pub async fn insert_meal(
    pool: &SqlitePool,
    user_id: UserId,
    name: &str,
    datetime: &str,
    is_on_diet: bool,
) -> MealId {
    let repo = SqliteMealRepository::new(Arc::new(pool.clone()));
    let meal = Meal::create(user_id, meal_draft(name, datetime, is_on_diet)).expect("valid meal");
    repo.create(&meal).await.expect("create meal")
}

pub fn utc(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("rfc3339")
        .with_timezone(&Utc)
}
