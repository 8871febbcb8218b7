use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

use crate::persistence::{
    decode_instant, encode_instant, RepositoryErrorMapper, SqliteRepositoryBase,
};
use dailydiet_domain::meal::{
    Meal, MealDetails, MealFilter, MealRepository, Nutrition, ReportWindow,
};
use dailydiet_domain::shared::{DomainError, MealId, Page, PageRequest, UserId};

pub(crate) const MEAL_COLUMNS: &str = "meals.id, meals.user_id, meals.name, meals.description, \
     meals.datetime, meals.is_on_diet, meals.category, meals.calories, meals.protein, \
     meals.carbohydrates, meals.fats, meals.image_url, meals.created_at, meals.updated_at";

const FILTER_CLAUSE: &str = "meals.user_id = ?1 \
     AND (?2 IS NULL OR meals.datetime >= ?2) \
     AND (?3 IS NULL OR meals.datetime <= ?3) \
     AND (?4 IS NULL OR meals.is_on_diet = ?4)";

#[derive(FromRow)]
pub(crate) struct MealRow {
    id: i64,
    user_id: i64,
    name: String,
    description: String,
    datetime: String,
    is_on_diet: i64,
    category: Option<String>,
    calories: Option<i64>,
    protein: Option<f64>,
    carbohydrates: Option<f64>,
    fats: Option<f64>,
    image_url: Option<String>,
    created_at: String,
    updated_at: String,
}

impl MealRow {
    pub(crate) fn try_into_domain(self) -> Result<Meal, DomainError> {
        let datetime = decode_instant(&self.datetime, "datetime")?;
        let created_at = decode_instant(&self.created_at, "created_at")?;
        let updated_at = decode_instant(&self.updated_at, "updated_at")?;

        Ok(Meal::restore(
            MealId::new(self.id),
            UserId::new(self.user_id),
            MealDetails {
                name: self.name,
                description: self.description,
                datetime,
                is_on_diet: self.is_on_diet != 0,
                category: self.category,
                nutrition: Nutrition {
                    calories: self.calories,
                    protein_grams: self.protein,
                    carbohydrates_grams: self.carbohydrates,
                    fats_grams: self.fats,
                },
                image_url: self.image_url,
            },
            created_at,
            updated_at,
        ))
    }
}

fn into_meals(rows: Vec<MealRow>) -> Result<Vec<Meal>, DomainError> {
    rows.into_iter().map(MealRow::try_into_domain).collect()
}

pub struct SqliteMealRepository {
    base: SqliteRepositoryBase,
}

impl SqliteMealRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl MealRepository for SqliteMealRepository {
    async fn create(&self, meal: &Meal) -> Result<MealId, DomainError> {
        let query = r#"
            INSERT INTO meals (
                user_id, name, description, datetime, is_on_diet, category,
                calories, protein, carbohydrates, fats, image_url, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
        "#;
        let nutrition = meal.nutrition();

        let result = self
            .base
            .execute(
                sqlx::query(query)
                    .bind(meal.user_id().value())
                    .bind(meal.name())
                    .bind(meal.description())
                    .bind(encode_instant(meal.datetime()))
                    .bind(meal.is_on_diet())
                    .bind(meal.category())
                    .bind(nutrition.calories)
                    .bind(nutrition.protein_grams)
                    .bind(nutrition.carbohydrates_grams)
                    .bind(nutrition.fats_grams)
                    .bind(meal.image_url())
                    .bind(encode_instant(meal.created_at()))
                    .bind(encode_instant(meal.updated_at())),
                "Create meal",
            )
            .await?;

        Ok(MealId::new(result.last_insert_rowid()))
    }

    async fn update(&self, meal: &Meal) -> Result<(), DomainError> {
        let id = meal
            .id()
            .ok_or_else(|| DomainError::NotFound("Meal ID is required for update".to_string()))?;
        let query = r#"
            UPDATE meals
            SET name = ?1, description = ?2, datetime = ?3, is_on_diet = ?4, category = ?5,
                calories = ?6, protein = ?7, carbohydrates = ?8, fats = ?9, image_url = ?10,
                updated_at = ?11
            WHERE id = ?12 AND user_id = ?13
        "#;
        let nutrition = meal.nutrition();

        let result = self
            .base
            .execute(
                sqlx::query(query)
                    .bind(meal.name())
                    .bind(meal.description())
                    .bind(encode_instant(meal.datetime()))
                    .bind(meal.is_on_diet())
                    .bind(meal.category())
                    .bind(nutrition.calories)
                    .bind(nutrition.protein_grams)
                    .bind(nutrition.carbohydrates_grams)
                    .bind(nutrition.fats_grams)
                    .bind(meal.image_url())
                    .bind(encode_instant(meal.updated_at()))
                    .bind(id.value())
                    .bind(meal.user_id().value()),
                "Update meal",
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MealNotFound(format!("Meal {} not found", id)));
        }
        Ok(())
    }

    async fn delete(&self, id: MealId, user_id: UserId) -> Result<(), DomainError> {
        let result = self
            .base
            .execute(
                sqlx::query("DELETE FROM meals WHERE id = ?1 AND user_id = ?2")
                    .bind(id.value())
                    .bind(user_id.value()),
                "Delete meal",
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MealNotFound(format!("Meal {} not found", id)));
        }
        Ok(())
    }

    async fn find_by_id_for_user(
        &self,
        id: MealId,
        user_id: UserId,
    ) -> Result<Option<Meal>, DomainError> {
        let query = format!(
            "SELECT {} FROM meals WHERE meals.id = ?1 AND meals.user_id = ?2",
            MEAL_COLUMNS
        );
        let row: Option<MealRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query).bind(id.value()).bind(user_id.value()),
                "Find meal by ID",
            )
            .await?;

        row.map(MealRow::try_into_domain).transpose()
    }

    async fn find_by_ids_for_user(
        &self,
        ids: &[MealId],
        user_id: UserId,
    ) -> Result<Vec<Meal>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT ");
        builder.push(MEAL_COLUMNS);
        builder.push(" FROM meals WHERE meals.user_id = ");
        builder.push_bind(user_id.value());
        builder.push(" AND meals.id IN (");
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(id.value());
        }
        separated.push_unseparated(") ORDER BY meals.datetime ASC, meals.id ASC");

        let rows: Vec<MealRow> = builder
            .build_query_as()
            .fetch_all(self.base.pool())
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Find meals by IDs"))?;

        into_meals(rows)
    }

    async fn find_page(
        &self,
        user_id: UserId,
        filter: &MealFilter,
        page: PageRequest,
    ) -> Result<Page<Meal>, DomainError> {
        let start = filter.start.map(encode_instant);
        let end = filter.end.map(encode_instant);

        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM meals WHERE {}",
            FILTER_CLAUSE
        ))
        .bind(user_id.value())
        .bind(start.as_deref())
        .bind(end.as_deref())
        .bind(filter.on_diet)
        .fetch_one(self.base.pool())
        .await
        .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Count meals"))?;

        let query = format!(
            "SELECT {} FROM meals WHERE {} ORDER BY meals.datetime DESC, meals.id DESC \
             LIMIT ?5 OFFSET ?6",
            MEAL_COLUMNS, FILTER_CLAUSE
        );
        let rows: Vec<MealRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query)
                    .bind(user_id.value())
                    .bind(start.as_deref())
                    .bind(end.as_deref())
                    .bind(filter.on_diet)
                    .bind(page.per_page() as i64)
                    .bind(page.offset()),
                "List meals",
            )
            .await?;

        Ok(Page::new(into_meals(rows)?, total.max(0) as u64, page))
    }

    async fn find_all_by_user_ordered(&self, user_id: UserId) -> Result<Vec<Meal>, DomainError> {
        let query = format!(
            "SELECT {} FROM meals WHERE meals.user_id = ?1 \
             ORDER BY meals.datetime ASC, meals.id ASC",
            MEAL_COLUMNS
        );
        let rows: Vec<MealRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query).bind(user_id.value()),
                "List meals in order",
            )
            .await?;

        into_meals(rows)
    }

    async fn find_in_window(
        &self,
        user_id: UserId,
        window: &ReportWindow,
    ) -> Result<Vec<Meal>, DomainError> {
        let query = format!(
            "SELECT {} FROM meals WHERE meals.user_id = ?1 \
             AND meals.datetime >= ?2 AND (?3 IS NULL OR meals.datetime < ?3) \
             ORDER BY meals.datetime ASC, meals.id ASC",
            MEAL_COLUMNS
        );
        let rows: Vec<MealRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query)
                    .bind(user_id.value())
                    .bind(encode_instant(window.start()))
                    .bind(bounded_end(window.end())),
                "List meals in report window",
            )
            .await?;

        into_meals(rows)
    }
}

// stored timestamps never reach year 10000, so a window ending there is open
fn bounded_end(end: DateTime<Utc>) -> Option<String> {
    (end.year() <= 9999).then(|| encode_instant(end))
}
