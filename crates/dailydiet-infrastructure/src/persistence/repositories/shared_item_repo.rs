use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

use super::meal_repo::{MealRow, MEAL_COLUMNS};
use crate::persistence::{
    decode_instant, encode_instant, RepositoryErrorMapper, SqliteRepositoryBase,
};
use dailydiet_domain::meal::Meal;
use dailydiet_domain::shared::{DomainError, SharedItemId, UserId};
use dailydiet_domain::social::{SharedItem, SharedItemRepository};

const ITEM_COLUMNS: &str = "id, user_id, title, description, is_public, created_at";

#[derive(FromRow)]
struct SharedItemRow {
    id: i64,
    user_id: i64,
    title: String,
    description: Option<String>,
    is_public: i64,
    created_at: String,
}

impl SharedItemRow {
    fn try_into_domain(self, meals: Vec<Meal>) -> Result<SharedItem, DomainError> {
        let created_at = decode_instant(&self.created_at, "created_at")?;

        Ok(SharedItem::restore(
            SharedItemId::new(self.id),
            UserId::new(self.user_id),
            self.title,
            self.description,
            self.is_public != 0,
            created_at,
            meals,
        ))
    }
}

pub struct SqliteSharedItemRepository {
    base: SqliteRepositoryBase,
}

impl SqliteSharedItemRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }

    async fn load(&self, row: SharedItemRow) -> Result<SharedItem, DomainError> {
        let query = format!(
            "SELECT {} FROM meals \
             JOIN shared_item_meals ON shared_item_meals.meal_id = meals.id \
             WHERE shared_item_meals.shared_item_id = ?1 \
             ORDER BY meals.datetime ASC, meals.id ASC",
            MEAL_COLUMNS
        );
        let meal_rows: Vec<MealRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query).bind(row.id),
                "Load shared item meals",
            )
            .await?;

        let meals = meal_rows
            .into_iter()
            .map(MealRow::try_into_domain)
            .collect::<Result<Vec<_>, _>>()?;
        row.try_into_domain(meals)
    }
}

#[async_trait]
impl SharedItemRepository for SqliteSharedItemRepository {
    async fn create(&self, item: &SharedItem) -> Result<SharedItemId, DomainError> {
        let mut tx = self
            .base
            .pool()
            .begin()
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Begin share transaction"))?;

        let result = sqlx::query(
            r#"
            INSERT INTO shared_items (user_id, title, description, is_public, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(item.user_id().value())
        .bind(item.title())
        .bind(item.description())
        .bind(item.is_public())
        .bind(encode_instant(item.created_at()))
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Create shared item"))?;

        let item_id = result.last_insert_rowid();

        for meal_id in item.meal_ids() {
            sqlx::query(
                "INSERT OR IGNORE INTO shared_item_meals (shared_item_id, meal_id) VALUES (?1, ?2)",
            )
            .bind(item_id)
            .bind(meal_id.value())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Link meal to shared item"))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Commit share transaction"))?;

        Ok(SharedItemId::new(item_id))
    }

    async fn find_by_id(&self, id: SharedItemId) -> Result<Option<SharedItem>, DomainError> {
        let query = format!("SELECT {} FROM shared_items WHERE id = ?1", ITEM_COLUMNS);
        let row: Option<SharedItemRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query).bind(id.value()),
                "Find shared item by ID",
            )
            .await?;

        match row {
            Some(row) => Ok(Some(self.load(row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_owners(&self, owners: &[UserId]) -> Result<Vec<SharedItem>, DomainError> {
        if owners.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT ");
        builder.push(ITEM_COLUMNS);
        builder.push(" FROM shared_items WHERE user_id IN (");
        let mut separated = builder.separated(", ");
        for owner in owners {
            separated.push_bind(owner.value());
        }
        separated.push_unseparated(") ORDER BY created_at DESC, id DESC");

        let rows: Vec<SharedItemRow> = builder
            .build_query_as()
            .fetch_all(self.base.pool())
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "List shared items"))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(self.load(row).await?);
        }
        Ok(items)
    }
}
