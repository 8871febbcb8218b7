use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{parse_meal_datetime, Nutrition};
use crate::shared::{DomainError, MealId, UserId};

const MAX_CATEGORY_LEN: usize = 50;
const MAX_IMAGE_URL_LEN: usize = 255;

/// Validated, persisted-shape meal fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealDetails {
    pub name: String,
    pub description: String,
    pub datetime: DateTime<Utc>,
    pub is_on_diet: bool,
    pub category: Option<String>,
    pub nutrition: Nutrition,
    pub image_url: Option<String>,
}

/// Unvalidated input for registering a meal
#[derive(Debug, Clone, Default)]
pub struct MealDraft {
    pub name: String,
    pub description: String,
    pub datetime: String,
    pub is_on_diet: bool,
    pub category: Option<String>,
    pub nutrition: Nutrition,
    pub image_url: Option<String>,
}

/// Partial update; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct MealChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub datetime: Option<String>,
    pub is_on_diet: Option<bool>,
    pub category: Option<String>,
    pub calories: Option<i64>,
    pub protein_grams: Option<f64>,
    pub carbohydrates_grams: Option<f64>,
    pub fats_grams: Option<f64>,
    pub image_url: Option<String>,
}

impl MealChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.datetime.is_none()
            && self.is_on_diet.is_none()
            && self.category.is_none()
            && self.calories.is_none()
            && self.protein_grams.is_none()
            && self.carbohydrates_grams.is_none()
            && self.fats_grams.is_none()
            && self.image_url.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    id: Option<MealId>,
    user_id: UserId,
    details: MealDetails,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Meal {
    /// Validate a draft and build a new, not yet persisted, meal.
    /// All field errors are reported together.
    pub fn create(user_id: UserId, draft: MealDraft) -> Result<Self, DomainError> {
        let mut errors = Vec::new();

        let name = draft.name.trim().to_string();
        if name.is_empty() {
            errors.push("Name must be a non-empty string".to_string());
        }

        let description = draft.description.trim().to_string();
        if description.is_empty() {
            errors.push("Description must be a non-empty string".to_string());
        }

        let datetime = match parse_meal_datetime(&draft.datetime) {
            Ok(datetime) => Some(datetime),
            Err(e) => {
                errors.push(e.message());
                None
            }
        };

        validate_optional_fields(
            draft.category.as_deref(),
            draft.image_url.as_deref(),
            &mut errors,
        );
        errors.extend(draft.nutrition.validate());

        let datetime = match datetime {
            Some(datetime) if errors.is_empty() => datetime,
            _ => return Err(DomainError::ValidationFailed(errors)),
        };

        let now = Utc::now();
        Ok(Self {
            id: None,
            user_id,
            details: MealDetails {
                name,
                description,
                datetime,
                is_on_diet: draft.is_on_diet,
                category: normalize_optional(draft.category),
                nutrition: draft.nutrition,
                image_url: normalize_optional(draft.image_url),
            },
            created_at: now,
            updated_at: now,
        })
    }

    /// Restore a Meal from persistence
    pub fn restore(
        id: MealId,
        user_id: UserId,
        details: MealDetails,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            user_id,
            details,
            created_at,
            updated_at,
        }
    }

    pub fn with_id(mut self, id: MealId) -> Self {
        self.id = Some(id);
        self
    }

    // Getters
    pub fn id(&self) -> Option<MealId> {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn details(&self) -> &MealDetails {
        &self.details
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }

    pub fn description(&self) -> &str {
        &self.details.description
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        self.details.datetime
    }

    pub fn is_on_diet(&self) -> bool {
        self.details.is_on_diet
    }

    pub fn category(&self) -> Option<&str> {
        self.details.category.as_deref()
    }

    pub fn nutrition(&self) -> &Nutrition {
        &self.details.nutrition
    }

    pub fn image_url(&self) -> Option<&str> {
        self.details.image_url.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    // Business logic
    /// Apply a partial update. Nothing changes unless every provided field is valid.
    pub fn apply(&mut self, changes: MealChanges) -> Result<(), DomainError> {
        let mut errors = Vec::new();

        let name = changes.name.map(|n| n.trim().to_string());
        if matches!(&name, Some(n) if n.is_empty()) {
            errors.push("Name must be a non-empty string".to_string());
        }

        let description = changes.description.map(|d| d.trim().to_string());
        if matches!(&description, Some(d) if d.is_empty()) {
            errors.push("Description must be a non-empty string".to_string());
        }

        let datetime = match changes.datetime.as_deref().map(parse_meal_datetime) {
            Some(Ok(datetime)) => Some(datetime),
            Some(Err(e)) => {
                errors.push(e.message());
                None
            }
            None => None,
        };

        validate_optional_fields(
            changes.category.as_deref(),
            changes.image_url.as_deref(),
            &mut errors,
        );

        let mut nutrition = self.details.nutrition.clone();
        if changes.calories.is_some() {
            nutrition.calories = changes.calories;
        }
        if changes.protein_grams.is_some() {
            nutrition.protein_grams = changes.protein_grams;
        }
        if changes.carbohydrates_grams.is_some() {
            nutrition.carbohydrates_grams = changes.carbohydrates_grams;
        }
        if changes.fats_grams.is_some() {
            nutrition.fats_grams = changes.fats_grams;
        }
        errors.extend(nutrition.validate());

        if !errors.is_empty() {
            return Err(DomainError::ValidationFailed(errors));
        }

        if let Some(n) = name {
            self.details.name = n;
        }
        if let Some(d) = description {
            self.details.description = d;
        }
        if let Some(dt) = datetime {
            self.details.datetime = dt;
        }
        if let Some(on_diet) = changes.is_on_diet {
            self.details.is_on_diet = on_diet;
        }
        if changes.category.is_some() {
            self.details.category = normalize_optional(changes.category);
        }
        if changes.image_url.is_some() {
            self.details.image_url = normalize_optional(changes.image_url);
        }
        self.details.nutrition = nutrition;
        self.updated_at = Utc::now();

        Ok(())
    }
}

fn validate_optional_fields(
    category: Option<&str>,
    image_url: Option<&str>,
    errors: &mut Vec<String>,
) {
    if category.is_some_and(|c| c.trim().chars().count() > MAX_CATEGORY_LEN) {
        errors.push(format!(
            "Category must be at most {} characters",
            MAX_CATEGORY_LEN
        ));
    }
    if image_url.is_some_and(|u| u.trim().chars().count() > MAX_IMAGE_URL_LEN) {
        errors.push(format!(
            "Image URL must be at most {} characters",
            MAX_IMAGE_URL_LEN
        ));
    }
}

/// Blank strings are stored as absent.
fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
