use serde::Serialize;

use super::{round2, Meal};

/// On-diet / off-diet counts over a user's whole meal history
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DietStats {
    pub total_meals: u32,
    pub on_diet_meals: u32,
    pub off_diet_meals: u32,
    pub on_diet_percentage: f64,
}

impl DietStats {
    pub fn from_meals(meals: &[Meal]) -> Self {
        let total_meals = meals.len() as u32;
        let on_diet_meals = meals.iter().filter(|m| m.is_on_diet()).count() as u32;

        let on_diet_percentage = if total_meals > 0 {
            round2(on_diet_meals as f64 / total_meals as f64 * 100.0)
        } else {
            0.0
        };

        Self {
            total_meals,
            on_diet_meals,
            off_diet_meals: total_meals - on_diet_meals,
            on_diet_percentage,
        }
    }
}
