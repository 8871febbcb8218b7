mod aggregate;
mod report;
mod repository;
mod stats;
mod streak;
mod value_objects;


pub use aggregate::{Meal, MealChanges, MealDetails, MealDraft};
pub use report::{Granularity, MealReport, ReportWindow};
pub use repository::{MealFilter, MealRepository};
pub use stats::DietStats;
pub use streak::{find_longest_on_diet_streak, StreakResult};
pub use value_objects::{parse_date_bound, parse_meal_datetime, parse_report_date, Nutrition};

/// Two decimals, ties to even.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
