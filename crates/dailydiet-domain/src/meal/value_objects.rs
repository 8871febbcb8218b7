use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

const DATETIME_FORMAT_HINT: &str = "Invalid datetime format. Use ISO format: YYYY-MM-DDTHH:MM:SS";
const DATE_FORMAT_HINT: &str = "Invalid date format. Use YYYY-MM-DD";

/// Upper bound for a single meal's energy value
const MAX_CALORIES: i64 = 100_000;

// stored timestamps keep a four-digit year
const MIN_YEAR: i32 = 0;
const MAX_YEAR: i32 = 9999;

/// Nutrient values of a meal; each is absent when unknown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: Option<i64>,
    pub protein_grams: Option<f64>,
    pub carbohydrates_grams: Option<f64>,
    pub fats_grams: Option<f64>,
}

impl Nutrition {
    /// Returns one message per negative or non-finite value.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        match self.calories {
            Some(c) if c < 0 => {
                errors.push("calories must be a non-negative integer".to_string());
            }
            Some(c) if c > MAX_CALORIES => {
                errors.push(format!("calories must not exceed {}", MAX_CALORIES));
            }
            _ => {}
        }

        let grams = [
            ("protein_grams", self.protein_grams),
            ("carbohydrates_grams", self.carbohydrates_grams),
            ("fats_grams", self.fats_grams),
        ];
        for (field, value) in grams {
            if value.is_some_and(|v| !v.is_finite() || v < 0.0) {
                errors.push(format!("{} must be a non-negative number", field));
            }
        }

        errors
    }
}

/// Parse a meal timestamp.
///
/// Accepts RFC 3339 (`2024-03-15T12:30:00+02:00`) and naive ISO 8601
/// (`2024-03-15T12:30:00`, optional fraction), the latter read as UTC.
/// The UTC year must lie in 0000..=9999.
pub fn parse_meal_datetime(value: &str) -> Result<DateTime<Utc>, DomainError> {
    let value = value.trim();

    let parsed = DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"]
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|naive| Utc.from_utc_datetime(&naive))
        });

    parsed
        .filter(|dt| year_in_range(dt.year()))
        .ok_or_else(|| DomainError::Validation(DATETIME_FORMAT_HINT.to_string()))
}

/// Parse a `start_date` / `end_date` listing bound.
///
/// A bare date is taken as midnight UTC of that day.
pub fn parse_date_bound(value: &str) -> Result<DateTime<Utc>, DomainError> {
    if let Some(date) = parse_plain_date(value) {
        return Ok(Utc.from_utc_datetime(&date.and_time(Default::default())));
    }
    parse_meal_datetime(value)
}

/// Parse a `YYYY-MM-DD` report reference date.
pub fn parse_report_date(value: &str) -> Result<NaiveDate, DomainError> {
    parse_plain_date(value).ok_or_else(|| DomainError::Validation(DATE_FORMAT_HINT.to_string()))
}

fn parse_plain_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .filter(|date| year_in_range(date.year()))
}

fn year_in_range(year: i32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}
