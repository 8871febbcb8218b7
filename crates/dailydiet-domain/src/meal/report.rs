use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{round2, Meal};
use crate::shared::DomainError;

/// Report aggregation period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl FromStr for Granularity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(DomainError::InvalidGranularity(s.to_string())),
        }
    }
}

/// Half-open UTC interval `[start, end)` a report aggregates over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl ReportWindow {
    /// Weeks start on Monday. Months run from the 1st to the 1st of the next month.
    pub fn build(
        reference_date: NaiveDate,
        granularity: Granularity,
    ) -> Result<Self, DomainError> {
        let (first_day, next_first_day) = match granularity {
            Granularity::Daily => (reference_date, reference_date.checked_add_days(Days::new(1))),
            Granularity::Weekly => {
                let offset = Days::new(reference_date.weekday().num_days_from_monday() as u64);
                match reference_date.checked_sub_days(offset) {
                    Some(monday) => (monday, monday.checked_add_days(Days::new(7))),
                    None => return Err(date_out_of_range(reference_date)),
                }
            }
            Granularity::Monthly => {
                let first = first_of_month(reference_date);
                (first, first.checked_add_months(Months::new(1)))
            }
        };

        let next_first_day = next_first_day.ok_or_else(|| date_out_of_range(reference_date))?;
        Ok(Self {
            start: midnight_utc(first_day),
            end: midnight_utc(next_first_day),
        })
    }

    /// Parse `period` and build the window for it.
    pub fn for_period(reference_date: NaiveDate, period: &str) -> Result<Self, DomainError> {
        let granularity = period.parse::<Granularity>()?;
        Self::build(reference_date, granularity)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn date_out_of_range(date: NaiveDate) -> DomainError {
    DomainError::InvalidInput(format!("Report date out of range: {}", date))
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
}

/// Counts and nutrient totals over the meals inside a report window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealReport {
    pub granularity: Granularity,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub total_meals: u32,
    pub on_diet_meals: u32,
    pub total_calories: i64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fats: f64,
    pub average_calories_per_meal: f64,
}

impl MealReport {
    /// Meals outside the window are ignored; missing nutrients count as zero.
    pub fn aggregate(granularity: Granularity, window: ReportWindow, meals: &[Meal]) -> Self {
        let mut report = Self {
            granularity,
            start: window.start(),
            end: window.end(),
            total_meals: 0,
            on_diet_meals: 0,
            total_calories: 0,
            total_protein: 0.0,
            total_carbs: 0.0,
            total_fats: 0.0,
            average_calories_per_meal: 0.0,
        };

        for meal in meals.iter().filter(|m| window.contains(m.datetime())) {
            let nutrition = meal.nutrition();
            report.total_meals += 1;
            if meal.is_on_diet() {
                report.on_diet_meals += 1;
            }
            report.total_calories = report
                .total_calories
                .saturating_add(nutrition.calories.unwrap_or(0));
            report.total_protein += nutrition.protein_grams.unwrap_or(0.0);
            report.total_carbs += nutrition.carbohydrates_grams.unwrap_or(0.0);
            report.total_fats += nutrition.fats_grams.unwrap_or(0.0);
        }

        if report.total_meals > 0 {
            report.average_calories_per_meal =
                round2(report.total_calories as f64 / report.total_meals as f64);
        }

        report
    }
}
