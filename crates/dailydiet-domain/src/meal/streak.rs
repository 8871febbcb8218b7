use serde::Serialize;

use super::Meal;

/// Longest run of consecutive on-diet meals
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StreakResult {
    pub length: u32,
    /// The run itself, in input order
    pub meals: Vec<Meal>,
}

/// Find the longest contiguous run of on-diet meals.
///
/// `meals` must already be sorted ascending by datetime; no sorting happens
/// here. A later run replaces the best one only when strictly longer, so the
/// earliest of several equally long runs wins.
pub fn find_longest_on_diet_streak(meals: &[Meal]) -> StreakResult {
    let mut best: &[Meal] = &[];
    let mut run_start = 0;

    for (index, meal) in meals.iter().enumerate() {
        if meal.is_on_diet() {
            continue;
        }
        let run = &meals[run_start..index];
        if run.len() > best.len() {
            best = run;
        }
        run_start = index + 1;
    }

    // trailing run never hit an off-diet meal
    let trailing = &meals[run_start..];
    if trailing.len() > best.len() {
        best = trailing;
    }

    StreakResult {
        length: best.len() as u32,
        meals: best.to_vec(),
    }
}
