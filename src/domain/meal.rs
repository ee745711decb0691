// Meal log domain models
use super::series::MacroTotals;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MealEntry {
    pub calories: f64,
    pub carbs: f64,
    pub fat: f64,
    pub protein: f64,
    pub food: String,
}

/// One day of the meal log. Missing slots are zeroed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailyMealRecord {
    /// YYYY-MM-DD
    pub date: String,
    pub breakfast: MealEntry,
    pub lunch: MealEntry,
    pub dinner: MealEntry,
}

impl DailyMealRecord {
    pub fn new(date: String, breakfast: MealEntry, lunch: MealEntry, dinner: MealEntry) -> Self {
        Self {
            date,
            breakfast,
            lunch,
            dinner,
        }
    }

    pub fn meals(&self) -> [&MealEntry; 3] {
        [&self.breakfast, &self.lunch, &self.dinner]
    }

    /// Sum of the three slots
    pub fn totals(&self) -> MacroTotals {
        self.meals()
            .iter()
            .fold(MacroTotals::default(), |acc, meal| MacroTotals {
                protein: acc.protein + meal.protein,
                fat: acc.fat + meal.fat,
                carbs: acc.carbs + meal.carbs,
                calories: acc.calories + meal.calories,
            })
    }
}
