// Overview cards - one headline number per series
use super::series::{FitnessSeries, NutritionSeries};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub calories: f64,
    pub sleep: f64,
    /// Hundreds of steps
    pub steps: f64,
    pub water: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub calories_intake: f64,
}

impl Overview {
    pub fn from_series(fitness: &FitnessSeries, nutrition: &NutritionSeries) -> Self {
        Self {
            calories: mean(&fitness.calories.values).map_or(28.0, f64::round),
            sleep: mean(&fitness.sleep.values).map_or(8.0, f64::round),
            steps: mean(&fitness.steps.values).map_or(10.0, |m| (m / 100.0).round()),
            water: mean(&fitness.water.values).map_or(4.5, |m| (m * 10.0).round() / 10.0),
            protein: mean(&nutrition.protein).map_or(28.0, f64::round),
            fat: mean(&nutrition.fat).map_or(28.0, f64::round),
            carbs: mean(&nutrition.carbs).map_or(8.0, f64::round),
            calories_intake: mean(&nutrition.calories_intake).map_or(8.0, f64::round),
        }
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
