// Statistics report domain model - everything the statistics view renders
use super::meal::DailyMealRecord;
use super::overview::Overview;
use super::series::{ChartSeries, FitnessSeries, NutritionSeries, StackedChart};
use super::time_range::TimeRange;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Charts {
    pub calories_burned: ChartSeries,
    pub calories_intake: ChartSeries,
    pub macros: StackedChart,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatisticsReport {
    pub range: TimeRange,
    /// e.g. "October 2026"
    pub title: String,
    /// "Daily", "Weekly" or "Monthly"
    pub period: String,
    pub fitness: FitnessSeries,
    pub nutrition: NutritionSeries,
    pub meals: Vec<DailyMealRecord>,
    pub overview: Overview,
    pub charts: Charts,
}

impl StatisticsReport {
    pub fn new(
        range: TimeRange,
        title: String,
        fitness: FitnessSeries,
        nutrition: NutritionSeries,
        meals: Vec<DailyMealRecord>,
        charts: Charts,
    ) -> Self {
        let overview = Overview::from_series(&fitness, &nutrition);
        Self {
            range,
            title,
            period: range.period_label().to_string(),
            fitness,
            nutrition,
            meals,
            overview,
            charts,
        }
    }
}
