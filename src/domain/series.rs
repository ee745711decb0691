// Chart series domain models
use serde::Serialize;

/// Where the values of a series came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesSource {
    Recorded,
    Sample,
    Empty,
}

/// Force `values` to exactly `len` entries: zero-pad on the right, or drop
/// trailing entries.
pub fn fit_to_length(mut values: Vec<f64>, len: usize) -> Vec<f64> {
    values.resize(len, 0.0);
    values
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSeries {
    pub values: Vec<f64>,
    pub source: SeriesSource,
}

impl MetricSeries {
    pub fn new(values: Vec<f64>, source: SeriesSource) -> Self {
        Self { values, source }
    }

}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitnessSeries {
    pub calories: MetricSeries,
    pub sleep: MetricSeries,
    pub steps: MetricSeries,
    pub water: MetricSeries,
    pub labels: Vec<String>,
}

impl FitnessSeries {
    pub fn is_aligned(&self) -> bool {
        let n = self.labels.len();
        [&self.calories, &self.sleep, &self.steps, &self.water]
            .iter()
            .all(|s| s.values.len() == n)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionSeries {
    pub protein: Vec<f64>,
    pub fat: Vec<f64>,
    pub carbs: Vec<f64>,
    pub calories_intake: Vec<f64>,
    pub labels: Vec<String>,
    /// Days whose totals were synthesized for a missing record
    pub sampled_days: usize,
}

impl NutritionSeries {
    pub fn push(&mut self, totals: MacroTotals, label: String) {
        self.protein.push(totals.protein);
        self.fat.push(totals.fat);
        self.carbs.push(totals.carbs);
        self.calories_intake.push(totals.calories);
        self.labels.push(label);
    }

    pub fn len(&self) -> usize {
        self.protein.len()
    }

    /// Zero-pad or truncate every sequence to `labels.len()` entries.
    /// A padded entry takes the label of the slot it fills.
    pub fn reconcile(&mut self, labels: &[String]) {
        let expected = labels.len();

        while self.len() < expected {
            let slot = self.len();
            self.push(MacroTotals::default(), labels[slot].clone());
        }

        if self.len() > expected {
            self.protein.truncate(expected);
            self.fat.truncate(expected);
            self.carbs.truncate(expected);
            self.calories_intake.truncate(expected);
            self.labels.truncate(expected);
        }
    }

    pub fn is_aligned(&self) -> bool {
        let n = self.labels.len();
        self.protein.len() == n
            && self.fat.len() == n
            && self.carbs.len() == n
            && self.calories_intake.len() == n
    }
}

/// Per-day sums of the macro nutrients
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroTotals {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub calories: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    CaloriesBurned,
    CaloriesIntake,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub source: SeriesSource,
}

/// Stacked bar chart, one `[protein, fat, carbs]` triple per label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedChart {
    pub labels: Vec<String>,
    pub data: Vec<[f64; 3]>,
    pub legend: [&'static str; 3],
    pub source: SeriesSource,
}

pub const MACRO_LEGEND: [&str; 3] = ["Protein", "Fat", "Carbs"];
