// Fitness reading domain model

/// One normalized value from the fitness feed
#[derive(Debug, Clone, PartialEq)]
pub struct DailyReading {
    /// YYYY-MM-DD when the feed reports it
    pub date: Option<String>,
    pub value: f64,
}

impl DailyReading {
    pub fn new(date: Option<String>, value: f64) -> Self {
        Self { date, value }
    }
}

/// Values in feed order
pub fn reading_values(readings: &[DailyReading]) -> Vec<f64> {
    readings.iter().map(|r| r.value).collect()
}
