// Failures that abort a statistics run
use chrono::NaiveDate;
use thiserror::Error;

/// Shown to the user for any failed run; the only remedy is a manual retry.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data. Please try again.";

#[derive(Debug, Error)]
pub enum StatisticsError {
    #[error("fitness feed request failed")]
    FitnessFeed(#[source] anyhow::Error),

    #[error("meal record for {date} could not be read")]
    MealStore {
        date: NaiveDate,
        #[source]
        source: anyhow::Error,
    },
}

impl StatisticsError {
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILED_MESSAGE
    }

    /// The underlying adapter error
    pub fn cause(&self) -> &anyhow::Error {
        match self {
            StatisticsError::FitnessFeed(source) | StatisticsError::MealStore { source, .. } => {
                source
            }
        }
    }
}
