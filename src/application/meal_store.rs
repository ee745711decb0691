// Repository trait for the per-day meal log
use crate::domain::meal::DailyMealRecord;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait MealStore: Send + Sync {
    /// The meal record a user logged for `date`, if any
    async fn get_meal_record(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> anyhow::Result<Option<DailyMealRecord>>;
}
