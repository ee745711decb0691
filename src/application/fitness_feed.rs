// Fitness feed trait - daily activity readings
use crate::domain::reading::DailyReading;
use async_trait::async_trait;

#[async_trait]
pub trait FitnessFeed: Send + Sync {
    /// Calories burned per day
    async fn calories(&self) -> anyhow::Result<Vec<DailyReading>>;

    /// Hours slept per day
    async fn sleep(&self) -> anyhow::Result<Vec<DailyReading>>;

    /// Step count per day
    async fn steps(&self) -> anyhow::Result<Vec<DailyReading>>;
}
