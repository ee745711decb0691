// HTTP fitness feed implementation
use crate::application::fitness_feed::FitnessFeed;
use crate::domain::reading::DailyReading;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpFitnessFeed {
    base_url: String,
    client: reqwest::Client,
}

/// The feed answers with either one object or a list of them
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

#[derive(Debug, Deserialize)]
struct CaloriesEntry {
    date: Option<String>,
    #[serde(default)]
    calories: f64,
}

#[derive(Debug, Deserialize)]
struct StepsEntry {
    date: Option<String>,
    #[serde(default)]
    steps: f64,
}

#[derive(Debug, Deserialize)]
struct SleepSegment {
    date: Option<String>,
    #[serde(default)]
    duration_hours: f64,
}

impl HttpFitnessFeed {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build fitness feed HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, metric: &str) -> Result<Vec<T>> {
        let url = format!("{}/fitness/{}", self.base_url, metric);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to send {} request to fitness feed", metric))?;

        if !response.status().is_success() {
            anyhow::bail!("Failed to fetch {}: {}", metric, response.status());
        }

        let body = response
            .json::<OneOrMany<T>>()
            .await
            .with_context(|| format!("Failed to parse {} response", metric))?;

        Ok(body.into_vec())
    }
}

/// Sum sleep segments that share a date; dates keep their first-seen order
fn merge_sleep_segments(segments: Vec<SleepSegment>) -> Vec<DailyReading> {
    let mut readings: Vec<DailyReading> = Vec::new();

    for segment in segments {
        let existing = segment.date.as_ref().and_then(|date| {
            readings
                .iter_mut()
                .find(|r| r.date.as_ref() == Some(date))
        });

        match existing {
            Some(reading) => reading.value += segment.duration_hours,
            None => readings.push(DailyReading::new(segment.date, segment.duration_hours)),
        }
    }

    readings
}

#[async_trait]
impl FitnessFeed for HttpFitnessFeed {
    async fn calories(&self) -> Result<Vec<DailyReading>> {
        let entries: Vec<CaloriesEntry> = self.fetch("calories").await?;
        Ok(entries
            .into_iter()
            .map(|e| DailyReading::new(e.date, e.calories))
            .collect())
    }

    async fn sleep(&self) -> Result<Vec<DailyReading>> {
        let segments: Vec<SleepSegment> = self.fetch("sleep").await?;
        Ok(merge_sleep_segments(segments))
    }

    async fn steps(&self) -> Result<Vec<DailyReading>> {
        let entries: Vec<StepsEntry> = self.fetch("steps").await?;
        Ok(entries
            .into_iter()
            .map(|e| DailyReading::new(e.date, e.steps))
            .collect())
    }
}
