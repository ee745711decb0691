// Firestore REST meal store implementation
use crate::application::meal_store::MealStore;
use crate::domain::meal::{DailyMealRecord, MealEntry};
use crate::domain::time_range::date_key;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;

/// Reads `users/{uid}/meals/{YYYY-MM-DD}` documents
#[derive(Debug, Clone)]
pub struct FirestoreMealStore {
    base_url: String,
    project_id: String,
    api_key: Option<String>,
    bearer_token: Option<String>,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct FirestoreDocument {
    #[serde(default)]
    fields: Map<String, Value>,
}

impl FirestoreMealStore {
    pub fn new(
        base_url: String,
        project_id: String,
        api_key: Option<String>,
        bearer_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build Firestore HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id,
            api_key,
            bearer_token,
            client,
        })
    }

    fn document_url(&self, user_id: &str, date: NaiveDate) -> String {
        let mut url = format!(
            "{}/v1/projects/{}/databases/(default)/documents/users/{}/meals/{}",
            self.base_url,
            urlencoding::encode(&self.project_id),
            urlencoding::encode(user_id),
            date_key(date)
        );
        if let Some(key) = &self.api_key {
            url.push_str("?key=");
            url.push_str(&urlencoding::encode(key));
        }
        url
    }
}

/// Numeric field of a Firestore map; integers arrive as strings
fn number_field(fields: &Map<String, Value>, name: &str) -> f64 {
    let Some(value) = fields.get(name) else {
        return 0.0;
    };

    if let Some(v) = value.get("doubleValue").and_then(Value::as_f64) {
        return v;
    }
    match value.get("integerValue") {
        Some(Value::String(s)) => s.parse().unwrap_or(0.0),
        Some(v) => v.as_f64().unwrap_or(0.0),
        None => 0.0,
    }
}

fn string_field(fields: &Map<String, Value>, name: &str) -> String {
    fields
        .get(name)
        .and_then(|v| v.get("stringValue"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// One meal slot (`b`, `l` or `d`); absent slots are zeroed
fn meal_slot(fields: &Map<String, Value>, slot: &str) -> MealEntry {
    let Some(map) = fields
        .get(slot)
        .and_then(|v| v.get("mapValue"))
        .and_then(|m| m.get("fields"))
        .and_then(Value::as_object)
    else {
        return MealEntry::default();
    };

    MealEntry {
        calories: number_field(map, "calories"),
        carbs: number_field(map, "carbs_g"),
        fat: number_field(map, "fats_g"),
        protein: number_field(map, "protein_g"),
        food: string_field(map, "food"),
    }
}

fn parse_meal_document(date: NaiveDate, document: FirestoreDocument) -> DailyMealRecord {
    DailyMealRecord::new(
        date_key(date),
        meal_slot(&document.fields, "b"),
        meal_slot(&document.fields, "l"),
        meal_slot(&document.fields, "d"),
    )
}

#[async_trait]
impl MealStore for FirestoreMealStore {
    async fn get_meal_record(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<DailyMealRecord>> {
        let url = self.document_url(user_id, date);

        let mut request = self.client.get(&url).header("Accept", "application/json");
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .context("Failed to send request to Firestore")?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Firestore read failed with status {}: {}", status, body);
        }

        let document = response
            .json::<FirestoreDocument>()
            .await
            .context("Failed to parse Firestore document")?;

        Ok(Some(parse_meal_document(date, document)))
    }
}
