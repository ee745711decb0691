// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

use crate::application::statistics_aggregator::StatisticsAggregator;
use crate::application::statistics_session::local_clock;
use crate::domain::samples::{NoSampleProvider, RandomSampleProvider, SampleProvider};
use crate::infrastructure::config::{SampleMode, load_app_config};
use crate::infrastructure::firestore_meal_store::FirestoreMealStore;
use crate::infrastructure::fitness_client::HttpFitnessFeed;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let app_config = load_app_config()?;

    // Create adapters (infrastructure layer)
    let fitness_feed = Arc::new(HttpFitnessFeed::new(
        app_config.fitness.base_url.clone(),
        Duration::from_secs(app_config.fitness.timeout_secs),
    )?);

    let firestore = &app_config.firestore;
    let meal_store = Arc::new(FirestoreMealStore::new(
        firestore.base_url.clone(),
        firestore.project_id.clone(),
        firestore.api_key.clone(),
        firestore.bearer_token.clone(),
        Duration::from_secs(firestore.timeout_secs),
    )?);

    let samples: Arc<dyn SampleProvider> = match app_config.fallback.samples {
        SampleMode::Random => Arc::new(RandomSampleProvider),
        SampleMode::None => Arc::new(NoSampleProvider),
    };

    // Create use cases (application layer)
    let aggregator = StatisticsAggregator::new(
        fitness_feed,
        meal_store,
        samples,
        app_config.fallback.fallback_month(),
    );

    // Create application state and router (presentation layer)
    let state = Arc::new(AppState::new(
        aggregator,
        local_clock(),
        app_config.server.max_sessions,
    ));
    let router = build_router(state);

    let listener = TcpListener::bind(&app_config.server.bind).await?;
    tracing::info!("Starting nutrition-stats service on {}", app_config.server.bind);

    axum::serve(listener, router).await?;

    Ok(())
}
