// Application layer - use cases and the ports they depend on
pub mod error;
pub mod fitness_feed;
pub mod meal_store;
pub mod statistics_aggregator;
pub mod statistics_session;
