// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod firestore_meal_store;
pub mod fitness_client;
pub mod http_response;
