// Application state for HTTP handlers
use crate::application::statistics_aggregator::StatisticsAggregator;
use crate::application::statistics_session::{Clock, StatisticsSession};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::RwLock;

const DEFAULT_MAX_SESSIONS: NonZeroUsize = match NonZeroUsize::new(1024) {
    Some(n) => n,
    None => unreachable!(),
};

/// One statistics session per user, created on first use.
///
/// At most `max_sessions` are kept; opening one more drops the least recently
/// used session.
pub struct AppState {
    aggregator: StatisticsAggregator,
    clock: Clock,
    sessions: RwLock<LruCache<String, Arc<StatisticsSession>>>,
}

impl AppState {
    pub fn new(aggregator: StatisticsAggregator, clock: Clock, max_sessions: usize) -> Self {
        let capacity = NonZeroUsize::new(max_sessions).unwrap_or(DEFAULT_MAX_SESSIONS);
        Self {
            aggregator,
            clock,
            sessions: RwLock::new(LruCache::new(capacity)),
        }
    }

    pub async fn session(&self, user_id: &str) -> Arc<StatisticsSession> {
        // LruCache::get is mutable (updates access order)
        let mut sessions = self.sessions.write().await;
        if let Some(session) = sessions.get(user_id) {
            return session.clone();
        }

        tracing::debug!("Opening statistics session for {}", user_id);
        let session = Arc::new(StatisticsSession::new(
            user_id.to_string(),
            self.aggregator.clone(),
            self.clock.clone(),
        ));
        if let Some((evicted, _)) = sessions.push(user_id.to_string(), session.clone()) {
            tracing::debug!("Closed idle statistics session for {}", evicted);
        }
        session
    }

    pub async fn existing_session(&self, user_id: &str) -> Option<Arc<StatisticsSession>> {
        self.sessions.write().await.get(user_id).cloned()
    }

    #[cfg(test)]
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
