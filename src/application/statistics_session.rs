// Statistics session - the per-user view state behind the statistics screen
use crate::application::error::StatisticsError;
use crate::application::statistics_aggregator::StatisticsAggregator;
use crate::domain::report::StatisticsReport;
use crate::domain::time_range::TimeRange;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Supplies "today" for the meal window
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

pub fn local_clock() -> Clock {
    Arc::new(|| Local::now().date_naive())
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionState {
    pub range: TimeRange,
    pub loading: bool,
    pub error: Option<String>,
    pub report: Option<StatisticsReport>,
    /// Token of the run that produced the committed state
    pub token: u64,
}

/// What a single refresh ended with
#[derive(Debug)]
pub enum RefreshOutcome {
    Committed(SessionState),
    /// A newer run started before this one finished; its result was dropped
    Superseded(SessionState),
    /// The committed state carries the user-facing message
    Failed(StatisticsError),
}

/// Owns the view state for one user.
///
/// Every run takes a token from a monotonic counter; only the run holding the
/// newest token may commit, so a slow run can never overwrite a newer one.
pub struct StatisticsSession {
    user_id: String,
    aggregator: StatisticsAggregator,
    clock: Clock,
    next_token: AtomicU64,
    state: RwLock<SessionState>,
}

impl StatisticsSession {
    pub fn new(user_id: String, aggregator: StatisticsAggregator, clock: Clock) -> Self {
        Self {
            user_id,
            aggregator,
            clock,
            next_token: AtomicU64::new(0),
            state: RwLock::new(SessionState::default()),
        }
    }

    pub async fn snapshot(&self) -> SessionState {
        let state = self.state.read().await;
        (*state).clone()
    }

    /// Switch the range and reload
    pub async fn set_range(&self, range: TimeRange) -> RefreshOutcome {
        self.state.write().await.range = range;
        self.refresh().await
    }

    /// Reload the current range. Also the retry action after a failure.
    pub async fn refresh(&self) -> RefreshOutcome {
        let token = self.next_token.fetch_add(1, Ordering::SeqCst) + 1;

        let range = {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
            state.range
        };

        tracing::info!(
            "Loading {} statistics for {} (run {})",
            range,
            self.user_id,
            token
        );

        let today = (self.clock)();
        let result = self.aggregator.build_report(&self.user_id, range, today).await;

        let mut state = self.state.write().await;
        if self.next_token.load(Ordering::SeqCst) != token {
            tracing::debug!(
                "Dropping stale statistics run {} for {}",
                token,
                self.user_id
            );
            return RefreshOutcome::Superseded((*state).clone());
        }

        state.loading = false;
        state.token = token;
        match result {
            Ok(report) => {
                state.report = Some(report);
                RefreshOutcome::Committed((*state).clone())
            }
            Err(e) => {
                tracing::error!(
                    "Error loading statistics for {}: {}: {:#}",
                    self.user_id,
                    e,
                    e.cause()
                );
                state.report = None;
                state.error = Some(e.user_message().to_string());
                RefreshOutcome::Failed(e)
            }
        }
    }
}
