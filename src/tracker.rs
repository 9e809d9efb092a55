//! Lookup session state
//!
//! The tracker owns the single demo session: the text in the input box, the
//! last validation error, and the lookup phase. A valid trigger moves the
//! session to `Pending` and spawns a one-shot task that sleeps for the
//! configured latency, resolves the number, and stores the record.
//!
//! Flow:
//! 1. `trigger` validates the input (errors are stored, not thrown)
//! 2. On success the phase becomes `Pending` and the deferred task is spawned
//! 3. The task resolves the number and moves the phase to `Resolved`
//! 4. `reset` clears everything and aborts a task still in flight

use crate::errors::LookupError;
use crate::models::LocationRecord;
use crate::resolver;
use crate::validator;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use uuid::Uuid;

/// Default simulated lookup latency.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(2000);

/// Lookup phase of the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Phase {
    /// Nothing in flight and nothing resolved.
    Idle,
    /// A lookup is waiting out the simulated latency.
    Pending {
        lookup_id: Uuid,
        phone: String,
        started_at: DateTime<Utc>,
    },
    /// The last lookup produced a record.
    Resolved {
        lookup_id: Uuid,
        record: LocationRecord,
        resolved_at: DateTime<Utc>,
    },
}

/// Point-in-time copy of the session, used for rendering and JSON responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackerSnapshot {
    /// Current input text.
    pub input: String,
    /// Last validation error message, if any.
    pub error: Option<String>,
    /// Lookup phase.
    pub phase: Phase,
}

impl TrackerSnapshot {
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }

    /// The resolved record, if the session holds one.
    pub fn record(&self) -> Option<&LocationRecord> {
        match &self.phase {
            Phase::Resolved { record, .. } => Some(record),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct SessionState {
    input: String,
    error: Option<String>,
    phase: Phase,
    pending_task: Option<AbortHandle>,
}

impl SessionState {
    fn initial() -> Self {
        Self {
            input: String::new(),
            error: None,
            phase: Phase::Idle,
            pending_task: None,
        }
    }

    fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            input: self.input.clone(),
            error: self.error.clone(),
            phase: self.phase.clone(),
        }
    }
}

/// Shared handle to the demo session.
///
/// Cloning is cheap; all clones see the same session.
#[derive(Debug, Clone)]
pub struct Tracker {
    state: Arc<Mutex<SessionState>>,
    reference_set: Arc<[LocationRecord]>,
    latency: Duration,
}

impl Tracker {
    /// Creates an idle tracker over the given reference set.
    pub fn new(reference_set: Vec<LocationRecord>, latency: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState::initial())),
            reference_set: reference_set.into(),
            latency,
        }
    }

    /// Records used for matching and as quick-fill samples.
    pub fn reference_set(&self) -> &[LocationRecord] {
        &self.reference_set
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub async fn snapshot(&self) -> TrackerSnapshot {
        self.state.lock().await.snapshot()
    }

    /// Replaces the input text without starting a lookup.
    ///
    /// The input is locked while a lookup is pending.
    pub async fn set_input(&self, input: &str) -> Result<TrackerSnapshot, LookupError> {
        let mut state = self.state.lock().await;
        if matches!(state.phase, Phase::Pending { .. }) {
            return Err(LookupError::AlreadyPending);
        }
        state.input = input.to_string();
        Ok(state.snapshot())
    }

    /// Copies the phone of the sample at `index` into the input.
    ///
    /// Returns `Ok(None)` when there is no such sample.
    pub async fn select_sample(&self, index: usize) -> Result<Option<TrackerSnapshot>, LookupError> {
        let Some(sample) = self.reference_set.get(index) else {
            return Ok(None);
        };
        let phone = sample.phone.clone();
        self.set_input(&phone).await.map(Some)
    }

    /// Starts a lookup for `input`.
    ///
    /// Validation failures are stored as the session error and also returned.
    /// While a lookup is pending the trigger is rejected and the session is
    /// left untouched. On success, returns the id of the scheduled lookup.
    pub async fn trigger(&self, input: &str) -> Result<Uuid, LookupError> {
        let mut state = self.state.lock().await;

        if let Phase::Pending { lookup_id, .. } = &state.phase {
            tracing::warn!("Ignoring trigger while lookup {} is pending", lookup_id);
            return Err(LookupError::AlreadyPending);
        }

        state.input = input.to_string();
        state.error = None;

        if let Err(err) = validator::check(input) {
            tracing::info!("Rejected phone input {:?}: {}", input, err);
            state.error = Some(err.to_string());
            return Err(err);
        }

        let lookup_id = Uuid::new_v4();
        state.phase = Phase::Pending {
            lookup_id,
            phone: input.to_string(),
            started_at: Utc::now(),
        };

        let task = tokio::spawn(complete_after(
            Arc::clone(&self.state),
            Arc::clone(&self.reference_set),
            self.latency,
            lookup_id,
            input.to_string(),
        ));
        state.pending_task = Some(task.abort_handle());

        tracing::info!(
            "Lookup {} started for {} ({} ms latency)",
            lookup_id,
            input,
            self.latency.as_millis()
        );

        Ok(lookup_id)
    }

    /// Clears input, error and record, and cancels a pending lookup.
    pub async fn reset(&self) -> TrackerSnapshot {
        let mut state = self.state.lock().await;
        if let Some(task) = state.pending_task.take() {
            task.abort();
            tracing::info!("Cancelled pending lookup on reset");
        }
        *state = SessionState::initial();
        state.snapshot()
    }
}

async fn complete_after(
    state: Arc<Mutex<SessionState>>,
    reference_set: Arc<[LocationRecord]>,
    latency: Duration,
    lookup_id: Uuid,
    phone: String,
) {
    tokio::time::sleep(latency).await;

    let record = resolver::resolve(&phone, &reference_set);

    let mut state = state.lock().await;
    // A reset (or a newer lookup) may have replaced this one while we slept.
    match &state.phase {
        Phase::Pending { lookup_id: current, .. } if *current == lookup_id => {}
        _ => {
            tracing::debug!("Discarding stale lookup {}", lookup_id);
            return;
        }
    }

    tracing::info!(
        "Lookup {} resolved {} -> {}, {}",
        lookup_id,
        phone,
        record.city,
        record.country
    );

    state.phase = Phase::Resolved {
        lookup_id,
        record,
        resolved_at: Utc::now(),
    };
    state.pending_task = None;
}
