use crate::core::{ConfigProvider, Profile, Query, QueryResult, QueryState, Transport};
use crate::utils::error::{Result, SondeoError};
use std::sync::{Mutex, MutexGuard};

/// Mediates one request/response cycle with the inference service.
///
/// Exactly one outbound call per `submit`; no retries, no caching, no
/// streaming. The published state is a single slot tagged with a per-cycle
/// sequence number: a completion that lands after `reset` or after a newer
/// `submit` is discarded instead of applied.
pub struct QueryClient<T: Transport, C: ConfigProvider> {
    transport: T,
    config: C,
    slot: Mutex<StateSlot>,
}

#[derive(Debug, Default)]
struct StateSlot {
    seq: u64,
    state: QueryState,
}

impl<T: Transport, C: ConfigProvider> QueryClient<T, C> {
    pub fn new(transport: T, config: C) -> Self {
        Self {
            transport,
            config,
            slot: Mutex::new(StateSlot::default()),
        }
    }

    /// Snapshot of the published state for the presentation layer.
    pub fn state(&self) -> QueryState {
        self.lock_slot().state.clone()
    }

    /// Validates the inputs and performs exactly one exchange with the
    /// service. Validation failures are reported before any network activity.
    pub async fn submit(&self, question: &str, profile: Option<Profile>) -> Result<QueryResult> {
        let question = question.trim();
        if question.is_empty() {
            return Err(self.fail_validation("question"));
        }
        let Some(profile) = profile else {
            return Err(self.fail_validation("profile"));
        };

        let seq = self.begin_cycle();
        let query = Query {
            question: question.to_string(),
            profile,
        };

        tracing::debug!("submission #{}: asking as profile '{}'", seq, profile);
        match self
            .transport
            .send_query(self.config.inference_endpoint(), &query)
            .await
        {
            Ok(reply) => {
                let result = QueryResult::from_raw(reply.response);
                self.publish(seq, QueryState::HasResult(result.clone()));
                Ok(result)
            }
            Err(e) => {
                tracing::warn!("submission #{} failed: {}", seq, e);
                self.publish(seq, QueryState::HasError(e.clone()));
                Err(e)
            }
        }
    }

    /// Returns the client to its initial state. Idempotent. A response still
    /// in flight is not aborted; it is discarded when it lands.
    pub fn reset(&self) {
        let mut slot = self.lock_slot();
        slot.seq += 1;
        slot.state = QueryState::Idle;
    }

    fn fail_validation(&self, field: &str) -> SondeoError {
        let err = SondeoError::missing_field(field);
        let mut slot = self.lock_slot();
        // Starts a new cycle too, so an older in-flight response cannot
        // overwrite this error.
        slot.seq += 1;
        slot.state = QueryState::HasError(err.clone());
        err
    }

    fn begin_cycle(&self) -> u64 {
        let mut slot = self.lock_slot();
        slot.seq += 1;
        slot.state = QueryState::Pending;
        slot.seq
    }

    fn publish(&self, seq: u64, next: QueryState) {
        let mut slot = self.lock_slot();
        if slot.seq != seq {
            tracing::debug!("submission #{} superseded, discarding its outcome", seq);
            return;
        }
        slot.state = next;
    }

    fn lock_slot(&self) -> MutexGuard<'_, StateSlot> {
        // Slot writes are single assignments; a poisoned lock still holds a
        // coherent value.
        match self.slot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
