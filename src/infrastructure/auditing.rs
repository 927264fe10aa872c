//! In-memory audit trail.
//!
//! [`RecordingAuditor`] keeps every audit entry in arrival order, stamped
//! with the time given by its [`Clock`]. Denied attempts and successes can be
//! made to fail independently.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use serde::Serialize;

use crate::application::{AuditingGateway, Clock, GatewayError, GatewayResult};
use crate::domain::value_objects::{ActorId, Timestamp};
use crate::domain::{Actor, RequestedMode};

/// What an audit entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AuditAction {
    DeniedAttempt {
        actor: Actor,
        mode: RequestedMode,
    },
    Succeeded {
        actor_id: ActorId,
        window_start: Timestamp,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    #[serde(flatten)]
    pub action: AuditAction,
    pub recorded_at: Timestamp,
}

// =============================================================================
// RecordingAuditor
// =============================================================================

pub struct RecordingAuditor {
    clock: Arc<dyn Clock>,
    entries: Mutex<Vec<AuditEntry>>,
    fail_denied_attempts: AtomicBool,
    fail_successes: AtomicBool,
}

impl RecordingAuditor {
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            entries: Mutex::new(Vec::new()),
            fail_denied_attempts: AtomicBool::new(false),
            fail_successes: AtomicBool::new(false),
        }
    }

    /// A snapshot of the entries recorded so far.
    #[must_use]
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries.lock().clone()
    }

    pub fn fail_denied_attempts(&self, fail: bool) {
        self.fail_denied_attempts.store(fail, Ordering::SeqCst);
    }

    pub fn fail_successes(&self, fail: bool) {
        self.fail_successes.store(fail, Ordering::SeqCst);
    }

    fn append(&self, action: AuditAction) {
        let entry = AuditEntry {
            action,
            recorded_at: self.clock.now(),
        };
        tracing::info!(?entry, "Audit entry recorded");
        self.entries.lock().push(entry);
    }
}

impl AuditingGateway for RecordingAuditor {
    fn record_denied_attempt(&self, actor: &Actor, mode: RequestedMode) -> GatewayResult<()> {
        if self.fail_denied_attempts.load(Ordering::SeqCst) {
            return Err(GatewayError::new(
                "record_denied_attempt",
                "audit trail rejected the entry",
            ));
        }
        self.append(AuditAction::DeniedAttempt {
            actor: *actor,
            mode,
        });
        Ok(())
    }

    fn record_success(&self, actor_id: ActorId, window_start: Timestamp) -> GatewayResult<()> {
        if self.fail_successes.load(Ordering::SeqCst) {
            return Err(GatewayError::new(
                "record_success",
                "audit trail rejected the entry",
            ));
        }
        self.append(AuditAction::Succeeded {
            actor_id,
            window_start,
        });
        Ok(())
    }
}

impl std::fmt::Debug for RecordingAuditor {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("RecordingAuditor")
            .field("clock", &"<dyn Clock>")
            .field("entries", &self.entries.lock().len())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(RecordingAuditor: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TrustLevel;
    use crate::infrastructure::FixedClock;
    use rstest::{fixture, rstest};

    const NOW_MILLIS: i64 = 1_710_072_000_000;

    #[fixture]
    fn now() -> Timestamp {
        Timestamp::from_unix_millis(NOW_MILLIS).unwrap()
    }

    #[fixture]
    fn auditor(now: Timestamp) -> RecordingAuditor {
        RecordingAuditor::new(Arc::new(FixedClock::new(now)))
    }

    #[rstest]
    fn entries_are_kept_in_order_and_stamped(auditor: RecordingAuditor, now: Timestamp) {
        let actor = Actor::standard_user(ActorId::new(1), TrustLevel::PossibleRisk);

        auditor
            .record_denied_attempt(&actor, RequestedMode::Mode2)
            .unwrap();
        auditor.record_success(ActorId::new(1), now).unwrap();

        assert_eq!(
            auditor.entries(),
            vec![
                AuditEntry {
                    action: AuditAction::DeniedAttempt {
                        actor,
                        mode: RequestedMode::Mode2,
                    },
                    recorded_at: now,
                },
                AuditEntry {
                    action: AuditAction::Succeeded {
                        actor_id: ActorId::new(1),
                        window_start: now,
                    },
                    recorded_at: now,
                },
            ]
        );
    }

    #[rstest]
    fn failing_denied_attempts_leave_trail_untouched(auditor: RecordingAuditor, now: Timestamp) {
        auditor.fail_denied_attempts(true);
        let actor = Actor::administrator(ActorId::new(2), false);

        let error = auditor
            .record_denied_attempt(&actor, RequestedMode::Mode1)
            .unwrap_err();

        assert_eq!(error.operation(), "record_denied_attempt");
        assert!(auditor.entries().is_empty());
        assert!(auditor.record_success(ActorId::new(2), now).is_ok());
    }

    #[rstest]
    fn failing_successes_leave_trail_untouched(auditor: RecordingAuditor, now: Timestamp) {
        auditor.fail_successes(true);

        let error = auditor.record_success(ActorId::new(1), now).unwrap_err();

        assert_eq!(error.operation(), "record_success");
        assert!(auditor.entries().is_empty());
    }

    #[rstest]
    fn entry_serializes_with_action_tag(now: Timestamp) {
        let entry = AuditEntry {
            action: AuditAction::Succeeded {
                actor_id: ActorId::new(7),
                window_start: now,
            },
            recorded_at: now,
        };

        let json = serde_json::to_value(entry).unwrap();

        assert_eq!(json["action"], "succeeded");
        assert_eq!(json["actor_id"], 7);
    }
}
