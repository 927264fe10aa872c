//! Authorization with denial auditing.
//!
//! [`ValidationService`] runs the authorization rule and, only when it
//! refuses, writes the attempt to the audit trail. The audit write is tried
//! once; whether it worked is folded into the returned denial and never turns
//! a denial into anything else. Allowed requests are not audited here.

use std::sync::Arc;

use crate::application::ports::AuditingGateway;
use crate::domain::{Actor, AuthorizationDenial, AuthorizationOutcome, RequestedMode, evaluate};

#[derive(Clone)]
pub struct ValidationService {
    auditing: Arc<dyn AuditingGateway>,
}

impl ValidationService {
    #[must_use]
    pub fn new(auditing: Arc<dyn AuditingGateway>) -> Self {
        Self { auditing }
    }

    /// Decides whether `actor` may proceed in `mode`, auditing refusals.
    pub fn validate(&self, actor: &Actor, mode: RequestedMode) -> AuthorizationOutcome {
        if evaluate(actor, mode) {
            return AuthorizationOutcome::Allowed;
        }

        let audit = self.auditing.record_denied_attempt(actor, mode);
        if let Err(error) = &audit {
            tracing::warn!(
                actor_id = %actor.id(),
                %mode,
                "Failed to record denied attempt: {}",
                error
            );
        }

        AuthorizationOutcome::Denied(AuthorizationDenial::new(*actor, mode, &audit))
    }
}

impl std::fmt::Debug for ValidationService {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ValidationService")
            .field("auditing", &"<dyn AuditingGateway>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{GatewayError, GatewayResult};
    use crate::domain::TrustLevel;
    use crate::domain::value_objects::{ActorId, Timestamp};
    use parking_lot::Mutex;
    use rstest::rstest;

    // =========================================================================
    // Mock Implementations for Testing
    // =========================================================================

    struct MockAuditing {
        fail: bool,
        denied: Mutex<Vec<(Actor, RequestedMode)>>,
        successes: Mutex<usize>,
    }

    impl MockAuditing {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                fail,
                denied: Mutex::new(Vec::new()),
                successes: Mutex::new(0),
            })
        }
    }

    impl AuditingGateway for MockAuditing {
        fn record_denied_attempt(&self, actor: &Actor, mode: RequestedMode) -> GatewayResult<()> {
            self.denied.lock().push((*actor, mode));
            if self.fail {
                Err(GatewayError::new(
                    "record_denied_attempt",
                    "audit store unreachable",
                ))
            } else {
                Ok(())
            }
        }

        fn record_success(
            &self,
            _actor_id: ActorId,
            _window_start: Timestamp,
        ) -> GatewayResult<()> {
            *self.successes.lock() += 1;
            Ok(())
        }
    }

    fn all_actors() -> Vec<Actor> {
        let administrators = [true, false]
            .into_iter()
            .map(|is_super_admin| Actor::administrator(ActorId::new(2), is_super_admin));
        let users = TrustLevel::ALL
            .into_iter()
            .map(|trust_level| Actor::standard_user(ActorId::new(1), trust_level));
        administrators.chain(users).collect()
    }

    // =========================================================================
    // validate Tests
    // =========================================================================

    #[rstest]
    fn allowed_request_is_not_audited() {
        let auditing = MockAuditing::new(false);
        let service = ValidationService::new(auditing.clone());
        let actor = Actor::standard_user(ActorId::new(1), TrustLevel::TrustedOperative);

        let outcome = service.validate(&actor, RequestedMode::Mode1);

        assert_eq!(outcome, AuthorizationOutcome::Allowed);
        assert!(auditing.denied.lock().is_empty());
        assert_eq!(*auditing.successes.lock(), 0);
    }

    #[rstest]
    fn denied_request_is_audited_once() {
        let auditing = MockAuditing::new(false);
        let service = ValidationService::new(auditing.clone());
        let actor = Actor::administrator(ActorId::new(2), false);

        let outcome = service.validate(&actor, RequestedMode::Mode1);

        assert_eq!(
            outcome,
            AuthorizationOutcome::Denied(AuthorizationDenial {
                actor,
                mode: RequestedMode::Mode1,
                audit_recording_failed: false,
            })
        );
        assert_eq!(*auditing.denied.lock(), vec![(actor, RequestedMode::Mode1)]);
    }

    #[rstest]
    fn audit_failure_is_attached_to_denial() {
        let auditing = MockAuditing::new(true);
        let service = ValidationService::new(auditing.clone());
        let actor = Actor::standard_user(ActorId::new(1), TrustLevel::PossibleRisk);

        let outcome = service.validate(&actor, RequestedMode::Mode2);

        match outcome {
            AuthorizationOutcome::Denied(denial) => {
                assert!(denial.audit_recording_failed);
                assert_eq!(denial.actor, actor);
                assert_eq!(denial.mode, RequestedMode::Mode2);
            }
            AuthorizationOutcome::Allowed => panic!("Expected denial"),
        }
        assert_eq!(auditing.denied.lock().len(), 1);
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn audits_if_and_only_if_rule_denies(#[case] audit_fails: bool) {
        for actor in all_actors() {
            for mode in RequestedMode::ALL {
                let auditing = MockAuditing::new(audit_fails);
                let service = ValidationService::new(auditing.clone());

                let outcome = service.validate(&actor, mode);

                let expected_calls = usize::from(!evaluate(&actor, mode));
                assert_eq!(auditing.denied.lock().len(), expected_calls);
                assert_eq!(outcome.is_allowed(), evaluate(&actor, mode));
            }
        }
    }
}
