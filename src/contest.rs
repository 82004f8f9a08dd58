//! Contest state machine
//!
//! The contest status is owned by a single [`ContestController`] and mutated
//! only through [`ContestController::transition`] (administrator action) or
//! [`ContestController::reset`]. There is no timer: an operator starts and
//! stops the contest by hand. Every mutation broadcasts the new status on the
//! event bus before returning, so observers never lag the state by more than
//! one broadcast cycle.

use std::sync::{Arc, RwLock};

use crate::error::{AppError, AppResult};
use crate::events::{Event, EventBus};
use crate::models::ContestStatus;

/// Authority over the global Waiting/InProgress/Finished gate.
#[derive(Debug, Clone)]
pub struct ContestController {
    status: Arc<RwLock<ContestStatus>>,
    events: EventBus,
}

impl ContestController {
    pub fn new(events: EventBus) -> Self {
        Self {
            status: Arc::new(RwLock::new(ContestStatus::Waiting)),
            events,
        }
    }

    /// Current contest status.
    pub fn status(&self) -> ContestStatus {
        *self.status.read().expect("contest status lock poisoned")
    }

    /// Apply an administrator-requested transition.
    ///
    /// Allowed: `Waiting → InProgress`, `InProgress → Finished`. Everything
    /// else (including `Finished → Waiting`, which only the reset path may
    /// do) is rejected.
    pub fn transition(&self, next: ContestStatus) -> AppResult<ContestStatus> {
        {
            let mut status = self.status.write().expect("contest status lock poisoned");
            let allowed = matches!(
                (*status, next),
                (ContestStatus::Waiting, ContestStatus::InProgress)
                    | (ContestStatus::InProgress, ContestStatus::Finished)
            );
            if !allowed {
                return Err(AppError::InvalidTransition(format!(
                    "{} -> {}",
                    *status, next
                )));
            }
            *status = next;
        }

        tracing::info!(status = %next, "Contest status changed");
        self.events.publish(Event::ContestStatus(next));
        Ok(next)
    }

    /// Force the contest back to `Waiting` as part of a full reset.
    ///
    /// The caller is responsible for clearing persistent contest data; this
    /// only flips the status and broadcasts it.
    pub fn reset(&self) {
        {
            let mut status = self.status.write().expect("contest status lock poisoned");
            *status = ContestStatus::Waiting;
        }
        tracing::info!("Contest status reset to Waiting");
        self.events.publish(Event::ContestStatus(ContestStatus::Waiting));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ContestController {
        ContestController::new(EventBus::new())
    }

    #[test]
    fn test_initial_status_is_waiting() {
        assert_eq!(controller().status(), ContestStatus::Waiting);
    }

    #[test]
    fn test_full_lifecycle() {
        let c = controller();
        c.transition(ContestStatus::InProgress).unwrap();
        assert_eq!(c.status(), ContestStatus::InProgress);
        c.transition(ContestStatus::Finished).unwrap();
        assert_eq!(c.status(), ContestStatus::Finished);
        c.reset();
        assert_eq!(c.status(), ContestStatus::Waiting);
    }

    #[test]
    fn test_illegal_transitions_rejected() {
        let c = controller();
        assert!(c.transition(ContestStatus::Finished).is_err());
        assert!(c.transition(ContestStatus::Waiting).is_err());

        c.transition(ContestStatus::InProgress).unwrap();
        assert!(c.transition(ContestStatus::Waiting).is_err());

        c.transition(ContestStatus::Finished).unwrap();
        // Finished -> Waiting only via reset
        assert!(c.transition(ContestStatus::Waiting).is_err());
        assert_eq!(c.status(), ContestStatus::Finished);
    }

    #[tokio::test]
    async fn test_transition_broadcasts_synchronously() {
        let events = EventBus::new();
        let mut rx = events.subscribe();
        let c = ContestController::new(events);

        c.transition(ContestStatus::InProgress).unwrap();

        let event = rx.recv().await.unwrap();
        assert!(matches!(
            event,
            Event::ContestStatus(ContestStatus::InProgress)
        ));
    }
}
