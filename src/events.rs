//! Outbound event channel
//!
//! Every notification the server pushes to connected clients goes through a
//! single typed broadcast channel. Publishing is fire-and-forget: events are
//! fanned out to whoever is connected right now and dropped otherwise.
//! WebSocket sessions subscribe in [`crate::handlers::ws`].

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::models::{ContestStatus, GlobalAlert};

const EVENT_CHANNEL_CAPACITY: usize = 256;

/// A server-to-client notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum Event {
    /// The contest moved to a new state
    ContestStatus(ContestStatus),
    /// Scoreboard / participant data changed; clients should refetch
    DashboardRefresh,
    /// The problem set was edited by an administrator
    ProblemListChanged,
    /// A problem was solved for the first time
    FirstBlood(GlobalAlert),
    /// A participant was removed by an administrator; their session is void
    ParticipantKicked { name: String },
    /// All participant sessions are void (contest reset)
    ForceLogout,
}

/// Cheaply cloneable handle to the broadcast channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Broadcast an event to all current subscribers.
    ///
    /// A send error only means nobody is listening, which is fine for
    /// best-effort notifications.
    pub fn publish(&self, event: Event) {
        let receivers = self.tx.receiver_count();
        if let Err(e) = self.tx.send(event) {
            tracing::trace!(receivers, "Event dropped (no subscribers): {:?}", e.0);
        }
    }

    /// Subscribe to the event stream (used by WebSocket sessions).
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_reaches_subscriber() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.publish(Event::DashboardRefresh);

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, Event::DashboardRefresh));
    }

    #[test]
    fn test_publish_without_subscribers_is_silent() {
        let bus = EventBus::new();
        // Must not panic or error out
        bus.publish(Event::ForceLogout);
    }

    #[test]
    fn test_event_wire_format() {
        let json = serde_json::to_value(Event::ParticipantKicked {
            name: "alice".to_string(),
        })
        .unwrap();
        assert_eq!(json["event"], "participant_kicked");
        assert_eq!(json["data"]["name"], "alice");
    }
}
