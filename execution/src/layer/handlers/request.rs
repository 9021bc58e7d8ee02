use super::super::*;
use gamehub_types::gaming::NotificationKind;

impl Layer {
    // === Request Handlers ===

    pub(in crate::layer) fn handle_request_started(&mut self) -> Vec<Event> {
        self.pending.in_flight = self.pending.in_flight.saturating_add(1);
        self.pending.error = None;
        vec![Event::RequestStarted {
            in_flight: self.pending.in_flight,
        }]
    }

    pub(in crate::layer) fn handle_request_finished(&mut self) -> Vec<Event> {
        self.pending.in_flight = self.pending.in_flight.saturating_sub(1);
        vec![Event::RequestFinished {
            in_flight: self.pending.in_flight,
        }]
    }

    pub(in crate::layer) fn handle_request_failed(
        &mut self,
        title: String,
        message: String,
        at_ms: u64,
    ) -> Vec<Event> {
        self.pending.in_flight = self.pending.in_flight.saturating_sub(1);
        self.pending.error = Some(message.clone());
        let pushed = self.push_notification(
            NotificationKind::Error,
            title,
            message.clone(),
            None,
            at_ms,
        );
        vec![Event::RequestFailed { message }, pushed]
    }
}

#[cfg(test)]
mod tests {
    use crate::{mocks::seeded_snapshot, Layer};
    use gamehub_types::{
        gaming::{NotificationKind, NETWORK_ERROR_MESSAGE},
        Command, Event,
    };

    #[test]
    fn test_loading_tracks_overlapping_requests() {
        let state = seeded_snapshot();
        let mut layer = Layer::new(&state);
        layer.apply(Command::RequestStarted);
        layer.apply(Command::RequestStarted);
        assert!(layer.view().is_loading());
        assert_eq!(
            layer.apply(Command::RequestFinished),
            vec![Event::RequestFinished { in_flight: 1 }]
        );
        assert!(layer.view().is_loading());
        layer.apply(Command::RequestFinished);
        assert!(!layer.view().is_loading());

        // Unbalanced finish stays at zero
        layer.apply(Command::RequestFinished);
        assert_eq!(layer.commit().in_flight, 0);
    }

    #[test]
    fn test_failure_surfaces_error_notification() {
        let state = seeded_snapshot();
        let mut layer = Layer::new(&state);
        layer.apply(Command::RequestStarted);
        let events = layer.apply(Command::RequestFailed {
            title: "Failed to claim prize".to_string(),
            message: NETWORK_ERROR_MESSAGE.to_string(),
            at_ms: 10_000,
        });
        assert_eq!(
            events,
            vec![
                Event::RequestFailed {
                    message: NETWORK_ERROR_MESSAGE.to_string()
                },
                Event::NotificationPushed {
                    id: 1,
                    kind: NotificationKind::Error
                },
            ]
        );

        let next = layer.commit();
        assert!(!next.is_loading());
        assert_eq!(next.error.as_deref(), Some(NETWORK_ERROR_MESSAGE));
        assert_eq!(next.notifications[0].title, "Failed to claim prize");
        assert_eq!(next.notifications[0].duration_ms, Some(8_000));

        // The next request clears the error
        let mut layer = Layer::new(&next);
        layer.apply(Command::RequestStarted);
        assert!(layer.commit().error.is_none());
    }
}
