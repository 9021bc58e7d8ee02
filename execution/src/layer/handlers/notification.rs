use super::super::*;
use gamehub_types::gaming::{Notification, NotificationKind};

impl Layer {
    // === Notification Handlers ===

    /// Prepend a notification, assigning it the next id.
    pub(in crate::layer) fn push_notification(
        &mut self,
        kind: NotificationKind,
        title: String,
        message: String,
        duration_ms: Option<u64>,
        at_ms: u64,
    ) -> Event {
        let id = self.pending.next_notification_id;
        self.pending.next_notification_id += 1;
        self.pending.notifications.insert(
            0,
            Notification {
                id,
                kind,
                title,
                message,
                duration_ms: duration_ms.or(Some(kind.default_duration_ms())),
                read: false,
                created_at_ms: at_ms,
            },
        );
        Event::NotificationPushed { id, kind }
    }

    pub(in crate::layer) fn handle_mark_notification_read(&mut self, id: u64) -> Vec<Event> {
        let Some(notification) = self
            .pending
            .notifications
            .iter_mut()
            .find(|n| n.id == id && !n.read)
        else {
            return vec![];
        };
        notification.read = true;
        vec![Event::NotificationRead { id }]
    }

    pub(in crate::layer) fn handle_dismiss_notification(&mut self, id: u64) -> Vec<Event> {
        let before = self.pending.notifications.len();
        self.pending.notifications.retain(|n| n.id != id);
        if self.pending.notifications.len() == before {
            return vec![];
        }
        vec![Event::NotificationsRemoved { ids: vec![id] }]
    }

    pub(in crate::layer) fn handle_expire_notifications(&mut self, now_ms: u64) -> Vec<Event> {
        let ids: Vec<u64> = self
            .pending
            .notifications
            .iter()
            .filter(|n| n.is_expired(now_ms))
            .map(|n| n.id)
            .collect();
        if ids.is_empty() {
            return vec![];
        }
        self.pending.notifications.retain(|n| !n.is_expired(now_ms));
        vec![Event::NotificationsRemoved { ids }]
    }

    pub(in crate::layer) fn handle_clear_notifications(&mut self) -> Vec<Event> {
        if self.pending.notifications.is_empty() {
            return vec![];
        }
        let ids = self.pending.notifications.drain(..).map(|n| n.id).collect();
        vec![Event::NotificationsRemoved { ids }]
    }
}

#[cfg(test)]
mod tests {
    use crate::{mocks::seeded_snapshot, Layer};
    use gamehub_types::{gaming::NotificationKind, Command, Event};

    fn notify(
        kind: NotificationKind,
        title: &str,
        duration_ms: Option<u64>,
        at_ms: u64,
    ) -> Command {
        Command::Notify {
            kind,
            title: title.to_string(),
            message: String::new(),
            duration_ms,
            at_ms,
        }
    }

    #[test]
    fn test_ids_are_sequential_and_newest_first() {
        let state = seeded_snapshot();
        let mut layer = Layer::new(&state);
        let first = layer.apply(notify(NotificationKind::Success, "Prize claimed!", None, 0));
        let second = layer.apply(notify(NotificationKind::Info, "Welcome", None, 0));
        assert_eq!(
            first,
            vec![Event::NotificationPushed {
                id: 1,
                kind: NotificationKind::Success
            }]
        );
        assert_eq!(
            second,
            vec![Event::NotificationPushed {
                id: 2,
                kind: NotificationKind::Info
            }]
        );

        let next = layer.commit();
        assert_eq!(next.next_notification_id, 3);
        assert_eq!(next.notifications[0].id, 2);
        assert_eq!(next.notifications[1].id, 1);
        assert_eq!(next.notifications[1].duration_ms, Some(5_000));
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let state = seeded_snapshot();
        let mut layer = Layer::new(&state);
        layer.apply(notify(NotificationKind::Warning, "a", None, 0));
        assert_eq!(
            layer.apply(Command::DismissNotification { id: 1 }),
            vec![Event::NotificationsRemoved { ids: vec![1] }]
        );
        assert!(layer.apply(Command::DismissNotification { id: 1 }).is_empty());
        let events = layer.apply(notify(NotificationKind::Warning, "b", None, 0));
        assert_eq!(
            events,
            vec![Event::NotificationPushed {
                id: 2,
                kind: NotificationKind::Warning
            }]
        );
    }

    #[test]
    fn test_expire_uses_kind_durations() {
        let state = seeded_snapshot();
        let mut layer = Layer::new(&state);
        layer.apply(notify(NotificationKind::Success, "success", None, 1_000));
        layer.apply(notify(NotificationKind::Error, "error", None, 1_000));
        layer.apply(notify(NotificationKind::Info, "custom", Some(100), 1_000));

        assert_eq!(
            layer.apply(Command::ExpireNotifications { now_ms: 1_100 }),
            vec![Event::NotificationsRemoved { ids: vec![3] }]
        );
        assert!(layer
            .apply(Command::ExpireNotifications { now_ms: 5_999 })
            .is_empty());
        assert_eq!(
            layer.apply(Command::ExpireNotifications { now_ms: 6_000 }),
            vec![Event::NotificationsRemoved { ids: vec![1] }]
        );
        assert_eq!(
            layer.apply(Command::ExpireNotifications { now_ms: 9_000 }),
            vec![Event::NotificationsRemoved { ids: vec![2] }]
        );
        assert!(layer.commit().notifications.is_empty());
    }

    #[test]
    fn test_mark_read_and_clear() {
        let state = seeded_snapshot();
        let mut layer = Layer::new(&state);
        assert!(layer.apply(Command::ClearNotifications).is_empty());

        layer.apply(notify(NotificationKind::Info, "a", None, 0));
        layer.apply(notify(NotificationKind::Info, "b", None, 0));
        assert_eq!(
            layer.apply(Command::MarkNotificationRead { id: 1 }),
            vec![Event::NotificationRead { id: 1 }]
        );
        assert!(layer.apply(Command::MarkNotificationRead { id: 1 }).is_empty());
        assert_eq!(layer.view().unread_notifications(), 1);

        assert_eq!(
            layer.apply(Command::ClearNotifications),
            vec![Event::NotificationsRemoved { ids: vec![2, 1] }]
        );
        let next = layer.commit();
        assert!(next.notifications.is_empty());
        assert_eq!(next.next_notification_id, 3);
    }
}
