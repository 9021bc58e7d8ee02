use super::super::*;
use gamehub_types::gaming::AssistantMessage;

impl Layer {
    // === Assistant Handlers ===

    pub(in crate::layer) fn handle_load_messages(
        &mut self,
        messages: Vec<AssistantMessage>,
    ) -> Vec<Event> {
        let count = messages.len();
        self.pending.messages = messages;
        vec![Event::MessagesLoaded { count }]
    }

    pub(in crate::layer) fn handle_assistant_reply(
        &mut self,
        message: AssistantMessage,
    ) -> Vec<Event> {
        if self.pending.message(&message.id).is_some() {
            return vec![];
        }
        let message_id = message.id.clone();
        self.pending.messages.insert(0, message);
        self.pending.assistance_requests = self.pending.assistance_requests.saturating_add(1);
        vec![Event::AssistantReplied {
            message_id,
            assistance_requests: self.pending.assistance_requests,
        }]
    }

    pub(in crate::layer) fn handle_mark_message_read(&mut self, message_id: &str) -> Vec<Event> {
        let Some(message) = self
            .pending
            .messages
            .iter_mut()
            .find(|m| m.id == message_id && !m.read)
        else {
            return vec![];
        };
        message.read = true;
        vec![Event::MessageRead {
            message_id: message_id.to_string(),
        }]
    }

    pub(in crate::layer) fn handle_set_assistant_online(&mut self, online: bool) -> Vec<Event> {
        if self.pending.assistant_online == online {
            return vec![];
        }
        self.pending.assistant_online = online;
        vec![Event::AssistantPresenceChanged { online }]
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        mocks::{create_message, seeded_snapshot},
        Layer,
    };
    use gamehub_types::{gaming::MessageKind, Command, Event};

    #[test]
    fn test_reply_is_prepended() {
        let state = seeded_snapshot();
        let mut layer = Layer::new(&state);
        let events = layer.apply(Command::AppendAssistantReply {
            message: create_message("msg-3", MessageKind::Assistance, false),
        });
        assert_eq!(
            events,
            vec![Event::AssistantReplied {
                message_id: "msg-3".to_string(),
                assistance_requests: 1,
            }]
        );
        let next = layer.commit();
        assert_eq!(next.messages.len(), 3);
        assert_eq!(next.messages[0].id, "msg-3");
        assert_eq!(next.unread_messages(), 2);
    }

    #[test]
    fn test_reply_applied_while_offline() {
        let state = seeded_snapshot();
        let mut layer = Layer::new(&state);
        assert_eq!(
            layer.apply(Command::SetAssistantOnline { online: false }),
            vec![Event::AssistantPresenceChanged { online: false }]
        );

        // Presence only gates the caller, not the rule
        let events = layer.apply(Command::AppendAssistantReply {
            message: create_message("msg-3", MessageKind::Assistance, false),
        });
        assert_eq!(
            events,
            vec![Event::AssistantReplied {
                message_id: "msg-3".to_string(),
                assistance_requests: state.assistance_requests + 1,
            }]
        );
        let next = layer.commit();
        assert!(!next.assistant_online);
        assert_eq!(next.messages[0].id, "msg-3");
        assert_eq!(next.assistance_requests, state.assistance_requests + 1);
    }

    #[test]
    fn test_duplicate_reply_ignored() {
        let state = seeded_snapshot();
        let mut layer = Layer::new(&state);
        let events = layer.apply(Command::AppendAssistantReply {
            message: create_message("msg-1", MessageKind::Assistance, false),
        });
        assert!(events.is_empty());
        assert_eq!(layer.commit().assistance_requests, 0);
    }

    #[test]
    fn test_mark_read_is_idempotent() {
        let state = seeded_snapshot();
        let mut layer = Layer::new(&state);
        let mark = || Command::MarkMessageRead {
            message_id: "msg-1".to_string(),
        };
        assert_eq!(
            layer.apply(mark()),
            vec![Event::MessageRead {
                message_id: "msg-1".to_string()
            }]
        );
        assert!(layer.apply(mark()).is_empty());

        // Unknown and already-read messages
        assert!(layer
            .apply(Command::MarkMessageRead {
                message_id: "msg-404".to_string()
            })
            .is_empty());
        assert!(layer
            .apply(Command::MarkMessageRead {
                message_id: "msg-2".to_string()
            })
            .is_empty());

        assert_eq!(layer.commit().unread_messages(), 0);
    }

    #[test]
    fn test_presence_changes_only_on_toggle() {
        let state = seeded_snapshot();
        assert!(state.assistant_online);
        let mut layer = Layer::new(&state);
        assert!(layer
            .apply(Command::SetAssistantOnline { online: true })
            .is_empty());
        assert_eq!(
            layer.apply(Command::SetAssistantOnline { online: false }),
            vec![Event::AssistantPresenceChanged { online: false }]
        );
        assert!(!layer.commit().assistant_online);
    }

    #[test]
    fn test_reload_replaces_messages() {
        let state = seeded_snapshot();
        let mut layer = Layer::new(&state);
        let events = layer.apply(Command::LoadMessages {
            messages: vec![create_message("msg-9", MessageKind::Tip, false)],
        });
        assert_eq!(events, vec![Event::MessagesLoaded { count: 1 }]);
        let next = layer.commit();
        assert_eq!(next.messages.len(), 1);
        assert!(next.message("msg-1").is_none());
    }
}
