use commonware_macros::select;
use commonware_runtime::signal::Signal;
use futures::{
    channel::{mpsc, oneshot},
    SinkExt,
};
use gamehub_types::{gaming::Snapshot, Command, CommandError, Event};
use std::sync::Arc;
use thiserror::Error;

pub enum Message {
    Apply {
        commands: Vec<Command>,
        response: oneshot::Sender<Vec<Event>>,
    },
    Snapshot {
        response: oneshot::Sender<Arc<Snapshot>>,
    },
    Subscribe {
        response: oneshot::Sender<mpsc::Receiver<Arc<Snapshot>>>,
    },
}

#[derive(Clone)]
pub struct Mailbox {
    sender: mpsc::Sender<Message>,
    stopped: Signal,
}

#[derive(Debug, Error)]
pub enum MailboxError {
    #[error("invalid command: {0}")]
    Invalid(#[from] CommandError),
    #[error("store mailbox closed")]
    Closed,
    #[error("store request canceled")]
    Canceled,
    #[error("shutdown in progress")]
    ShuttingDown,
}

impl Mailbox {
    pub(super) fn new(sender: mpsc::Sender<Message>, stopped: Signal) -> Self {
        Self { sender, stopped }
    }

    /// Validate and apply a single command, returning the events it produced.
    pub async fn apply(&mut self, command: Command) -> Result<Vec<Event>, MailboxError> {
        self.apply_all(vec![command]).await
    }

    /// Apply commands as one update: subscribers observe the state after all of them.
    ///
    /// Nothing is applied if any command is malformed.
    pub async fn apply_all(
        &mut self,
        commands: Vec<Command>,
    ) -> Result<Vec<Event>, MailboxError> {
        for command in &commands {
            command.validate()?;
        }
        self.request(|response| Message::Apply { commands, response }).await
    }

    /// Latest published snapshot.
    pub async fn snapshot(&mut self) -> Result<Arc<Snapshot>, MailboxError> {
        self.request(|response| Message::Snapshot { response }).await
    }

    /// Receive every snapshot published from now on, starting with the current one.
    pub async fn subscribe(&mut self) -> Result<mpsc::Receiver<Arc<Snapshot>>, MailboxError> {
        self.request(|response| Message::Subscribe { response }).await
    }

    async fn request<T>(
        &mut self,
        message: impl FnOnce(oneshot::Sender<T>) -> Message,
    ) -> Result<T, MailboxError> {
        let (sender, receiver) = oneshot::channel();
        {
            let mut mailbox_sender = self.sender.clone();
            let mut stopped = self.stopped.clone();
            select! {
                result = mailbox_sender.send(message(sender)) => {
                    result.map_err(|_| MailboxError::Closed)?;
                },
                _ = &mut stopped => {
                    return Err(MailboxError::ShuttingDown);
                },
            }
        }

        let mut stopped = self.stopped.clone();
        select! {
            result = receiver => {
                result.map_err(|_| MailboxError::Canceled)
            },
            _ = &mut stopped => {
                Err(MailboxError::ShuttingDown)
            },
        }
    }
}
