//! Single owner of the gaming [Snapshot](gamehub_types::gaming::Snapshot).
//!
//! All mutations are funneled through the [Mailbox] and applied one batch at a time by
//! the [Actor], which publishes each new snapshot to subscribers.

mod actor;
mod ingress;

pub use actor::Actor;
pub use ingress::{Mailbox, MailboxError, Message};

pub struct Config {
    pub mailbox_size: usize,
    /// Snapshots buffered per subscriber before updates are skipped.
    pub subscriber_buffer: usize,
    pub daily_prize_allowance: u32,
}
