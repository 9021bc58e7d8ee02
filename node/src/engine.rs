use crate::{feed, session::Session, store};
use commonware_runtime::{Clock, Handle, Metrics, Spawner};
use gamehub_simulator::Backend;
use rand::RngCore;

/// Configuration for the [Engine].
pub struct Config<B: Backend> {
    pub backend: B,
    pub user_id: String,
    pub store: store::Config,
    pub feed: feed::Config,
}

/// Running tasks of a started [Engine].
pub struct Handles {
    pub store: Handle<()>,
    pub feed: feed::Handle,
}

/// Wires the store, the simulated feed, and a user [Session] together.
pub struct Engine<E: Clock + Spawner + Metrics + RngCore + Clone, B: Backend> {
    store: store::Actor<E>,
    store_mailbox: store::Mailbox,
    feed: feed::Actor<E>,
    session: Session<E, B>,
}

impl<E: Clock + Spawner + Metrics + RngCore + Clone, B: Backend> Engine<E, B> {
    pub fn new(context: E, cfg: Config<B>) -> Self {
        let (store, store_mailbox) = store::Actor::new(context.with_label("store"), cfg.store);
        let feed = feed::Actor::new(
            context.with_label("feed"),
            cfg.feed,
            store_mailbox.clone(),
        );
        let session = Session::new(context, cfg.backend, store_mailbox.clone(), cfg.user_id);
        Self {
            store,
            store_mailbox,
            feed,
            session,
        }
    }

    pub fn mailbox(&self) -> store::Mailbox {
        self.store_mailbox.clone()
    }

    pub fn session(&self) -> Session<E, B> {
        self.session.clone()
    }

    /// Start the store before the feed so the feed's first tick finds it running.
    pub fn start(self) -> Handles {
        let store = self.store.start();
        let feed = self.feed.start();
        Handles { store, feed }
    }
}
