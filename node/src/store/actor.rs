use crate::store::{ingress::Mailbox, Config, Message};
use commonware_runtime::{Handle, Metrics, Spawner};
use futures::{channel::mpsc, StreamExt};
use gamehub_execution::execute;
use gamehub_types::gaming::Snapshot;
use prometheus_client::metrics::{counter::Counter, gauge::Gauge};
use std::sync::{atomic::AtomicU64, Arc};
use tracing::{debug, info, warn};

pub struct Actor<E: Spawner + Metrics> {
    context: E,
    mailbox: mpsc::Receiver<Message>,
    subscriber_buffer: usize,

    state: Arc<Snapshot>,
    subscribers: Vec<mpsc::Sender<Arc<Snapshot>>>,

    applied: Counter<u64, AtomicU64>,
    ignored: Counter<u64, AtomicU64>,
    total_pool: Gauge,
}

impl<E: Spawner + Metrics> Actor<E> {
    pub fn new(context: E, config: Config) -> (Self, Mailbox) {
        // Create mailbox
        let (sender, mailbox) = mpsc::channel(config.mailbox_size);
        let inbound = Mailbox::new(sender, context.stopped());

        // Initialize metrics
        let applied = Counter::default();
        let ignored = Counter::default();
        let total_pool = Gauge::default();
        context.register(
            "applied",
            "Number of command batches that changed the state",
            applied.clone(),
        );
        context.register(
            "ignored",
            "Number of command batches that left the state unchanged",
            ignored.clone(),
        );
        context.register(
            "total_pool",
            "Sum of all jackpot pools",
            total_pool.clone(),
        );

        (
            Self {
                context,
                mailbox,
                subscriber_buffer: config.subscriber_buffer,
                state: Arc::new(Snapshot::with_allowance(config.daily_prize_allowance)),
                subscribers: Vec::new(),
                applied,
                ignored,
                total_pool,
            },
            inbound,
        )
    }

    pub fn start(mut self) -> Handle<()> {
        self.context.spawn_ref()(self.run())
    }

    async fn run(mut self) {
        loop {
            let Some(message) = self.mailbox.next().await else {
                warn!("mailbox closed");
                break;
            };
            match message {
                Message::Apply { commands, response } => {
                    let batch = commands.len();
                    let result = execute(&self.state, commands);
                    if result.changed() {
                        self.applied.inc();
                        self.state = Arc::new(result.snapshot);
                        self.total_pool
                            .set(self.state.total_jackpot_pool.min(i64::MAX as u64) as i64);
                        self.publish();
                    } else {
                        self.ignored.inc();
                        debug!(batch, "command batch ignored");
                    }
                    let _ = response.send(result.events);
                }
                Message::Snapshot { response } => {
                    let _ = response.send(self.state.clone());
                }
                Message::Subscribe { response } => {
                    let (mut sender, receiver) = mpsc::channel(self.subscriber_buffer);
                    let _ = sender.try_send(self.state.clone());
                    self.subscribers.push(sender);
                    if response.send(receiver).is_err() {
                        // Pruned on the next publish
                        debug!("subscriber dropped before receiving channel");
                    }
                    info!(subscribers = self.subscribers.len(), "subscriber added");
                }
            }
        }
    }

    /// Push the current snapshot to every subscriber, dropping closed ones.
    fn publish(&mut self) {
        let snapshot = &self.state;
        self.subscribers
            .retain_mut(|subscriber| match subscriber.try_send(snapshot.clone()) {
                Ok(()) => true,
                Err(e) if e.is_disconnected() => false,
                Err(_) => {
                    debug!("subscriber lagging, skipped snapshot");
                    true
                }
            });
    }
}
