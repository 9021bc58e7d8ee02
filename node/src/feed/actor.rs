use crate::{
    feed::Config,
    store::{self, MailboxError},
};
use commonware_macros::select;
use commonware_runtime::{Clock, Spawner};
use futures::future::{self, Either};
use gamehub_types::{system_time_ms, Command};
use rand::{Rng, RngCore};
use tracing::{debug, info, warn};

/// Keeps the feed running; the feed stops when this is stopped or dropped.
pub struct Handle {
    task: commonware_runtime::Handle<()>,
}

impl Handle {
    pub fn stop(self) {
        self.task.abort();
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub struct Actor<E: Clock + Spawner + RngCore> {
    context: E,
    config: Config,
    store: store::Mailbox,
}

impl<E: Clock + Spawner + RngCore> Actor<E> {
    pub fn new(context: E, mut config: Config, store: store::Mailbox) -> Self {
        config.online_probability = config.online_probability.clamp(0.0, 1.0);
        Self {
            context,
            config,
            store,
        }
    }

    pub fn start(mut self) -> Handle {
        Handle {
            task: self.context.spawn_ref()(self.run()),
        }
    }

    async fn run(mut self) {
        let now = self.context.current();
        let mut next_growth = now + self.config.growth_interval;
        let mut next_presence = now + self.config.presence_interval;
        let mut next_sweep = now + self.config.sweep_interval;
        let mut next_reset = self.config.daily_reset_interval.map(|interval| now + interval);
        info!(
            growth_ms = self.config.growth_interval.as_millis() as u64,
            presence_ms = self.config.presence_interval.as_millis() as u64,
            daily_reset = next_reset.is_some(),
            "feed started"
        );

        loop {
            let reset = match next_reset {
                Some(at) => Either::Left(self.context.sleep_until(at)),
                None => Either::Right(future::pending::<()>()),
            };
            let result = select! {
                _ = self.context.sleep_until(next_growth) => {
                    next_growth += self.config.growth_interval;
                    self.grow().await
                },
                _ = self.context.sleep_until(next_presence) => {
                    next_presence += self.config.presence_interval;
                    self.presence().await
                },
                _ = self.context.sleep_until(next_sweep) => {
                    next_sweep += self.config.sweep_interval;
                    self.sweep().await
                },
                _ = reset => {
                    let interval = self.config.daily_reset_interval;
                    if let (Some(at), Some(interval)) = (next_reset, interval) {
                        next_reset = Some(at + interval);
                    }
                    self.store.apply(Command::ResetDailyPrizes).await.map(|_| ())
                },
            };
            if let Err(e) = result {
                warn!(?e, "store unavailable, stopping feed");
                break;
            }
        }
    }

    /// Grow every active jackpot by a random amount.
    async fn grow(&mut self) -> Result<(), MailboxError> {
        let snapshot = self.store.snapshot().await?;
        let commands: Vec<_> = snapshot
            .active_jackpots()
            .map(|game| Command::GrowJackpot {
                game_id: game.id.clone(),
                amount: self.context.gen_range(self.config.growth_range.clone()),
            })
            .collect();
        if commands.is_empty() {
            return Ok(());
        }
        let events = self.store.apply_all(commands).await?;
        debug!(grown = events.len(), "jackpots grew");
        Ok(())
    }

    async fn presence(&mut self) -> Result<(), MailboxError> {
        let online = self.context.gen_bool(self.config.online_probability);
        let events = self
            .store
            .apply(Command::SetAssistantOnline { online })
            .await?;
        if !events.is_empty() {
            info!(online, "assistant presence changed");
        }
        Ok(())
    }

    async fn sweep(&mut self) -> Result<(), MailboxError> {
        let now_ms = system_time_ms(self.context.current());
        self.store
            .apply(Command::ExpireNotifications { now_ms })
            .await?;
        Ok(())
    }
}
