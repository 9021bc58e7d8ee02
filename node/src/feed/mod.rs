//! Simulated external feed: timers that mutate the store as if a live service did.

mod actor;

pub use actor::{Actor, Handle};
use std::{ops::RangeInclusive, time::Duration};

#[derive(Clone, Debug)]
pub struct Config {
    pub growth_interval: Duration,
    /// Per-tick increment drawn for every active jackpot.
    pub growth_range: RangeInclusive<u64>,
    pub presence_interval: Duration,
    /// Probability the assistant is reported online on each presence tick.
    pub online_probability: f64,
    pub sweep_interval: Duration,
    /// Restore the daily prize allowance on this period (disabled when `None`).
    pub daily_reset_interval: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            growth_interval: Duration::from_secs(5),
            growth_range: 10..=110,
            presence_interval: Duration::from_secs(30),
            online_probability: 0.9,
            sweep_interval: Duration::from_secs(1),
            daily_reset_interval: None,
        }
    }
}
