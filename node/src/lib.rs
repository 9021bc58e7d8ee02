use gamehub_types::gaming::{DAILY_PRIZE_ALLOWANCE, DEFAULT_USER_ID};
use serde::{Deserialize, Serialize};
use std::{str::FromStr, time::Duration};
use thiserror::Error;
use tracing::Level;

pub mod engine;
pub mod feed;
pub mod script;
pub mod session;
pub mod store;

pub use script::Action;

/// Configuration for a gamehub node.
#[derive(Deserialize, Serialize)]
pub struct Config {
    pub log_level: String,
    #[serde(default)]
    pub log_json: bool,
    pub worker_threads: usize,

    pub mailbox_size: usize,
    #[serde(default = "default_subscriber_buffer")]
    pub subscriber_buffer: usize,

    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default = "default_daily_prize_allowance")]
    pub daily_prize_allowance: u32,

    /// How long to keep the feed running after the script finishes.
    pub run_duration_ms: u64,

    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub simulator: SimulatorConfig,

    #[serde(default)]
    pub script: Vec<Action>,
}

#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedConfig {
    pub growth_interval_ms: u64,
    pub growth_min: u64,
    pub growth_max: u64,
    pub presence_interval_ms: u64,
    pub online_probability: f64,
    pub sweep_interval_ms: u64,
    pub daily_reset_interval_ms: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        let defaults = feed::Config::default();
        Self {
            growth_interval_ms: defaults.growth_interval.as_millis() as u64,
            growth_min: *defaults.growth_range.start(),
            growth_max: *defaults.growth_range.end(),
            presence_interval_ms: defaults.presence_interval.as_millis() as u64,
            online_probability: defaults.online_probability,
            sweep_interval_ms: defaults.sweep_interval.as_millis() as u64,
            daily_reset_interval_ms: None,
        }
    }
}

#[derive(Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub jitter_ms: u64,
    pub failure_rate: f64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid log level: {value}")]
    InvalidLogLevel { value: String },
    #[error("{field} must be > 0 (got {value})")]
    InvalidNonZero { field: &'static str, value: u64 },
    #[error("{field} must be within [0, 1] (got {value})")]
    InvalidProbability { field: &'static str, value: f64 },
    #[error("growth range is empty ({min} > {max})")]
    InvalidGrowthRange { min: u64, max: u64 },
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}

pub struct ValidatedConfig {
    pub log_level: Level,
    pub log_json: bool,
    pub worker_threads: usize,

    pub mailbox_size: usize,
    pub subscriber_buffer: usize,

    pub user_id: String,
    pub daily_prize_allowance: u32,
    pub run_duration: Duration,

    pub feed: feed::Config,
    pub simulator: gamehub_simulator::Config,

    pub script: Vec<Action>,
}

fn default_subscriber_buffer() -> usize {
    16
}

fn default_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}

fn default_daily_prize_allowance() -> u32 {
    DAILY_PRIZE_ALLOWANCE
}

fn non_zero(field: &'static str, value: u64) -> Result<u64, ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidNonZero { field, value });
    }
    Ok(value)
}

fn probability(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::InvalidProbability { field, value });
    }
    Ok(value)
}

impl Config {
    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        non_zero("worker_threads", self.worker_threads as u64)?;
        non_zero("mailbox_size", self.mailbox_size as u64)?;
        non_zero("subscriber_buffer", self.subscriber_buffer as u64)?;
        if self.user_id.trim().is_empty() {
            return Err(ConfigError::Empty { field: "user_id" });
        }

        let log_level =
            Level::from_str(&self.log_level).map_err(|_| ConfigError::InvalidLogLevel {
                value: self.log_level.clone(),
            })?;

        let feed = {
            let f = &self.feed;
            if f.growth_min > f.growth_max {
                return Err(ConfigError::InvalidGrowthRange {
                    min: f.growth_min,
                    max: f.growth_max,
                });
            }
            non_zero("feed.growth_min", f.growth_min)?;
            let daily_reset_interval = match f.daily_reset_interval_ms {
                Some(ms) => Some(Duration::from_millis(non_zero(
                    "feed.daily_reset_interval_ms",
                    ms,
                )?)),
                None => None,
            };
            feed::Config {
                growth_interval: Duration::from_millis(non_zero(
                    "feed.growth_interval_ms",
                    f.growth_interval_ms,
                )?),
                growth_range: f.growth_min..=f.growth_max,
                presence_interval: Duration::from_millis(non_zero(
                    "feed.presence_interval_ms",
                    f.presence_interval_ms,
                )?),
                online_probability: probability("feed.online_probability", f.online_probability)?,
                sweep_interval: Duration::from_millis(non_zero(
                    "feed.sweep_interval_ms",
                    f.sweep_interval_ms,
                )?),
                daily_reset_interval,
            }
        };

        let simulator = gamehub_simulator::Config {
            jitter: Duration::from_millis(self.simulator.jitter_ms),
            failure_rate: probability("simulator.failure_rate", self.simulator.failure_rate)?,
        };

        Ok(ValidatedConfig {
            log_level,
            log_json: self.log_json,
            worker_threads: self.worker_threads,
            mailbox_size: self.mailbox_size,
            subscriber_buffer: self.subscriber_buffer,
            user_id: self.user_id,
            daily_prize_allowance: self.daily_prize_allowance,
            run_duration: Duration::from_millis(self.run_duration_ms),
            feed,
            simulator,
            script: self.script,
        })
    }
}

impl ValidatedConfig {
    pub fn store(&self) -> store::Config {
        store::Config {
            mailbox_size: self.mailbox_size,
            subscriber_buffer: self.subscriber_buffer,
            daily_prize_allowance: self.daily_prize_allowance,
        }
    }
}
