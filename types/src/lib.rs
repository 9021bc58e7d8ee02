//! Common types shared by the gamehub store, mutation rules, and mock backend.

use std::time::SystemTime;

pub mod execution;
pub mod gaming;

pub use execution::{validate_message, Command, CommandError, Event};

/// Milliseconds since the Unix epoch (zero for times before it).
pub fn system_time_ms(now: SystemTime) -> u64 {
    match now.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(duration) => duration.as_millis() as u64,
        Err(_) => 0,
    }
}
