//! Board settings parsed from environment variables.
//!
//! Every knob has a default, so an unset or unparsable variable silently
//! falls back rather than failing startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::consts::{DEFAULT_INTENT_QUEUE_CAPACITY, DEFAULT_RESET_CONFIRM_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// How long a reset stays armed before reverting.
    pub reset_confirm: Duration,
    /// Bounded capacity of the session intent queue.
    pub intent_queue_capacity: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            reset_confirm: Duration::from_millis(DEFAULT_RESET_CONFIRM_MS),
            intent_queue_capacity: DEFAULT_INTENT_QUEUE_CAPACITY,
        }
    }
}

impl BoardConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `BOARD_RESET_CONFIRM_MS`: default 3000
    /// - `BOARD_INTENT_QUEUE_CAPACITY`: default 64, clamped to at least 1
    #[must_use]
    pub fn from_env() -> Self {
        let reset_confirm_ms = env_parse("BOARD_RESET_CONFIRM_MS", DEFAULT_RESET_CONFIRM_MS);
        let intent_queue_capacity = env_parse("BOARD_INTENT_QUEUE_CAPACITY", DEFAULT_INTENT_QUEUE_CAPACITY).max(1);

        Self { reset_confirm: Duration::from_millis(reset_confirm_ms), intent_queue_capacity }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
