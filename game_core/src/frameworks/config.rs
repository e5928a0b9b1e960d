use std::{env, time::Duration};

// Runtime constants (not gameplay tuning).

pub const EVENT_CHANNEL_CAPACITY: usize = 1024;

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000 / 60);
pub const DEFAULT_RUN_DURATION: Duration = Duration::from_secs(5);

pub fn tick_interval() -> Duration {
    env::var("SESSION_TICK_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|millis| *millis > 0)
        .map(Duration::from_millis)
        .unwrap_or(TICK_INTERVAL)
}

// How long the headless host keeps a session alive before tearing it down.
pub fn run_duration() -> Duration {
    env::var("SESSION_RUN_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_RUN_DURATION)
}
