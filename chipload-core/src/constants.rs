use std::time::Duration;

/// Number of VUs used when a scenario does not ask for any.
pub const DEFAULT_VUS: usize = 1;

/// How long in-flight iterations may keep running once the duration expires.
pub const DEFAULT_GRACEFUL_STOP: Duration = Duration::from_secs(30);

/// Interval at which the runner collects and logs its counters.
pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);
