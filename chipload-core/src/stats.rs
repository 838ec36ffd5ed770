use std::fmt;
use std::time::Duration;

/// Counters collected over a single Scenario run.
///
/// `success` and `error` count transactions, `iterations` counts completed calls of the
/// scenario function across every VU.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStatistics {
    pub vus: usize,
    pub iterations: u64,
    pub success: u64,
    pub error: u64,
    pub elapsed: Duration,
    pub tps: f64,
}

impl RunStatistics {
    pub fn requests(&self) -> u64 {
        self.success + self.error
    }

    pub fn error_rate(&self) -> f64 {
        if self.requests() == 0 {
            0.
        } else {
            self.error as f64 / self.requests() as f64
        }
    }
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VUs={}, Iterations={}, Success={}, Error={}, TPS={:.2}, ErrorRate={:.2}, Elapsed={}",
            self.vus,
            self.iterations,
            self.success,
            self.error,
            self.tps,
            self.error_rate(),
            humantime::format_duration(self.elapsed),
        )
    }
}
