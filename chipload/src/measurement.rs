use chipload_core::RunStatistics;
use std::fmt;
use std::time::Duration;

/// Counters collected over a single sampling interval.
#[derive(Debug, Clone, Default)]
pub(crate) struct Measurement {
    pub success: u64,
    pub error: u64,
    pub iterations: u64,
    pub elapsed: Duration,
}

impl Measurement {
    pub fn total(&self) -> u64 {
        self.success + self.error
    }

    pub fn tps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0. {
            self.total() as f64 / secs
        } else {
            0.
        }
    }

    pub fn error_rate(&self) -> f64 {
        if self.total() == 0 {
            0.
        } else {
            self.error as f64 / self.total() as f64
        }
    }

    pub fn add_to(&self, stats: &mut RunStatistics) {
        stats.success += self.success;
        stats.error += self.error;
        stats.iterations += self.iterations;
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TPS={:.2}, ErrorRate={:.2}, Iterations={}",
            self.tps(),
            self.error_rate(),
            self.iterations,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates() {
        let m = Measurement {
            success: 9,
            error: 1,
            iterations: 10,
            elapsed: Duration::from_millis(500),
        };
        assert_eq!(m.tps(), 20.);
        assert_eq!(m.error_rate(), 0.1);
    }

    #[test]
    fn test_empty_interval() {
        let m = Measurement::default();
        assert_eq!(m.tps(), 0.);
        assert_eq!(m.error_rate(), 0.);
    }

    #[test]
    fn test_add_to() {
        let mut stats = RunStatistics::default();
        let m = Measurement {
            success: 3,
            error: 2,
            iterations: 4,
            elapsed: Duration::from_secs(1),
        };
        m.add_to(&mut stats);
        m.add_to(&mut stats);
        assert_eq!(stats.success, 6);
        assert_eq!(stats.error, 4);
        assert_eq!(stats.iterations, 8);
    }
}
