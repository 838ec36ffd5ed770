use crate::measurement::Measurement;
use crate::transaction::TransactionData;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Counters shared between the run loop and every VU.
pub(crate) struct TaskAtomics {
    limiter: Option<Arc<DefaultDirectRateLimiter>>,
    success: Arc<AtomicU64>,
    error: Arc<AtomicU64>,
    iterations: Arc<AtomicU64>,
}

impl TaskAtomics {
    pub fn new(tps_limit: Option<NonZeroU32>) -> Self {
        Self {
            limiter: tps_limit.map(|tps| Arc::new(rate_limiter(tps))),
            success: Arc::new(AtomicU64::new(0)),
            error: Arc::new(AtomicU64::new(0)),
            iterations: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn clone_to_transaction_data(&self) -> TransactionData {
        TransactionData {
            limiter: self.limiter.clone(),
            success: self.success.clone(),
            error: self.error.clone(),
        }
    }

    pub fn iterations(&self) -> Arc<AtomicU64> {
        self.iterations.clone()
    }

    pub fn collect(&self, elapsed: Duration) -> Measurement {
        Measurement {
            success: self.success.swap(0, Ordering::Relaxed),
            error: self.error.swap(0, Ordering::Relaxed),
            iterations: self.iterations.swap(0, Ordering::Relaxed),
            elapsed,
        }
    }
}

fn rate_limiter(tps_limit: NonZeroU32) -> DefaultDirectRateLimiter {
    // At most one transaction is released at a time.
    RateLimiter::direct(Quota::per_second(tps_limit).allow_burst(NonZeroU32::MIN))
}
