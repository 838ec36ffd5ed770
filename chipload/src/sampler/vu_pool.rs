use crate::sampler::TaskAtomics;
use crate::transaction::{TransactionData, TRANSACTION_HOOK};
use std::future::Future;
use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc,
};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{timeout_at, Instant};
#[allow(unused)]
use tracing::{debug, error, info, trace, warn};

/// A fixed set of virtual users, each calling the scenario function in a loop.
pub(crate) struct VuPool<T> {
    scenario: T,
    tasks: Vec<JoinHandle<()>>,
    stop: Arc<AtomicBool>,
    iterations: Arc<AtomicU64>,
    transaction_data: TransactionData,
}

impl<T, F> VuPool<T>
where
    T: Fn() -> F + Send + Sync + 'static + Clone,
    F: Future<Output = ()> + Send + 'static,
{
    pub fn new(scenario: T, atomics: &TaskAtomics) -> Self {
        Self {
            scenario,
            tasks: vec![],
            stop: Arc::new(AtomicBool::new(false)),
            iterations: atomics.iterations(),
            transaction_data: atomics.clone_to_transaction_data(),
        }
    }

    pub fn spawn_vus(&mut self, vus: usize) {
        while self.tasks.len() < vus {
            let scenario = self.scenario.clone();
            let stop = self.stop.clone();
            let iterations = self.iterations.clone();
            let transaction_data = self.transaction_data.clone();

            self.tasks.push(tokio::spawn(TRANSACTION_HOOK.scope(
                transaction_data,
                async move {
                    // NOTE: The stop flag is only checked between iterations
                    while !stop.load(Ordering::Relaxed) {
                        scenario().await;
                        iterations.fetch_add(1, Ordering::Relaxed);
                    }
                },
            )));
        }

        #[cfg(feature = "metrics")]
        metrics::gauge!("chipload_vus").set(self.tasks.len() as f64);
    }

    /// Run exactly one iteration on the current task.
    pub async fn run_once(&self) {
        let scenario = self.scenario.clone();
        TRANSACTION_HOOK
            .scope(self.transaction_data.clone(), async move { scenario().await })
            .await;
        self.iterations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn vus(&self) -> usize {
        self.tasks.len()
    }

    /// Ask every VU to stop after its current iteration, waiting at most `grace` before
    /// aborting the rest. Returns the number of aborted VUs.
    pub async fn shutdown(mut self, grace: Duration) -> usize {
        self.stop.store(true, Ordering::Relaxed);
        let deadline = Instant::now() + grace;

        let mut aborted = 0;
        for mut handle in self.tasks.drain(..) {
            match timeout_at(deadline, &mut handle).await {
                Ok(Err(err)) if err.is_panic() => {
                    error!("VU panicked: {err}");
                }
                Ok(_) => {}
                Err(_) => {
                    handle.abort();
                    aborted += 1;
                }
            }
        }

        #[cfg(feature = "metrics")]
        metrics::gauge!("chipload_vus").set(0.);

        if aborted > 0 {
            warn!("Aborted {aborted} VUs still running after the graceful stop period.");
        }
        aborted
    }
}
