//! Scenario logic and configuration
use crate::sampler::{TaskAtomics, Timer, VuPool};
use chipload_core::{Options, RunStatistics, ScenarioConfig, SAMPLE_INTERVAL};
use std::{
    future::Future,
    num::NonZeroU32,
    pin::Pin,
    task::{Context, Poll},
    time::Duration,
};
use tokio::time::Instant;
#[allow(unused_imports)]
use tracing::{debug, error, info, instrument, trace, warn};

/// Load test scenario structure
///
/// Handler for running scenarios. Usually created by the [`#[scenario]`](chipload_macros::scenario)
/// macro, which adds the [`ConfigurableScenario`] methods to functions.
#[pin_project::pin_project]
pub struct Scenario<T> {
    func: T,
    runner_fut: Option<Pin<Box<dyn Future<Output = RunStatistics> + Send>>>,
    config: ScenarioConfig,
}

impl<T> Scenario<T> {
    pub fn new(name: &str, func: T) -> Self {
        Self {
            func,
            runner_fut: None,
            config: ScenarioConfig::new(name),
        }
    }
}

impl<T, F> Future for Scenario<T>
where
    T: Fn() -> F + Send + 'static + Clone + Sync,
    F: Future<Output = ()> + Send + 'static,
{
    type Output = RunStatistics;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.runner_fut.is_none() {
            let func = self.func.clone();
            let config = self.config.clone();
            self.runner_fut = Some(Box::pin(async move { run_scenario(func, config).await }));
        }

        match &mut self.runner_fut {
            Some(runner) => runner.as_mut().poll(cx),
            None => unreachable!(),
        }
    }
}

pub trait ConfigurableScenario<T: Send>: Future<Output = T> + Sized + Send {
    fn vus(self, vus: usize) -> Self;
    fn duration(self, duration: Duration) -> Self;
    fn tps(self, tps: NonZeroU32) -> Self;
    fn graceful_stop(self, grace: Duration) -> Self;
    fn options(self, options: &Options) -> Self;
}

impl<T, F> ConfigurableScenario<RunStatistics> for Scenario<T>
where
    T: Fn() -> F + Send + 'static + Clone + Sync,
    F: Future<Output = ()> + Send + 'static,
{
    /// Run the scenario with the given number of concurrent VUs.
    ///
    /// NOTE: Without a `.duration()` the scenario runs a single iteration on one VU.
    ///
    /// # Example
    /// ```no_run
    /// use chipload::prelude::*;
    /// use std::time::Duration;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     my_scenario()
    ///         .vus(5)
    ///         .duration(Duration::from_secs(120))
    ///         .await;
    /// }
    ///
    /// #[scenario]
    /// async fn my_scenario() {
    /// }
    /// ```
    fn vus(mut self, vus: usize) -> Self {
        self.config.vus = vus;
        self
    }

    /// Keep the VUs iterating for the given duration.
    fn duration(mut self, duration: Duration) -> Self {
        self.config.duration = Some(duration);
        self
    }

    /// Cap the transaction rate across all VUs.
    ///
    /// # Example
    /// ```no_run
    /// use chipload::prelude::*;
    /// use std::num::NonZeroU32;
    /// use std::time::Duration;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     my_scenario()
    ///         .vus(10)
    ///         .tps(NonZeroU32::new(200).unwrap())
    ///         .duration(Duration::from_secs(120))
    ///         .await;
    /// }
    ///
    /// #[scenario]
    /// async fn my_scenario() {
    /// }
    /// ```
    fn tps(mut self, tps: NonZeroU32) -> Self {
        self.config.max_tps = Some(tps);
        self
    }

    /// How long in-flight iterations may run after the duration expires (default 30s).
    fn graceful_stop(mut self, grace: Duration) -> Self {
        self.config.graceful_stop = grace;
        self
    }

    /// Apply declared [`Options`], overriding VUs and duration.
    fn options(mut self, options: &Options) -> Self {
        self.config.apply(options);
        self
    }
}

#[instrument(name = "scenario", skip_all, fields(name = %config.name))]
pub(crate) async fn run_scenario<T, F>(scenario: T, config: ScenarioConfig) -> RunStatistics
where
    T: Fn() -> F + Send + Sync + 'static + Clone,
    F: Future<Output = ()> + Send + 'static,
{
    if let Err(err) = config.validate() {
        error!("Refusing to run scenario: {err}");
        return RunStatistics::default();
    }

    info!("Running {} with config {:?}", config.name, &config);

    let start = Instant::now();
    let atomics = TaskAtomics::new(config.max_tps);
    let mut pool = VuPool::new(scenario, &atomics);
    let mut stats = RunStatistics {
        vus: config.effective_vus(),
        ..Default::default()
    };

    if let Some(duration) = config.duration {
        pool.spawn_vus(config.vus);
        debug!("Spawned {} VUs", pool.vus());

        let mut timer = Timer::new(SAMPLE_INTERVAL).await;
        debug!("Sampling every {timer}");
        let deadline = tokio::time::sleep_until(start + duration);
        tokio::pin!(deadline);

        // NOTE: This loop is time-sensitive. Any long awaits or blocking will throw off measurements
        loop {
            tokio::select! {
                elapsed = timer.tick() => {
                    let measurement = atomics.collect(elapsed);
                    debug!("{measurement}");
                    measurement.add_to(&mut stats);
                }
                _ = &mut deadline => break,
            }
        }

        pool.shutdown(config.graceful_stop).await;
        atomics
            .collect(timer.since_last_tick())
            .add_to(&mut stats);
    } else {
        pool.run_once().await;
        atomics.collect(start.elapsed()).add_to(&mut stats);
    }

    stats.elapsed = start.elapsed();
    let secs = stats.elapsed.as_secs_f64();
    if secs > 0. {
        stats.tps = stats.requests() as f64 / secs;
    }

    info!("Scenario complete: {stats}");
    stats
}
