//! A constant-VU load generator.
//!
//! Scenarios are `async fn`s marked with [`#[scenario]`](macro@scenario). Awaiting a configured
//! scenario spawns the requested number of virtual users (VUs), each calling the scenario
//! function in a loop until the duration expires. Calls to functions marked with
//! [`#[transaction]`](macro@transaction) are counted and timed.
//!
//! ```no_run
//! use chipload::prelude::*;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let stats = my_scenario()
//!         .vus(5)
//!         .duration(Duration::from_secs(60))
//!         .await;
//!     println!("{stats}");
//! }
//!
//! #[scenario]
//! async fn my_scenario() {
//!     let _ = my_transaction().await;
//! }
//!
//! #[transaction]
//! async fn my_transaction() -> Result<(), std::io::Error> {
//!     Ok(())
//! }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod scenario;
#[doc(hidden)]
pub mod transaction;

pub(crate) mod measurement;
pub(crate) mod sampler;

pub use chipload_core as core;
pub use chipload_macros::{scenario, transaction};
pub use scenario::{ConfigurableScenario, Scenario};

pub mod prelude {
    pub use crate::scenario::ConfigurableScenario;
    pub use chipload_core::{Options, RunStatistics};
    pub use chipload_macros::{scenario, transaction};
}
