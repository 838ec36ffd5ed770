//! Load scenario for the chip service.
//!
//! Every iteration sends one `GET /system` to the ingress with a fixed `Host` header. The
//! outcome is never inspected; the runner counts failures and non-2xx answers as errors.
use chipload::prelude::*;
use reqwest::{Client, StatusCode};
use std::sync::OnceLock;
use std::time::Duration;

pub mod cli;
mod error;
pub mod template;

pub use error::ScenarioError;
pub use template::RequestTemplate;

pub const VUS: usize = 5;
pub const DURATION: Duration = Duration::from_secs(3000);

/// Runner options declared for this scenario: `{ vus: 5, duration: "3000s" }`.
pub fn options() -> Options {
    Options::new(VUS, DURATION)
}

/// Where `system` sends its request. Shared by every VU.
#[derive(Debug)]
pub struct Target {
    client: Client,
    template: RequestTemplate,
}

impl Target {
    pub fn new(template: RequestTemplate) -> Self {
        Self {
            client: Client::new(),
            template,
        }
    }

    pub fn template(&self) -> &RequestTemplate {
        &self.template
    }
}

static TARGET: OnceLock<Target> = OnceLock::new();

/// Aim the scenario at `template`. Must happen before the first request; the target never
/// changes afterwards.
pub fn configure(template: RequestTemplate) -> Result<(), ScenarioError> {
    TARGET
        .set(Target::new(template))
        .map_err(|_| ScenarioError::AlreadyConfigured)
}

/// The configured target, or the default ingress if nothing was configured.
pub fn target() -> &'static Target {
    TARGET.get_or_init(|| Target::new(RequestTemplate::system()))
}

#[scenario]
pub async fn system() {
    let _ = get_system().await;
}

#[transaction]
pub async fn get_system() -> Result<StatusCode, reqwest::Error> {
    let target = target();
    target
        .template
        .build(&target.client)
        .send()
        .await
        .and_then(|res| res.error_for_status())
        .map(|res| res.status())
}
