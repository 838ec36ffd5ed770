use crate::{RequestTemplate, ScenarioError};
use chipload::core::{parse_duration, Options, ScenarioConfig};
use clap::Parser;
use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;

/// Run the `/system` scenario against the chip ingress.
///
/// Without flags this runs the declared options: 5 VUs for 3000s.
#[derive(Parser, Debug)]
#[command(name = "chip-load", version, about, long_about = None)]
pub struct Cli {
    /// Base URL to send requests to; the path is always `/system`
    #[arg(short, long)]
    pub target: Option<String>,

    /// Number of concurrent VUs
    #[arg(long)]
    pub vus: Option<usize>,

    /// How long to keep iterating (e.g. `3000s`, `50m`)
    #[arg(short, long, value_parser = parse_duration)]
    pub duration: Option<Duration>,

    /// Cap on transactions per second across all VUs
    #[arg(long)]
    pub rps: Option<NonZeroU32>,

    /// Time in-flight iterations get to finish once the duration expires
    #[arg(long, value_parser = parse_duration, default_value = "30s")]
    pub graceful_stop: Duration,

    /// JSON options document replacing the declared defaults
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Expose Prometheus metrics on this address
    #[arg(long)]
    pub metrics_addr: Option<SocketAddr>,
}

impl Cli {
    /// Declared options, replaced by `--options` if given, then overridden by explicit flags.
    ///
    /// Options the runner would refuse (no VUs for a timed run) are rejected here.
    pub fn resolve_options(&self) -> Result<Options, ScenarioError> {
        let mut options = match &self.options {
            Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            None => crate::options(),
        };

        if let Some(vus) = self.vus {
            options.vus = vus;
        }
        if let Some(duration) = self.duration {
            options.duration = duration;
        }
        if self.rps.is_some() {
            options.rps = self.rps;
        }

        let mut config = ScenarioConfig::new("system");
        config.apply(&options);
        config.validate()?;
        Ok(options)
    }

    pub fn template(&self) -> Result<RequestTemplate, ScenarioError> {
        let template = RequestTemplate::system();
        match &self.target {
            Some(base) => template.with_base_url(base),
            None => Ok(template),
        }
    }
}
