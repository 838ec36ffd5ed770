use crate::{ConfigError, DEFAULT_GRACEFUL_STOP, DEFAULT_VUS};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::time::Duration;

/// Runner options as they are declared next to a scenario.
///
/// Serializes to the familiar `{ "vus": 5, "duration": "3000s" }` shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    pub vus: usize,
    #[serde(with = "duration_str")]
    pub duration: Duration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rps: Option<NonZeroU32>,
}

impl Options {
    pub fn new(vus: usize, duration: Duration) -> Self {
        Self {
            vus,
            duration,
            rps: None,
        }
    }
}

#[doc(hidden)]
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioConfig {
    pub name: String,
    pub vus: usize,
    pub duration: Option<Duration>,
    pub max_tps: Option<NonZeroU32>,
    pub graceful_stop: Duration,
}

impl ScenarioConfig {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            vus: DEFAULT_VUS,
            duration: None,
            max_tps: None,
            graceful_stop: DEFAULT_GRACEFUL_STOP,
        }
    }

    pub fn apply(&mut self, options: &Options) {
        self.vus = options.vus;
        self.duration = Some(options.duration);
        if options.rps.is_some() {
            self.max_tps = options.rps;
        }
    }

    /// Number of VUs actually spawned. A run without a duration is a single iteration on a
    /// single VU.
    pub fn effective_vus(&self) -> usize {
        if self.duration.is_some() {
            self.vus
        } else {
            1
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration.is_some() && self.vus == 0 {
            return Err(ConfigError::ZeroVus(self.name.clone()));
        }
        Ok(())
    }
}

/// Parse a human readable duration such as `3000s`, `50m` or `1h 10m`.
pub fn parse_duration(input: &str) -> Result<Duration, ConfigError> {
    humantime::parse_duration(input.trim()).map_err(|err| ConfigError::Duration {
        input: input.to_string(),
        reason: err.to_string(),
    })
}

/// Whole-second durations are written as `<secs>s`; anything finer falls back to humantime.
pub fn format_duration(duration: Duration) -> String {
    if duration.subsec_nanos() == 0 {
        format!("{}s", duration.as_secs())
    } else {
        humantime::format_duration(duration).to_string()
    }
}

mod duration_str {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_duration(*duration))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_duration(&raw).map_err(de::Error::custom)
    }
}
