use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Scenario `{0}` has a duration but zero VUs")]
    ZeroVus(String),

    #[error("Invalid duration `{input}`: {reason}")]
    Duration { input: String, reason: String },
}
