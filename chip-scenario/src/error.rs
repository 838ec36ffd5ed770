use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("`{0}` cannot be used as a base URL")]
    InvalidBaseUrl(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("The scenario target was already configured")]
    AlreadyConfigured,

    #[error("Unable to read options file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid options file: {0}")]
    Options(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] chipload::core::ConfigError),
}
