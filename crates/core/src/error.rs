use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum PulseError {
    #[error("config error: {0}")]
    Config(String),

    /// A single statistic could not be read from the OS this cycle.
    #[error("{stat} unavailable: {reason}")]
    Metric { stat: &'static str, reason: String },

    #[error("battery error: {0}")]
    Battery(String),

    #[error("sampler error: {0}")]
    Sampler(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl PulseError {
    pub fn metric(stat: &'static str, reason: impl Into<String>) -> Self {
        Self::Metric { stat, reason: reason.into() }
    }
}

pub type Result<T, E = PulseError> = std::result::Result<T, E>;
