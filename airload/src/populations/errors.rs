use thiserror::Error;

/// An error type indicating an unusable
/// population configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A probability was outside of [0.0, 1.0].
    #[error("{name} must be between 0.0 and 1.0, got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },
}
