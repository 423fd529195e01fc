use airload::ConfigError;

use thiserror::Error;

/// An error type indicating an unusable manifest.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ManifestError {
    /// The hold has no compartments.
    #[error("manifest has no compartments")]
    NoCompartments,
    /// There is nothing to load.
    #[error("manifest has no cargo types")]
    NoCargoTypes,
    /// A compartment parameter is not strictly positive and finite.
    #[error("compartment {name}: {field} must be positive and finite, got {value}")]
    InvalidCompartment {
        name: String,
        field: &'static str,
        value: f64,
    },
    /// A cargo parameter is out of range.
    #[error("cargo type {name}: invalid {field} {value}")]
    InvalidCargoType {
        name: String,
        field: &'static str,
        value: f64,
    },
    /// The balance penalty factor is negative or not finite.
    #[error("balance penalty must be non-negative and finite, got {0}")]
    InvalidBalancePenalty(f64),
    /// The minimum tonnage draw is not strictly positive and finite.
    #[error("minimum draw must be positive and finite, got {0}")]
    InvalidMinDraw(f64),
}

/// An error type indicating a population
/// could not be set up.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SetupError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error(transparent)]
    Population(#[from] ConfigError),
}
