use super::ConfigError;

use serde::{Deserialize, Serialize};

use std::num::NonZeroUsize;

/// Configuration data for population generation
/// and evolution.
///
/// # Note
/// All quantities expressing probabilities
/// must be in the range [0.0, 1.0]; this is
/// checked by [`PopulationConfig::validate`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PopulationConfig {
    /// Size of the population.
    pub size: NonZeroUsize,
    /// Number of generations evolved by [`Population::run`].
    ///
    /// [`Population::run`]: crate::Population::run
    pub generations: usize,
    /// Chance that a pair of parents is recombined
    /// instead of being copied into the next generation.
    pub crossover_chance: f64,
    /// Per-gene chance of mutation in each child.
    pub mutation_chance: f64,
    /// Evaluate fitness on the rayon thread pool.
    #[serde(default)]
    pub parallel_evaluation: bool,
}

impl PopulationConfig {
    /// Returns a "zero-valued" default configuration.
    /// All values are 0, false, or in the case of
    /// `NonZeroUsize`s, 1.
    ///
    /// # Note
    /// This value is not suitable for use in most experiments.
    /// It is meant as a way to abbreviate configuration
    /// instantiation, or to fill in unused values.
    ///
    /// # Examples
    /// ```
    /// use airload::PopulationConfig;
    ///
    /// let cfg1 = PopulationConfig::zero();
    ///
    /// let cfg2 = PopulationConfig {
    ///     // Specify some values here...
    ///     mutation_chance: 0.1,
    ///     // Default the rest...
    ///     ..PopulationConfig::zero()
    /// };
    /// assert!(cfg2.validate().is_ok());
    /// ```
    pub const fn zero() -> PopulationConfig {
        PopulationConfig {
            size: NonZeroUsize::MIN,
            generations: 0,
            crossover_chance: 0.0,
            mutation_chance: 0.0,
            parallel_evaluation: false,
        }
    }

    /// Checks that every probability lies in [0.0, 1.0].
    ///
    /// # Examples
    /// ```
    /// use airload::PopulationConfig;
    ///
    /// let cfg = PopulationConfig {
    ///     crossover_chance: 1.5,
    ///     ..PopulationConfig::zero()
    /// };
    /// assert!(cfg.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability("crossover_chance", self.crossover_chance)?;
        check_probability("mutation_chance", self.mutation_chance)
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name, value })
    }
}
