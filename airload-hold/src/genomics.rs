//! The cargo-allocation genome and the loading
//! problem it is evaluated against.
mod allocation;
mod errors;
pub mod fitness;
mod manifest;
pub mod operators;

pub use allocation::Allocation;
pub use errors::{ManifestError, SetupError};
pub use manifest::{CargoType, Compartment, Manifest, DEFAULT_BALANCE_PENALTY, DEFAULT_MIN_DRAW};

use airload::{Genome, Population, PopulationConfig};
use rand::Rng;

impl Genome for Allocation {
    type Config = Manifest;

    fn new<R: Rng + ?Sized>(manifest: &Manifest, rng: &mut R) -> Self {
        Allocation::random(manifest, rng)
    }

    fn fitness(&self, manifest: &Manifest) -> f64 {
        fitness::evaluate(self, manifest)
    }

    fn crossover<R: Rng + ?Sized>(
        first: &Self,
        second: &Self,
        chance: f64,
        rng: &mut R,
        _: &Manifest,
    ) -> (Self, Self) {
        operators::uniform_crossover(first, second, chance, rng)
    }

    fn mutate<R: Rng + ?Sized>(&mut self, chance: f64, rng: &mut R, _: &Manifest) {
        operators::scale_mutation(self, chance, rng)
    }
}

/// A population of hold allocations.
pub type LoadPopulation = Population<Manifest, Allocation>;

/// Validates both configurations and returns a
/// freshly initialized population for the manifest.
///
/// # Examples
/// ```
/// use airload::PopulationConfig;
/// use airload_hold::genomics::{new_population, Manifest};
/// use rand::{rngs::StdRng, SeedableRng};
/// use std::num::NonZeroUsize;
///
/// let config = PopulationConfig {
///     size: NonZeroUsize::new(50).unwrap(),
///     ..PopulationConfig::zero()
/// };
/// let mut rng = StdRng::seed_from_u64(0);
/// let population = new_population(config, Manifest::reference(), &mut rng).unwrap();
/// assert_eq!(population.genomes().count(), 50);
/// ```
pub fn new_population<R: Rng + ?Sized>(
    population_config: PopulationConfig,
    manifest: Manifest,
    rng: &mut R,
) -> Result<LoadPopulation, SetupError> {
    manifest.validate()?;
    Ok(Population::new(population_config, manifest, rng)?)
}
