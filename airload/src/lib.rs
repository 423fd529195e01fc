//! A generational genetic algorithm engine.
//!
//! Genomes are supplied by the user through the [`Genome`] trait, which
//! bundles random initialization, a pure fitness function, pairwise
//! crossover and in-place mutation. A [`Population`] of fixed size is then
//! evolved generation by generation: parents are drawn by
//! fitness-proportionate [roulette](RouletteWheel) selection, recombined,
//! mutated, and the whole generation is replaced by the offspring. The best
//! genome ever seen is kept aside as the population's [`Champion`], so
//! regressions in later generations never lose it.
//!
//! Every random choice is drawn from a caller-supplied [`rand::Rng`], so a
//! seeded generator reproduces a run exactly. Generational history can be
//! recorded with [`logging::EvolutionLogger`]; progress is also emitted as
//! `tracing` events.
//!
//! A cargo-allocation genome for aircraft hold loading is supplied by the
//! `airload-hold` crate.
//!
//! # Example usage: maximizing a bounded scalar
//! ```
//! use airload::{Genome, Population, PopulationConfig};
//! use rand::{rngs::StdRng, Rng, SeedableRng};
//! use std::num::NonZeroUsize;
//!
//! #[derive(Clone, Debug)]
//! struct Scalar(f64);
//!
//! impl Genome for Scalar {
//!     // Upper bound of the gene.
//!     type Config = f64;
//!
//!     fn new<R: Rng + ?Sized>(bound: &f64, rng: &mut R) -> Self {
//!         Scalar(rng.gen_range(0.0..*bound))
//!     }
//!
//!     fn fitness(&self, bound: &f64) -> f64 {
//!         if self.0 > *bound { 0.0 } else { self.0 }
//!     }
//!
//!     fn crossover<R: Rng + ?Sized>(
//!         first: &Self,
//!         second: &Self,
//!         chance: f64,
//!         rng: &mut R,
//!         _: &f64,
//!     ) -> (Self, Self) {
//!         if rng.gen::<f64>() < chance {
//!             (second.clone(), first.clone())
//!         } else {
//!             (first.clone(), second.clone())
//!         }
//!     }
//!
//!     fn mutate<R: Rng + ?Sized>(&mut self, chance: f64, rng: &mut R, _: &f64) {
//!         if rng.gen::<f64>() < chance {
//!             self.0 *= rng.gen_range(0.9..=1.1);
//!         }
//!     }
//! }
//!
//! let config = PopulationConfig {
//!     size: NonZeroUsize::new(30).unwrap(),
//!     generations: 40,
//!     crossover_chance: 0.8,
//!     mutation_chance: 0.2,
//!     ..PopulationConfig::zero()
//! };
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let mut population = Population::<_, Scalar>::new(config, 10.0, &mut rng).unwrap();
//! let champion = population.run(&mut rng, |_, _| {}).unwrap();
//! assert!(champion.fitness() > 0.0 && champion.fitness() <= 10.0);
//! ```

mod genome;
mod populations;

pub use genome::*;
pub use populations::*;
