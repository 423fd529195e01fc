//! # AirLoad-Hold
//! Aircraft hold loading as a genome for the [`airload`] engine.
//!
//! An [`Allocation`] records how many tons of each cargo type go into
//! each compartment of the hold described by a [`Manifest`]. Random
//! allocations are built to respect every compartment's weight and
//! volume capacity; crossover and mutation may break those limits, in
//! which case the allocation simply scores zero. Feasible allocations
//! score their revenue minus a penalty for deviating from a load
//! balanced in proportion to compartment volume.
//!
//! [`Allocation`]: crate::genomics::Allocation
//! [`Manifest`]: crate::genomics::Manifest
//!
//! # Example usage: loading the reference aircraft
//! ```
//! use airload::PopulationConfig;
//! use airload_hold::genomics::{new_population, Manifest};
//! use airload_hold::summary::LoadSummary;
//! use rand::{rngs::StdRng, SeedableRng};
//! use std::num::NonZeroUsize;
//!
//! let config = PopulationConfig {
//!     size: NonZeroUsize::new(60).unwrap(),
//!     generations: 30,
//!     crossover_chance: 0.8,
//!     mutation_chance: 0.1,
//!     parallel_evaluation: false,
//! };
//!
//! let mut rng = StdRng::seed_from_u64(17);
//! let mut population = new_population(config, Manifest::reference(), &mut rng).unwrap();
//! population.run(&mut rng, |_, summary| {
//!     println!("generation {}: best {:.2}", summary.generation, summary.best_fitness);
//! });
//!
//! let manifest = population.genetic_config().clone();
//! let champion = population.into_champion().expect("no feasible load found");
//! let summary = LoadSummary::new(champion.genome(), &manifest);
//! assert_eq!(summary.fitness, champion.fitness());
//! assert!(summary.profit >= summary.fitness);
//! ```

pub mod genomics;
pub mod summary;
