//! A Population is a fixed-size collection of genomes,
//! evolved generation by generation through roulette
//! selection, crossover and mutation. It also keeps the
//! best genome it has ever seen.
mod config;
mod errors;
pub mod logging;
mod roulette;

use crate::Genome;
pub use config::PopulationConfig;
pub use errors::ConfigError;
use logging::Stats;
pub use roulette::RouletteWheel;

use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// The best genome ever observed by a population,
/// together with its fitness. Kept by value, so it
/// outlives the generation that produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Champion<G> {
    genome: G,
    fitness: f64,
}

impl<G> Champion<G> {
    /// Returns the champion genome.
    pub fn genome(&self) -> &G {
        &self.genome
    }

    /// Returns the fitness the champion scored when it was recorded.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Consumes the record, returning the genome.
    pub fn into_genome(self) -> G {
        self.genome
    }
}

/// Fitness overview of a freshly bred generation.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationSummary {
    /// Number of the generation, starting at 1.
    pub generation: usize,
    /// Fitness statistics of the new generation.
    pub fitness: Stats,
    /// Best-ever fitness after this generation.
    pub best_fitness: f64,
    /// Whether this generation replaced the best-ever record.
    pub improved: bool,
}

/// A population of genomes.
#[derive(Serialize, Deserialize)]
pub struct Population<C, G> {
    genomes: Vec<G>,
    champion: Option<Champion<G>>,
    generation: usize,
    population_config: PopulationConfig,
    genetic_config: C,
}

impl<C, G> Population<C, G>
where
    C: Sync,
    G: Genome<Config = C>,
{
    /// Creates a new population of randomized genomes
    /// using the passed configurations.
    ///
    /// The type of `genetic_config` depends on the implementation
    /// of [`Genome`], and is effectively opaque to the population.
    ///
    /// # Errors
    /// Returns an error if `population_config` fails
    /// [validation](PopulationConfig::validate).
    ///
    /// [`Genome`]: crate::Genome
    pub fn new<R: Rng + ?Sized>(
        population_config: PopulationConfig,
        genetic_config: C,
        rng: &mut R,
    ) -> Result<Population<C, G>, ConfigError> {
        population_config.validate()?;
        let genomes = (0..population_config.size.get())
            .map(|_| G::new(&genetic_config, rng))
            .collect();
        Ok(Population {
            genomes,
            champion: None,
            generation: 0,
            population_config,
            genetic_config,
        })
    }

    /// Evaluates the fitness of each genome in the
    /// population, in population order.
    ///
    /// Runs on the rayon thread pool if
    /// [`parallel_evaluation`] is set, which yields
    /// the same values as sequential evaluation.
    ///
    /// [`parallel_evaluation`]: PopulationConfig::parallel_evaluation
    pub fn evaluate_fitness(&self) -> Vec<f64> {
        let config = &self.genetic_config;
        if self.population_config.parallel_evaluation {
            self.genomes.par_iter().map(|g| g.fitness(config)).collect()
        } else {
            self.genomes.iter().map(|g| g.fitness(config)).collect()
        }
    }

    /// Breeds the next generation, replacing the current one.
    ///
    /// Parents are drawn by [roulette](RouletteWheel) from the
    /// current generation's fitnesses, recombined and mutated
    /// pairwise until the population is refilled. The new
    /// generation is then evaluated, and its best genome
    /// replaces the [champion](Population::champion) if it is
    /// strictly fitter.
    #[instrument(level = "debug", skip(self, rng), fields(generation = self.generation + 1))]
    pub fn evolve<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GenerationSummary {
        let fitnesses = self.evaluate_fitness();
        self.genomes = self.breed(&fitnesses, rng);
        self.generation += 1;

        let fitnesses = self.evaluate_fitness();
        let improved = self.update_champion(&fitnesses);
        let summary = GenerationSummary {
            generation: self.generation,
            fitness: Stats::from(fitnesses.iter().copied()),
            best_fitness: self.best_fitness(),
            improved,
        };
        debug!(
            max = summary.fitness.maximum,
            mean = summary.fitness.mean,
            best = summary.best_fitness,
            "generation evaluated"
        );
        summary
    }

    /// Evolves the population for the configured number of
    /// [generations], calling `observer` after each one, and
    /// returns the best-ever record.
    ///
    /// There is no early stopping.
    ///
    /// [generations]: PopulationConfig::generations
    pub fn run<R, F>(&mut self, rng: &mut R, mut observer: F) -> Option<&Champion<G>>
    where
        R: Rng + ?Sized,
        F: FnMut(&Self, &GenerationSummary),
    {
        for _ in 0..self.population_config.generations {
            let summary = self.evolve(rng);
            observer(self, &summary);
        }
        self.champion()
    }

    /// Fills a new generation with mutated offspring of
    /// roulette-selected parents.
    fn breed<R: Rng + ?Sized>(&self, fitnesses: &[f64], rng: &mut R) -> Vec<G> {
        let size = self.population_config.size.get();
        let crossover_chance = self.population_config.crossover_chance;
        let mutation_chance = self.population_config.mutation_chance;
        let wheel = RouletteWheel::new(fitnesses);

        let mut offspring = Vec::with_capacity(size + 1);
        while offspring.len() < size {
            let first = &self.genomes[wheel.select(rng)];
            let second = &self.genomes[wheel.select(rng)];
            let (mut child1, mut child2) =
                G::crossover(first, second, crossover_chance, rng, &self.genetic_config);
            child1.mutate(mutation_chance, rng, &self.genetic_config);
            child2.mutate(mutation_chance, rng, &self.genetic_config);
            offspring.push(child1);
            offspring.push(child2);
        }
        offspring.truncate(size);
        offspring
    }

    /// Replaces the champion with the fittest current genome
    /// if it beats the best-ever fitness. Returns whether it did.
    fn update_champion(&mut self, fitnesses: &[f64]) -> bool {
        let best = fitnesses
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, f)| match best {
                Some((_, best_fitness)) if f <= best_fitness => best,
                _ => Some((i, f)),
            });
        match best {
            Some((index, fitness)) if fitness > self.best_fitness() => {
                info!(
                    generation = self.generation,
                    fitness, "new best-ever genome"
                );
                self.champion = Some(Champion {
                    genome: self.genomes[index].clone(),
                    fitness,
                });
                true
            }
            _ => false,
        }
    }

    /// Returns the best genome observed so far, if
    /// any genome has scored above zero.
    pub fn champion(&self) -> Option<&Champion<G>> {
        self.champion.as_ref()
    }

    /// Returns the best-ever fitness, or 0
    /// if no champion has been recorded yet.
    pub fn best_fitness(&self) -> f64 {
        self.champion.as_ref().map_or(0.0, |c| c.fitness)
    }

    /// Consumes the population, returning the best-ever record.
    pub fn into_champion(self) -> Option<Champion<G>> {
        self.champion
    }

    /// Returns an iterator over all current genomes.
    pub fn genomes(&self) -> impl Iterator<Item = &G> {
        self.genomes.iter()
    }

    /// Returns the number of generations evolved so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns the population configuration.
    pub fn population_config(&self) -> &PopulationConfig {
        &self.population_config
    }

    /// Returns the genetic configuration shared by all genomes.
    pub fn genetic_config(&self) -> &C {
        &self.genetic_config
    }
}
