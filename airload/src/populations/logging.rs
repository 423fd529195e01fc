use super::{Champion, GenerationSummary, Population};

use crate::genome::Genome;

use std::fmt;

/// Defines different possible reporting levels for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportingLevel {
    /// Clones the entire population.
    AllGenomes,
    /// Clones only the best-ever record.
    PopulationChampion,
    /// Clones no genomes.
    NoGenomes,
}

/// A snapshot of a population after one generation.
#[derive(Clone, Debug)]
pub struct Log<G> {
    pub generation_number: usize,
    pub generation_sample: GenerationMemberRecord<G>,
    pub fitness: Stats,
    pub best_fitness: f64,
    pub improved: bool,
}

impl<G> fmt::Display for Log<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Log {{\n\
            \tgeneration_number: {:?}\n\
            \tfitness: {:?}\n\
            \tbest_fitness: {:?}\n\
            \timproved: {:?}\n\
            }}",
            &self.generation_number, &self.fitness, &self.best_fitness, &self.improved
        )
    }
}

/// A struct for reporting basic statistical data.
#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub maximum: f64,
    pub minimum: f64,
    pub mean: f64,
    pub median: f64,
}

impl Stats {
    /// Returns statistics about numbers in a sequence.
    ///
    /// # Panics
    /// Panics if the sequence is empty or contains NaN.
    ///
    /// # Examples
    /// ```
    /// use airload::logging::Stats;
    ///
    /// let stats = Stats::from([-2.0, -1.0, 0.5, 1.0, 1.5].iter().copied());
    /// assert_eq!(stats.maximum, 1.5);
    /// assert_eq!(stats.minimum, -2.0);
    /// assert_eq!(stats.mean, 0.0);
    /// assert_eq!(stats.median, 0.5);
    /// ```
    pub fn from(data: impl Iterator<Item = f64>) -> Stats {
        let mut data: Vec<f64> = data.collect();
        assert!(!data.is_empty(), "no data to summarize");
        let (mut max, mut min, mut sum) = (f64::MIN, f64::MAX, 0.0);
        for d in &data {
            max = d.max(max);
            min = d.min(min);
            sum += d;
        }
        let mean = sum / data.len() as f64;
        data.sort_unstable_by(|a, b| {
            a.partial_cmp(b)
                .unwrap_or_else(|| panic!("invalid fitness detected (NaN)"))
        });
        let mid = data.len() / 2;
        let median = if data.len() % 2 == 0 {
            (data[mid - 1] + data[mid]) / 2.0
        } else {
            data[mid]
        };
        Stats {
            maximum: max,
            minimum: min,
            mean,
            median,
        }
    }
}

/// A reporting-level dependant store
/// of genomes from a population.
#[derive(Clone, Debug)]
pub enum GenerationMemberRecord<G> {
    /// Every genome of the generation.
    Population(Vec<G>),
    /// The best-ever record, if one exists yet.
    PopulationChampion(Option<Champion<G>>),
    /// Empty.
    None,
}

/// A log of the evolution of a population over time.
#[derive(Clone, Debug)]
pub struct EvolutionLogger<G> {
    reporting_level: ReportingLevel,
    logs: Vec<Log<G>>,
}

impl<G: Genome> EvolutionLogger<G> {
    /// Returns a logger with the appropiate reporting level.
    pub fn new(reporting_level: ReportingLevel) -> EvolutionLogger<G> {
        EvolutionLogger {
            reporting_level,
            logs: vec![],
        }
    }

    /// Store a snapshot of a population, as summarized
    /// by the generation that produced it.
    ///
    /// Meant to be called from the observer passed to
    /// [`Population::run`].
    ///
    /// [`Population::run`]: crate::Population::run
    pub fn log<C>(&mut self, population: &Population<C, G>, summary: &GenerationSummary)
    where
        C: Sync,
        G: Genome<Config = C>,
    {
        self.logs.push(Log {
            generation_number: summary.generation,
            generation_sample: match self.reporting_level {
                ReportingLevel::AllGenomes => {
                    GenerationMemberRecord::Population(population.genomes().cloned().collect())
                }
                ReportingLevel::PopulationChampion => {
                    GenerationMemberRecord::PopulationChampion(population.champion().cloned())
                }
                ReportingLevel::NoGenomes => GenerationMemberRecord::None,
            },
            fitness: summary.fitness.clone(),
            best_fitness: summary.best_fitness,
            improved: summary.improved,
        })
    }

    /// Iterate over all logged snapshots.
    pub fn iter(&self) -> impl Iterator<Item = &Log<G>> {
        self.logs.iter()
    }

    /// Returns the best-ever fitness recorded at each logged generation.
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.logs.iter().map(|log| log.best_fitness).collect()
    }
}
