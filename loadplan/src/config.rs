use airload::PopulationConfig;
use airload_hold::genomics::Manifest;

use clap::Parser;
use serde::{Deserialize, Serialize};

use std::error::Error;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Command line arguments. Flags override the run configuration file.
#[derive(Parser, Debug)]
#[command(name = "loadplan")]
#[command(author, version, about = "Plans an aircraft cargo load with a genetic algorithm")]
pub struct Args {
    /// RON run configuration; the reference aircraft is used if omitted
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Seed for the random number generator
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Number of generations to evolve
    #[arg(short, long)]
    pub generations: Option<usize>,
    /// Population size
    #[arg(short, long)]
    pub population: Option<NonZeroUsize>,
    /// Report progress every N generations
    #[arg(long, value_name = "N")]
    pub report_every: Option<usize>,
    /// Evaluate fitness on all cores
    #[arg(long)]
    pub parallel: bool,
    /// Write the best load found to this file, as RON
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Everything needed for one run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub population: PopulationConfig,
    #[serde(default = "Manifest::reference")]
    pub manifest: Manifest,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_report_every")]
    pub report_every: usize,
}

fn default_report_every() -> usize {
    100
}

impl Default for RunConfig {
    fn default() -> RunConfig {
        RunConfig {
            population: PopulationConfig {
                size: NonZeroUsize::new(600).unwrap_or(NonZeroUsize::MIN),
                generations: 2500,
                crossover_chance: 0.8,
                mutation_chance: 0.1,
                parallel_evaluation: false,
            },
            manifest: Manifest::reference(),
            seed: None,
            report_every: default_report_every(),
        }
    }
}

impl RunConfig {
    /// Reads a run configuration from a RON file.
    pub fn load(path: &Path) -> Result<RunConfig, Box<dyn Error>> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
        Ok(ron::from_str(&content)?)
    }

    /// Builds the configuration for a run from the
    /// command line, reading the config file if given.
    pub fn from_args(args: &Args) -> Result<RunConfig, Box<dyn Error>> {
        let mut run = match &args.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        if let Some(seed) = args.seed {
            run.seed = Some(seed);
        }
        if let Some(generations) = args.generations {
            run.population.generations = generations;
        }
        if let Some(size) = args.population {
            run.population.size = size;
        }
        if let Some(report_every) = args.report_every {
            run.report_every = report_every;
        }
        if args.parallel {
            run.population.parallel_evaluation = true;
        }
        Ok(run)
    }
}
