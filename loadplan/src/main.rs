mod config;
mod report;

use airload_hold::genomics::new_population;
use config::{Args, RunConfig};

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use ron::ser::PrettyConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use std::error::Error;
use std::fs;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let run = RunConfig::from_args(&args)?;
    let seed = run.seed.unwrap_or_else(rand::random);
    info!(
        seed,
        size = run.population.size.get(),
        generations = run.population.generations,
        "starting evolution"
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let mut population = new_population(run.population, run.manifest, &mut rng)?;
    let report_every = run.report_every.max(1);
    population.run(&mut rng, |_, summary| {
        if (summary.generation - 1) % report_every == 0 {
            info!(
                generation = summary.generation,
                best = summary.best_fitness,
                mean = summary.fitness.mean,
                "progress"
            );
        }
    });

    let champion = match population.champion() {
        Some(champion) => champion,
        None => {
            warn!("no feasible load with positive fitness was found");
            return Ok(());
        }
    };
    print!(
        "{}",
        report::render(champion.genome(), population.genetic_config())?
    );

    if let Some(path) = &args.output {
        fs::write(path, ron::ser::to_string_pretty(champion, PrettyConfig::new())?)?;
        info!(path = %path.display(), "best load written");
    }
    Ok(())
}
