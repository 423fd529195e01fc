use airload::logging::{EvolutionLogger, GenerationMemberRecord, ReportingLevel};
use airload::PopulationConfig;
use airload_hold::genomics::{new_population, Allocation, Manifest};
use airload_hold::summary::LoadSummary;

use rand::{rngs::StdRng, SeedableRng};
use std::num::NonZeroUsize;

const SEED: u64 = 20_251_018;

fn config(parallel_evaluation: bool) -> PopulationConfig {
    PopulationConfig {
        size: NonZeroUsize::new(120).unwrap(),
        generations: 80,
        crossover_chance: 0.8,
        mutation_chance: 0.1,
        parallel_evaluation,
    }
}

fn evolve(parallel_evaluation: bool) -> (Vec<f64>, Option<(Allocation, f64)>) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut population =
        new_population(config(parallel_evaluation), Manifest::reference(), &mut rng).unwrap();
    let mut logger = EvolutionLogger::new(ReportingLevel::NoGenomes);
    let champion = population
        .run(&mut rng, |p, s| logger.log(p, s))
        .map(|c| (c.genome().clone(), c.fitness()));
    (logger.best_fitness_history(), champion)
}

#[test]
fn best_fitness_is_monotonic_and_champion_fits_the_hold() {
    let manifest = Manifest::reference();
    let (history, champion) = evolve(false);

    assert_eq!(history.len(), 80);
    assert!(
        history.windows(2).all(|w| w[0] <= w[1]),
        "best-ever fitness regressed: {:?}",
        history
    );

    let (allocation, fitness) = champion.expect("reference hold has feasible loads");
    assert!(fitness > 0.0);
    assert_eq!(fitness, *history.last().unwrap());
    assert!(allocation.is_feasible(&manifest));
    assert!(allocation.cells().iter().all(|&tons| tons >= 0.0));

    let summary = LoadSummary::new(&allocation, &manifest);
    assert_eq!(summary.fitness, fitness);
    for compartment in &summary.compartments {
        assert!(compartment.weight <= compartment.weight_capacity);
        assert!(compartment.volume <= compartment.volume_capacity);
    }
}

#[test]
fn parallel_evaluation_does_not_change_the_run() {
    assert_eq!(evolve(false), evolve(true));
}

#[test]
fn champion_is_kept_when_later_generations_regress() {
    let mut rng = StdRng::seed_from_u64(SEED + 1);
    let config = PopulationConfig {
        size: NonZeroUsize::new(30).unwrap(),
        generations: 40,
        crossover_chance: 1.0,
        mutation_chance: 1.0,
        parallel_evaluation: false,
    };
    let mut population = new_population(config, Manifest::reference(), &mut rng).unwrap();
    let mut logger = EvolutionLogger::new(ReportingLevel::PopulationChampion);
    population.run(&mut rng, |p, s| logger.log(p, s));

    assert!(logger
        .iter()
        .any(|log| log.fitness.maximum < log.best_fitness));
    for log in logger.iter() {
        assert!(log.fitness.maximum <= log.best_fitness);
        if let GenerationMemberRecord::PopulationChampion(Some(champion)) = &log.generation_sample {
            assert_eq!(champion.fitness(), log.best_fitness);
        }
    }
}
