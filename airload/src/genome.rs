use rand::Rng;

/// An interface for genomes that can be evolved by a [`Population`].
///
/// All randomness is drawn from the generator handed in by the
/// population, so a seeded generator reproduces a whole run.
///
/// [`Population`]: crate::Population
pub trait Genome: Clone + Send + Sync {
    type Config: Sync;

    /// Returns a randomized genome.
    fn new<R: Rng + ?Sized>(config: &Self::Config, rng: &mut R) -> Self;

    /// Returns the genome's fitness value.
    ///
    /// Must be pure: evaluating an unchanged genome
    /// twice has to yield the same value. Negative
    /// values are allowed, but are never favoured
    /// during selection. NaN is not: generation
    /// statistics panic on it.
    fn fitness(&self, config: &Self::Config) -> f64;

    /// Combines two parents into a pair of children.
    ///
    /// `chance` is the probability that recombination
    /// takes place at all; otherwise the children are
    /// copies of their parents.
    fn crossover<R: Rng + ?Sized>(
        first: &Self,
        second: &Self,
        chance: f64,
        rng: &mut R,
        config: &Self::Config,
    ) -> (Self, Self);

    /// Perturbs the genome in place, each gene
    /// mutating independently with probability `chance`.
    fn mutate<R: Rng + ?Sized>(&mut self, chance: f64, rng: &mut R, config: &Self::Config);
}
