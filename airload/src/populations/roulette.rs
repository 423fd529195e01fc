use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Fitness-proportionate parent selection over
/// one generation's fitness snapshot.
///
/// If the fitness total is zero every member is
/// equally likely. Otherwise members are drawn with
/// probability proportional to their fitness, where
/// negative (or non-finite) fitnesses weigh nothing.
/// Should no member carry weight, selection falls
/// back to uniform.
///
/// # Examples
/// ```
/// use airload::RouletteWheel;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let wheel = RouletteWheel::new(&[0.0, 2.0, 0.0]);
/// assert_eq!(wheel.select(&mut rng), 1);
/// ```
#[derive(Clone, Debug)]
pub struct RouletteWheel {
    slots: Slots,
}

#[derive(Clone, Debug)]
enum Slots {
    Uniform(usize),
    Weighted(WeightedIndex<f64>),
}

impl RouletteWheel {
    /// Builds a wheel from a population's fitnesses.
    ///
    /// # Panics
    /// Panics if `fitnesses` is empty.
    pub fn new(fitnesses: &[f64]) -> RouletteWheel {
        assert!(!fitnesses.is_empty(), "cannot select from an empty population");
        let total: f64 = fitnesses.iter().sum();
        if total == 0.0 {
            return RouletteWheel {
                slots: Slots::Uniform(fitnesses.len()),
            };
        }
        let weights = fitnesses
            .iter()
            .map(|&f| if f.is_finite() && f > 0.0 { f } else { 0.0 });
        let slots = match WeightedIndex::new(weights) {
            Ok(index) => Slots::Weighted(index),
            Err(_) => Slots::Uniform(fitnesses.len()),
        };
        RouletteWheel { slots }
    }

    /// Returns the index of the selected member.
    /// Selection is with replacement.
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        match &self.slots {
            Slots::Uniform(len) => rng.gen_range(0..*len),
            Slots::Weighted(index) => index.sample(rng),
        }
    }

    /// Returns whether the wheel ignores fitness.
    pub fn is_uniform(&self) -> bool {
        matches!(self.slots, Slots::Uniform(_))
    }
}
