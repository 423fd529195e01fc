use super::Allocation;

use rand::Rng;

/// Bounds of the factor a mutated cell is scaled by.
pub const MUTATION_SCALE: (f64, f64) = (0.9, 1.1);

/// Uniform crossover.
///
/// With probability `chance` the parents are recombined: every
/// cell is swapped between the two children with probability
/// one half. Otherwise the children are copies of the parents.
/// Children are not checked for feasibility.
///
/// # Panics
/// Panics if the parents have different shapes.
pub fn uniform_crossover<R: Rng + ?Sized>(
    first: &Allocation,
    second: &Allocation,
    chance: f64,
    rng: &mut R,
) -> (Allocation, Allocation) {
    assert_eq!(
        (first.cargo_count(), first.compartment_count()),
        (second.cargo_count(), second.compartment_count()),
        "crossover between allocations of different shapes"
    );
    let mut child1 = first.clone();
    let mut child2 = second.clone();
    if rng.gen::<f64>() < chance {
        for (a, b) in child1.cells_mut().iter_mut().zip(child2.cells_mut()) {
            if rng.gen_bool(0.5) {
                std::mem::swap(a, b);
            }
        }
    }
    (child1, child2)
}

/// Scales each cell, with probability `chance`, by a factor
/// drawn uniformly from [`MUTATION_SCALE`]. Feasibility is
/// not restored.
pub fn scale_mutation<R: Rng + ?Sized>(allocation: &mut Allocation, chance: f64, rng: &mut R) {
    let (low, high) = MUTATION_SCALE;
    for tons in allocation.cells_mut() {
        if rng.gen::<f64>() < chance {
            *tons *= rng.gen_range(low..=high);
        }
    }
}
