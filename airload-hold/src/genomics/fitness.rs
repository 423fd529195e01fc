use super::{Allocation, Manifest};

/// Scores an allocation.
///
/// The score is the load's revenue minus a balance penalty:
/// each compartment is expected to carry a share of the total
/// weight proportional to its share of the hold's volume, and
/// every ton of deviation costs [`balance_penalty`]. Overloading
/// any compartment, by weight or by volume, scores exactly zero.
///
/// The result may be negative when imbalance outweighs revenue.
///
/// [`balance_penalty`]: Manifest::balance_penalty
///
/// # Examples
/// ```
/// use airload_hold::genomics::{fitness, Allocation, Manifest};
///
/// let manifest = Manifest::reference();
/// let mut allocation = Allocation::zeros(4, 3);
/// // 11 tons of C1 in the 10 ton forward compartment.
/// allocation.set(0, 0, 11.0);
/// assert_eq!(fitness::evaluate(&allocation, &manifest), 0.0);
/// ```
pub fn evaluate(allocation: &Allocation, manifest: &Manifest) -> f64 {
    let weights = allocation.compartment_weights();
    let volumes = allocation.compartment_volumes(manifest);
    let overloaded = manifest
        .compartments
        .iter()
        .zip(weights.iter().zip(&volumes))
        .any(|(c, (&weight, &volume))| weight > c.weight_capacity || volume > c.volume_capacity);
    if overloaded {
        return 0.0;
    }
    allocation.revenue(manifest) - balance_penalty(&weights, manifest)
}

/// Penalty for the distance between the per-compartment
/// weights and the volume-proportional ideal load.
pub fn balance_penalty(compartment_weights: &[f64], manifest: &Manifest) -> f64 {
    let total_weight: f64 = compartment_weights.iter().sum();
    let total_volume = manifest.total_volume_capacity();
    manifest
        .compartments
        .iter()
        .zip(compartment_weights)
        .map(|(c, weight)| {
            let ideal = total_weight * (c.volume_capacity / total_volume);
            (weight - ideal).abs() * manifest.balance_penalty
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genomics::{CargoType, Compartment};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn evaluation_is_deterministic() {
        let manifest = Manifest::reference();
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..100 {
            let allocation = Allocation::random(&manifest, &mut rng);
            assert_eq!(
                evaluate(&allocation, &manifest),
                evaluate(&allocation, &manifest)
            );
        }
    }

    #[test]
    fn overweight_scores_zero() {
        let manifest = Manifest::reference();
        let mut allocation = Allocation::zeros(4, 3);
        allocation.set(3, 2, 8.5);
        assert!(allocation.revenue(&manifest) > 0.0);
        assert_eq!(evaluate(&allocation, &manifest), 0.0);
    }

    #[test]
    fn over_volume_scores_zero() {
        let manifest = Manifest::reference();
        let mut allocation = Allocation::zeros(4, 3);
        // 15 t of C3 fill the central compartment's 8700 m³ exactly.
        allocation.set(2, 1, 15.0);
        assert!(evaluate(&allocation, &manifest) != 0.0);
        // 15.5 t is within 16 t but needs 8990 m³.
        allocation.set(2, 1, 15.5);
        assert_eq!(evaluate(&allocation, &manifest), 0.0);
    }

    #[test]
    fn balanced_load_scores_its_revenue() {
        let manifest = Manifest::new(
            vec![
                Compartment::new("A", 10.0, 1000.0),
                Compartment::new("B", 10.0, 2000.0),
                Compartment::new("C", 10.0, 1000.0),
            ],
            vec![CargoType::new("X", 1.0, 100.0, 7.0)],
        );
        let allocation = Allocation::from_rows(vec![vec![1.0, 2.0, 1.0]]).unwrap();
        assert_eq!(balance_penalty(&allocation.compartment_weights(), &manifest), 0.0);
        assert_eq!(evaluate(&allocation, &manifest), 28.0);
        assert_eq!(evaluate(&allocation, &manifest), allocation.revenue(&manifest));
    }

    #[test]
    fn imbalance_is_penalized_per_ton() {
        let manifest = Manifest::reference();
        let mut allocation = Allocation::zeros(4, 3);
        allocation.set(0, 0, 1.0);
        // Forward share of the hold volume is 6800 / 20800; the
        // deviation there equals the deviation spread over C and T.
        let deviation = 2.0 * (1.0 - 6800.0 / 20800.0);
        let expected = 310.0 - 50.0 * deviation;
        assert!((evaluate(&allocation, &manifest) - expected).abs() < 1e-9);
    }

    #[test]
    fn severe_imbalance_can_score_negative() {
        let manifest = Manifest {
            balance_penalty: 1000.0,
            ..Manifest::reference()
        };
        let mut allocation = Allocation::zeros(4, 3);
        allocation.set(3, 1, 2.0);
        assert!(evaluate(&allocation, &manifest) < 0.0);
    }

    #[test]
    fn empty_hold_scores_zero() {
        let manifest = Manifest::reference();
        assert_eq!(evaluate(&Allocation::zeros(4, 3), &manifest), 0.0);
    }
}
