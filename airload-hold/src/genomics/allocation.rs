use super::Manifest;

use ahash::AHashMap;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Dirichlet, Distribution};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Tons of each cargo type loaded into each compartment.
///
/// Stored as a dense row-major matrix: one row per
/// cargo type, one column per compartment, in the
/// order of the [`Manifest`] the allocation was made for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    tons: Vec<f64>,
    compartment_count: usize,
}

impl Allocation {
    /// Returns an empty allocation.
    pub fn zeros(cargo_count: usize, compartment_count: usize) -> Allocation {
        Allocation {
            tons: vec![0.0; cargo_count * compartment_count],
            compartment_count,
        }
    }

    /// Builds an allocation from one row of tonnages per cargo type.
    /// Returns `None` if the rows are not all the same length.
    ///
    /// # Examples
    /// ```
    /// use airload_hold::genomics::Allocation;
    ///
    /// let allocation = Allocation::from_rows(vec![vec![1.0, 0.0], vec![0.5, 2.0]]).unwrap();
    /// assert_eq!(allocation.get(1, 1), 2.0);
    /// assert!(Allocation::from_rows(vec![vec![1.0], vec![0.5, 2.0]]).is_none());
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Allocation> {
        let compartment_count = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != compartment_count) {
            return None;
        }
        Some(Allocation {
            tons: rows.into_iter().flatten().collect(),
            compartment_count,
        })
    }

    /// Returns a random allocation for the manifest which
    /// respects every compartment's weight and volume capacity.
    ///
    /// Cargo types are visited in random order. Each one draws
    /// a total tonnage, bounded by its availability and by the
    /// least remaining weight capacity among compartments, and
    /// splits it across compartments uniformly at random (a
    /// symmetric Dirichlet split). Every share is clamped to the
    /// compartment's remaining weight and dropped if its volume
    /// no longer fits. Cargo types visited early therefore get
    /// first claim on the hold.
    pub fn random<R: Rng + ?Sized>(manifest: &Manifest, rng: &mut R) -> Allocation {
        let compartment_count = manifest.compartments.len();
        let mut allocation = Allocation::zeros(manifest.cargo_types.len(), compartment_count);
        let mut remaining_weight: Vec<f64> = manifest
            .compartments
            .iter()
            .map(|c| c.weight_capacity)
            .collect();
        let mut remaining_volume: Vec<f64> = manifest
            .compartments
            .iter()
            .map(|c| c.volume_capacity)
            .collect();

        let mut order: Vec<usize> = (0..manifest.cargo_types.len()).collect();
        order.shuffle(rng);

        for cargo_index in order {
            let cargo = &manifest.cargo_types[cargo_index];
            let hold_room = remaining_weight.iter().copied().fold(f64::INFINITY, f64::min);
            let total = draw_total(manifest.min_draw, cargo.max_weight.min(hold_room), rng);

            for (compartment, share) in split(total, compartment_count, rng).into_iter().enumerate() {
                let tons = share.min(remaining_weight[compartment]);
                let volume = tons * cargo.volume_per_ton;
                if volume <= remaining_volume[compartment] {
                    allocation.set(cargo_index, compartment, tons);
                    remaining_weight[compartment] -= tons;
                    remaining_volume[compartment] -= volume;
                } else {
                    trace!(
                        cargo = %cargo.name,
                        compartment = %manifest.compartments[compartment].name,
                        tons,
                        "share exceeds remaining volume"
                    );
                }
            }
        }
        allocation
    }

    pub fn cargo_count(&self) -> usize {
        if self.compartment_count == 0 {
            0
        } else {
            self.tons.len() / self.compartment_count
        }
    }

    pub fn compartment_count(&self) -> usize {
        self.compartment_count
    }

    /// Tons of cargo type `cargo` in compartment `compartment`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn get(&self, cargo: usize, compartment: usize) -> f64 {
        self.tons[self.index(cargo, compartment)]
    }

    /// Sets the tons of cargo type `cargo` in compartment `compartment`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, cargo: usize, compartment: usize, tons: f64) {
        let index = self.index(cargo, compartment);
        self.tons[index] = tons;
    }

    fn index(&self, cargo: usize, compartment: usize) -> usize {
        assert!(
            compartment < self.compartment_count,
            "compartment index {} out of bounds",
            compartment
        );
        cargo * self.compartment_count + compartment
    }

    /// All cells, row by row.
    pub fn cells(&self) -> &[f64] {
        &self.tons
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [f64] {
        &mut self.tons
    }

    /// Iterates over the rows (one per cargo type).
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.tons.chunks(self.compartment_count.max(1))
    }

    /// Total tons loaded per compartment.
    pub fn compartment_weights(&self) -> Vec<f64> {
        let mut weights = vec![0.0; self.compartment_count];
        for row in self.rows() {
            for (weight, tons) in weights.iter_mut().zip(row) {
                *weight += tons;
            }
        }
        weights
    }

    /// Total volume (m³) occupied per compartment.
    pub fn compartment_volumes(&self, manifest: &Manifest) -> Vec<f64> {
        let mut volumes = vec![0.0; self.compartment_count];
        for (row, cargo) in self.rows().zip(&manifest.cargo_types) {
            for (volume, tons) in volumes.iter_mut().zip(row) {
                *volume += tons * cargo.volume_per_ton;
            }
        }
        volumes
    }

    /// Total tons loaded per cargo type.
    pub fn cargo_weights(&self) -> Vec<f64> {
        self.rows().map(|row| row.iter().sum()).collect()
    }

    /// Profit of the load, without any balance penalty.
    pub fn revenue(&self, manifest: &Manifest) -> f64 {
        self.rows()
            .zip(&manifest.cargo_types)
            .flat_map(|(row, cargo)| row.iter().map(move |tons| tons * cargo.profit_per_ton))
            .sum()
    }

    /// Returns whether no compartment exceeds its
    /// weight or volume capacity.
    pub fn is_feasible(&self, manifest: &Manifest) -> bool {
        let weights = self.compartment_weights();
        let volumes = self.compartment_volumes(manifest);
        manifest
            .compartments
            .iter()
            .zip(weights.iter().zip(&volumes))
            .all(|(c, (&weight, &volume))| {
                weight <= c.weight_capacity && volume <= c.volume_capacity
            })
    }

    /// Returns the tons loaded, keyed by
    /// (cargo type name, compartment name).
    ///
    /// # Examples
    /// ```
    /// use airload_hold::genomics::{Allocation, Manifest};
    ///
    /// let manifest = Manifest::reference();
    /// let mut allocation = Allocation::zeros(4, 3);
    /// allocation.set(1, 2, 4.5);
    ///
    /// let map = allocation.to_map(&manifest);
    /// assert_eq!(map[&("C2".to_string(), "T".to_string())], 4.5);
    /// assert_eq!(map.len(), 12);
    /// ```
    pub fn to_map(&self, manifest: &Manifest) -> AHashMap<(String, String), f64> {
        let mut map = AHashMap::with_capacity(self.tons.len());
        for (row, cargo) in self.rows().zip(&manifest.cargo_types) {
            for (tons, compartment) in row.iter().zip(&manifest.compartments) {
                map.insert((cargo.name.clone(), compartment.name.clone()), *tons);
            }
        }
        map
    }
}

/// Draws a total tonnage from [floor, max(floor, cap)).
fn draw_total<R: Rng + ?Sized>(floor: f64, cap: f64, rng: &mut R) -> f64 {
    if cap > floor {
        rng.gen_range(floor..cap)
    } else {
        floor
    }
}

/// Splits `total` into `parts` shares uniformly over the simplex.
fn split<R: Rng + ?Sized>(total: f64, parts: usize, rng: &mut R) -> Vec<f64> {
    match Dirichlet::new_with_size(1.0, parts) {
        Ok(dirichlet) => dirichlet
            .sample(rng)
            .into_iter()
            .map(|fraction| fraction * total)
            .collect(),
        // Fewer than two compartments: nothing to split.
        Err(_) => vec![total; parts],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genomics::{CargoType, Compartment};
    use rand::{rngs::StdRng, SeedableRng};

    // Dirichlet shares may sum to a hair over the drawn total.
    const SLACK: f64 = 1e-9;

    fn assert_within_capacity(allocation: &Allocation, manifest: &Manifest) {
        let weights = allocation.compartment_weights();
        let volumes = allocation.compartment_volumes(manifest);
        for (j, compartment) in manifest.compartments.iter().enumerate() {
            assert!(
                weights[j] <= compartment.weight_capacity,
                "{} overweight: {}",
                compartment.name,
                weights[j]
            );
            assert!(
                volumes[j] <= compartment.volume_capacity,
                "{} over volume: {}",
                compartment.name,
                volumes[j]
            );
        }
    }

    #[test]
    fn random_allocations_fit_the_hold() {
        let manifest = Manifest::reference();
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..2_000 {
            let allocation = Allocation::random(&manifest, &mut rng);
            assert_eq!(allocation.cargo_count(), 4);
            assert_eq!(allocation.compartment_count(), 3);
            assert!(allocation.cells().iter().all(|&t| t >= 0.0));
            assert_within_capacity(&allocation, &manifest);
            assert!(allocation.is_feasible(&manifest));
        }
    }

    #[test]
    fn random_allocations_respect_availability() {
        let manifest = Manifest::reference();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let allocation = Allocation::random(&manifest, &mut rng);
            for (loaded, cargo) in allocation.cargo_weights().iter().zip(&manifest.cargo_types) {
                assert!(*loaded <= cargo.max_weight + SLACK);
            }
        }
    }

    #[test]
    fn dense_cargo_is_kept_out_of_small_volumes() {
        // One ton would need 500 m³ but only 100 m³ exist.
        let manifest = Manifest::new(
            vec![Compartment::new("A", 5.0, 100.0), Compartment::new("B", 5.0, 100.0)],
            vec![CargoType::new("lead", 500.0, 4.0, 10.0)],
        );
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let allocation = Allocation::random(&manifest, &mut rng);
            assert_within_capacity(&allocation, &manifest);
        }
    }

    #[test]
    fn single_compartment_takes_the_whole_draw() {
        let manifest = Manifest::new(
            vec![Compartment::new("only", 3.0, 1000.0)],
            vec![CargoType::new("X", 1.0, 10.0, 1.0)],
        );
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let allocation = Allocation::random(&manifest, &mut rng);
            let tons = allocation.get(0, 0);
            assert!(tons >= manifest.min_draw && tons <= 3.0);
        }
    }

    #[test]
    fn dirichlet_split_preserves_total() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let shares = split(6.0, 3, &mut rng);
            assert_eq!(shares.len(), 3);
            assert!(shares.iter().all(|&s| s >= 0.0));
            assert!((shares.iter().sum::<f64>() - 6.0).abs() < 1e-9);
        }
    }

    #[test]
    fn exhausted_hold_draws_the_floor() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(draw_total(0.001, 0.0, &mut rng), 0.001);
        let drawn = draw_total(0.001, 2.0, &mut rng);
        assert!((0.001..2.0).contains(&drawn));
    }

    #[test]
    fn totals_and_revenue() {
        let manifest = Manifest::reference();
        let allocation = Allocation::from_rows(vec![
            vec![1.0, 0.0, 2.0],
            vec![0.0, 3.0, 0.0],
            vec![0.0, 0.0, 0.0],
            vec![0.5, 0.5, 0.0],
        ])
        .unwrap();
        assert_eq!(allocation.compartment_weights(), vec![1.5, 3.5, 2.0]);
        assert_eq!(
            allocation.compartment_volumes(&manifest),
            vec![480.0 + 195.0, 1950.0 + 195.0, 960.0]
        );
        assert_eq!(allocation.cargo_weights(), vec![3.0, 3.0, 0.0, 1.0]);
        assert_eq!(allocation.revenue(&manifest), 930.0 + 1140.0 + 285.0);
        assert!(allocation.is_feasible(&manifest));
    }
}
