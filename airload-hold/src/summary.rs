//! Load statistics derived from an allocation,
//! for reporting a solution.
use crate::genomics::{fitness, Allocation, Manifest};

use serde::{Deserialize, Serialize};

/// Weight and volume carried by one compartment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompartmentLoad {
    pub name: String,
    pub weight: f64,
    pub weight_capacity: f64,
    pub volume: f64,
    pub volume_capacity: f64,
}

impl CompartmentLoad {
    /// Fraction of the weight capacity in use.
    pub fn weight_utilization(&self) -> f64 {
        self.weight / self.weight_capacity
    }

    /// Fraction of the volume capacity in use.
    pub fn volume_utilization(&self) -> f64 {
        self.volume / self.volume_capacity
    }
}

/// Totals of an allocation against the hold's capacities.
///
/// `profit` is the plain revenue of the load, while `fitness`
/// also carries the balance penalty; the two differ whenever
/// the load is unbalanced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub compartments: Vec<CompartmentLoad>,
    pub total_weight: f64,
    pub total_weight_capacity: f64,
    pub total_volume: f64,
    pub total_volume_capacity: f64,
    pub profit: f64,
    pub fitness: f64,
}

impl LoadSummary {
    /// Summarizes `allocation` as loaded into the manifest's hold.
    ///
    /// # Examples
    /// ```
    /// use airload_hold::genomics::{Allocation, Manifest};
    /// use airload_hold::summary::LoadSummary;
    ///
    /// let manifest = Manifest::reference();
    /// let mut allocation = Allocation::zeros(4, 3);
    /// allocation.set(0, 1, 2.0);
    ///
    /// let summary = LoadSummary::new(&allocation, &manifest);
    /// assert_eq!(summary.compartments[1].weight, 2.0);
    /// assert_eq!(summary.compartments[1].volume, 960.0);
    /// assert_eq!(summary.profit, 620.0);
    /// assert!(summary.fitness < summary.profit);
    /// ```
    pub fn new(allocation: &Allocation, manifest: &Manifest) -> LoadSummary {
        let weights = allocation.compartment_weights();
        let volumes = allocation.compartment_volumes(manifest);
        let compartments: Vec<CompartmentLoad> = manifest
            .compartments
            .iter()
            .zip(weights.iter().zip(&volumes))
            .map(|(c, (&weight, &volume))| CompartmentLoad {
                name: c.name.clone(),
                weight,
                weight_capacity: c.weight_capacity,
                volume,
                volume_capacity: c.volume_capacity,
            })
            .collect();
        LoadSummary {
            total_weight: weights.iter().sum(),
            total_weight_capacity: manifest.total_weight_capacity(),
            total_volume: volumes.iter().sum(),
            total_volume_capacity: manifest.total_volume_capacity(),
            profit: allocation.revenue(manifest),
            fitness: fitness::evaluate(allocation, manifest),
            compartments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utilization_fractions() {
        let manifest = Manifest::reference();
        let allocation = Allocation::from_rows(vec![
            vec![5.0, 0.0, 0.0],
            vec![0.0, 8.0, 0.0],
            vec![0.0, 0.0, 4.0],
            vec![0.0, 0.0, 0.0],
        ])
        .unwrap();
        let summary = LoadSummary::new(&allocation, &manifest);
        assert_eq!(summary.compartments[0].weight_utilization(), 0.5);
        assert_eq!(summary.compartments[1].weight_utilization(), 0.5);
        assert_eq!(summary.compartments[2].weight_utilization(), 0.5);
        assert_eq!(summary.compartments[0].volume, 2400.0);
        assert_eq!(summary.total_weight, 17.0);
        assert_eq!(summary.total_weight_capacity, 34.0);
        assert_eq!(summary.total_volume, 2400.0 + 5200.0 + 2320.0);
        assert_eq!(summary.profit, 5.0 * 310.0 + 8.0 * 380.0 + 4.0 * 350.0);
    }
}
