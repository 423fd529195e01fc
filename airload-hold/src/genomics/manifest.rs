use super::ManifestError;

use serde::{Deserialize, Serialize};

/// Penalty per ton of deviation from the balanced load.
pub const DEFAULT_BALANCE_PENALTY: f64 = 50.0;
/// Smallest total tonnage drawn for a cargo type
/// during initialization.
pub const DEFAULT_MIN_DRAW: f64 = 0.001;

/// A hold compartment, with its weight (tons)
/// and volume (m³) capacities.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Compartment {
    pub name: String,
    pub weight_capacity: f64,
    pub volume_capacity: f64,
}

impl Compartment {
    pub fn new(name: impl Into<String>, weight_capacity: f64, volume_capacity: f64) -> Compartment {
        Compartment {
            name: name.into(),
            weight_capacity,
            volume_capacity,
        }
    }
}

/// A kind of cargo offered for loading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CargoType {
    pub name: String,
    /// Volume (m³) taken by one ton.
    pub volume_per_ton: f64,
    /// Tons of this cargo available.
    pub max_weight: f64,
    /// Profit earned per ton loaded.
    pub profit_per_ton: f64,
}

impl CargoType {
    pub fn new(
        name: impl Into<String>,
        volume_per_ton: f64,
        max_weight: f64,
        profit_per_ton: f64,
    ) -> CargoType {
        CargoType {
            name: name.into(),
            volume_per_ton,
            max_weight,
            profit_per_ton,
        }
    }
}

/// The loading problem: the hold's compartments, the
/// cargo on offer, and the parameters of the objective.
///
/// Acts as the genetic configuration of [`Allocation`]
/// genomes, and is read-only for a whole run.
///
/// [`Allocation`]: crate::genomics::Allocation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub compartments: Vec<Compartment>,
    pub cargo_types: Vec<CargoType>,
    /// Fitness lost per ton a compartment deviates
    /// from its volume-proportional share of the load.
    #[serde(default = "default_balance_penalty")]
    pub balance_penalty: f64,
    /// Lower bound of the random total tonnage
    /// drawn per cargo type at initialization.
    #[serde(default = "default_min_draw")]
    pub min_draw: f64,
}

fn default_balance_penalty() -> f64 {
    DEFAULT_BALANCE_PENALTY
}

fn default_min_draw() -> f64 {
    DEFAULT_MIN_DRAW
}

impl Manifest {
    /// Returns a manifest with the default objective parameters.
    pub fn new(compartments: Vec<Compartment>, cargo_types: Vec<CargoType>) -> Manifest {
        Manifest {
            compartments,
            cargo_types,
            balance_penalty: DEFAULT_BALANCE_PENALTY,
            min_draw: DEFAULT_MIN_DRAW,
        }
    }

    /// Returns the reference three-compartment aircraft
    /// with its four cargo types.
    ///
    /// # Examples
    /// ```
    /// use airload_hold::genomics::Manifest;
    ///
    /// let manifest = Manifest::reference();
    /// assert_eq!(manifest.compartments.len(), 3);
    /// assert_eq!(manifest.cargo_types.len(), 4);
    /// assert_eq!(manifest.total_weight_capacity(), 34.0);
    /// assert_eq!(manifest.total_volume_capacity(), 20800.0);
    /// ```
    pub fn reference() -> Manifest {
        Manifest::new(
            vec![
                Compartment::new("D", 10.0, 6800.0),
                Compartment::new("C", 16.0, 8700.0),
                Compartment::new("T", 8.0, 5300.0),
            ],
            vec![
                CargoType::new("C1", 480.0, 18.0, 310.0),
                CargoType::new("C2", 650.0, 15.0, 380.0),
                CargoType::new("C3", 580.0, 23.0, 350.0),
                CargoType::new("C4", 390.0, 12.0, 285.0),
            ],
        )
    }

    /// Combined volume capacity of all compartments.
    pub fn total_volume_capacity(&self) -> f64 {
        self.compartments.iter().map(|c| c.volume_capacity).sum()
    }

    /// Combined weight capacity of all compartments.
    pub fn total_weight_capacity(&self) -> f64 {
        self.compartments.iter().map(|c| c.weight_capacity).sum()
    }

    /// Checks that the manifest describes a solvable problem:
    /// at least one compartment and cargo type, strictly positive
    /// capacities, densities and availabilities, finite profits,
    /// and sane objective parameters.
    ///
    /// # Examples
    /// ```
    /// use airload_hold::genomics::{Manifest, ManifestError};
    ///
    /// let mut manifest = Manifest::reference();
    /// assert!(manifest.validate().is_ok());
    ///
    /// manifest.compartments.clear();
    /// assert_eq!(manifest.validate(), Err(ManifestError::NoCompartments));
    /// ```
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.compartments.is_empty() {
            return Err(ManifestError::NoCompartments);
        }
        if self.cargo_types.is_empty() {
            return Err(ManifestError::NoCargoTypes);
        }
        for compartment in &self.compartments {
            for (field, value) in [
                ("weight_capacity", compartment.weight_capacity),
                ("volume_capacity", compartment.volume_capacity),
            ] {
                if !is_positive(value) {
                    return Err(ManifestError::InvalidCompartment {
                        name: compartment.name.clone(),
                        field,
                        value,
                    });
                }
            }
        }
        for cargo in &self.cargo_types {
            for (field, value, valid) in [
                ("volume_per_ton", cargo.volume_per_ton, is_positive(cargo.volume_per_ton)),
                ("max_weight", cargo.max_weight, is_positive(cargo.max_weight)),
                ("profit_per_ton", cargo.profit_per_ton, cargo.profit_per_ton.is_finite()),
            ] {
                if !valid {
                    return Err(ManifestError::InvalidCargoType {
                        name: cargo.name.clone(),
                        field,
                        value,
                    });
                }
            }
        }
        if !(self.balance_penalty.is_finite() && self.balance_penalty >= 0.0) {
            return Err(ManifestError::InvalidBalancePenalty(self.balance_penalty));
        }
        if !is_positive(self.min_draw) {
            return Err(ManifestError::InvalidMinDraw(self.min_draw));
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_cargo_parameters() {
        let manifest = Manifest::reference();
        let c3 = &manifest.cargo_types[2];
        assert_eq!(c3.name, "C3");
        assert_eq!(c3.volume_per_ton, 580.0);
        assert_eq!(c3.max_weight, 23.0);
        assert_eq!(c3.profit_per_ton, 350.0);
        assert_eq!(manifest.balance_penalty, 50.0);
        assert_eq!(manifest.min_draw, 0.001);
    }

    #[test]
    fn rejects_non_positive_capacity() {
        let mut manifest = Manifest::reference();
        manifest.compartments[1].volume_capacity = 0.0;
        assert_eq!(
            manifest.validate(),
            Err(ManifestError::InvalidCompartment {
                name: "C".into(),
                field: "volume_capacity",
                value: 0.0
            })
        );
    }

    #[test]
    fn rejects_bad_cargo_parameters() {
        let mut manifest = Manifest::reference();
        manifest.cargo_types[3].volume_per_ton = -390.0;
        assert!(matches!(
            manifest.validate(),
            Err(ManifestError::InvalidCargoType {
                field: "volume_per_ton",
                ..
            })
        ));

        let mut manifest = Manifest::reference();
        manifest.cargo_types[0].profit_per_ton = f64::INFINITY;
        assert!(matches!(
            manifest.validate(),
            Err(ManifestError::InvalidCargoType {
                field: "profit_per_ton",
                ..
            })
        ));
    }

    #[test]
    fn negative_profit_is_allowed() {
        let mut manifest = Manifest::reference();
        manifest.cargo_types[0].profit_per_ton = -10.0;
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn rejects_objective_parameters() {
        let manifest = Manifest {
            balance_penalty: -1.0,
            ..Manifest::reference()
        };
        assert_eq!(
            manifest.validate(),
            Err(ManifestError::InvalidBalancePenalty(-1.0))
        );
        let manifest = Manifest {
            min_draw: 0.0,
            ..Manifest::reference()
        };
        assert_eq!(manifest.validate(), Err(ManifestError::InvalidMinDraw(0.0)));
    }

    #[test]
    fn objective_parameters_default_when_deserialized() {
        let manifest: Manifest = serde_json::from_str(
            r#"{
                "compartments": [{"name": "A", "weight_capacity": 5, "volume_capacity": 100}],
                "cargo_types": [{"name": "X", "volume_per_ton": 2, "max_weight": 3, "profit_per_ton": 1}]
            }"#,
        )
        .unwrap();
        assert_eq!(manifest.balance_penalty, DEFAULT_BALANCE_PENALTY);
        assert_eq!(manifest.min_draw, DEFAULT_MIN_DRAW);
        assert!(manifest.validate().is_ok());
    }
}
