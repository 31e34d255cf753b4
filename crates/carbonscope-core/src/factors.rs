//! Emission Factor Table
//!
//! Coefficients converting activity quantities into kg CO2-equivalent.
//! A factor set is a plain immutable value that gets handed to the
//! calculator, so alternative sets (another country, another reporting
//! year) can be loaded from JSON without touching code.
//!
//! ## File format
//!
//! ```json
//! {
//!   "gas": 1.884,
//!   "fuel": { "gasoline": 2.31, "diesel": 2.67, "electric": 0.0, "hybrid": 1.15 },
//!   "electricity": { "grey": 0.404, "green": 0.0 },
//!   "transport": { "car": 0.21, "train": 0.041, "plane": 0.255 }
//! }
//! ```
//!
//! Any section left out keeps the standard Dutch value. The `fuel` and
//! `consumption` sections must list all four fuel types when present.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{CarbonError, Result};

/// Fuel used by business vehicles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    /// Petrol (`benzine`)
    #[default]
    Gasoline,
    /// Diesel
    Diesel,
    /// Battery electric, no direct emissions
    Electric,
    /// Petrol hybrid (`hybride`)
    Hybrid,
}

impl FuelType {
    /// All fuel types in display order
    pub const ALL: [FuelType; 4] = [
        FuelType::Gasoline,
        FuelType::Diesel,
        FuelType::Electric,
        FuelType::Hybrid,
    ];

    /// Parse a fuel name, accepting English and Dutch spellings.
    ///
    /// Returns `None` for anything unrecognised.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "gasoline" | "petrol" | "benzine" => Some(FuelType::Gasoline),
            "diesel" => Some(FuelType::Diesel),
            "electric" | "elektrisch" => Some(FuelType::Electric),
            "hybrid" | "hybride" => Some(FuelType::Hybrid),
            _ => None,
        }
    }

    /// Lowercase English name
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Gasoline => "gasoline",
            FuelType::Diesel => "diesel",
            FuelType::Electric => "electric",
            FuelType::Hybrid => "hybrid",
        }
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per fuel type.
///
/// Used both for kg CO2e per litre and for litres per 100 km.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerFuel {
    /// Gasoline value
    pub gasoline: f64,
    /// Diesel value
    pub diesel: f64,
    /// Electric value, always zero
    pub electric: f64,
    /// Hybrid value
    pub hybrid: f64,
}

impl PerFuel {
    /// Look up the value for a fuel type
    pub fn get(&self, fuel: FuelType) -> f64 {
        match fuel {
            FuelType::Gasoline => self.gasoline,
            FuelType::Diesel => self.diesel,
            FuelType::Electric => self.electric,
            FuelType::Hybrid => self.hybrid,
        }
    }
}

/// kg CO2e per kWh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElectricityFactors {
    /// Grid mix
    pub grey: f64,
    /// Certified renewable supply, always zero
    pub green: f64,
}

/// kg CO2e per passenger-km
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportFactors {
    /// Average passenger car
    pub car: f64,
    /// Rail
    pub train: f64,
    /// Short-haul flight
    pub plane: f64,
}

/// kg CO2e per kg of waste
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WasteFactors {
    /// Residual waste
    pub general: f64,
    /// Paper
    pub paper: f64,
    /// Plastic
    pub plastic: f64,
}

/// Complete emission factor set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmissionFactors {
    /// kg CO2e per m³ natural gas
    pub gas: f64,
    /// kg CO2e per litre of fuel
    pub fuel: PerFuel,
    /// Assumed consumption in litres per 100 km
    pub consumption: PerFuel,
    /// Electricity per kWh
    pub electricity: ElectricityFactors,
    /// kg CO2e per currency unit of procurement spend
    pub purchased_goods: f64,
    /// Business travel per km
    pub transport: TransportFactors,
    /// Waste per kg
    pub waste: WasteFactors,
}

/// Largest accepted coefficient.
///
/// Together with [`crate::input::MAX_QUANTITY`] this keeps every product
/// in the calculator far inside the `f64` range.
pub const MAX_FACTOR: f64 = 1e6;

static STANDARD: EmissionFactors = EmissionFactors::netherlands_2024();

impl Default for ElectricityFactors {
    fn default() -> Self {
        STANDARD.electricity
    }
}

impl Default for TransportFactors {
    fn default() -> Self {
        STANDARD.transport
    }
}

impl Default for WasteFactors {
    fn default() -> Self {
        STANDARD.waste
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        STANDARD
    }
}

impl EmissionFactors {
    /// Dutch factors for the 2024 energy mix
    pub const fn netherlands_2024() -> Self {
        Self {
            gas: 1.884,
            fuel: PerFuel {
                gasoline: 2.31,
                diesel: 2.67,
                electric: 0.0,
                // roughly half of gasoline
                hybrid: 1.15,
            },
            consumption: PerFuel {
                gasoline: 7.0,
                diesel: 7.0,
                electric: 0.0,
                hybrid: 3.5,
            },
            electricity: ElectricityFactors {
                grey: 0.404,
                green: 0.0,
            },
            purchased_goods: 0.5,
            transport: TransportFactors {
                car: 0.21,
                train: 0.041,
                // short haul
                plane: 0.255,
            },
            waste: WasteFactors {
                general: 0.5,
                paper: 0.9,
                plastic: 1.8,
            },
        }
    }

    /// Process-wide standard factor set
    pub fn standard() -> &'static EmissionFactors {
        &STANDARD
    }

    /// Parse and validate a factor set from JSON
    pub fn from_json(content: &str) -> Result<Self> {
        let factors: EmissionFactors = serde_json::from_str(content)?;
        factors.validate()?;
        Ok(factors)
    }

    /// Load and validate a factor set from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| CarbonError::Io(format!("{}: {}", path.display(), e)))?;
        let factors = Self::from_json(&content)?;
        tracing::debug!("Loaded emission factors from {}", path.display());
        Ok(factors)
    }

    /// Every coefficient with a dotted name, for validation and display
    pub fn coefficients(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("gas", self.gas),
            ("fuel.gasoline", self.fuel.gasoline),
            ("fuel.diesel", self.fuel.diesel),
            ("fuel.electric", self.fuel.electric),
            ("fuel.hybrid", self.fuel.hybrid),
            ("consumption.gasoline", self.consumption.gasoline),
            ("consumption.diesel", self.consumption.diesel),
            ("consumption.electric", self.consumption.electric),
            ("consumption.hybrid", self.consumption.hybrid),
            ("electricity.grey", self.electricity.grey),
            ("electricity.green", self.electricity.green),
            ("purchasedGoods", self.purchased_goods),
            ("transport.car", self.transport.car),
            ("transport.train", self.transport.train),
            ("transport.plane", self.transport.plane),
            ("waste.general", self.waste.general),
            ("waste.paper", self.waste.paper),
            ("waste.plastic", self.waste.plastic),
        ]
    }

    /// Check that the set is usable.
    ///
    /// All coefficients must be finite, non-negative and at most
    /// [`MAX_FACTOR`]. Green electricity
    /// and electric vehicles carry no direct emissions, so their entries
    /// must be exactly zero.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.coefficients() {
            if !value.is_finite() || !(0.0..=MAX_FACTOR).contains(&value) {
                return Err(CarbonError::InvalidFactor {
                    name: name.to_string(),
                    value,
                });
            }
        }

        let must_be_zero = [
            ("electricity.green", self.electricity.green),
            ("fuel.electric", self.fuel.electric),
            ("consumption.electric", self.consumption.electric),
        ];
        for (name, value) in must_be_zero {
            if value != 0.0 {
                return Err(CarbonError::InvalidFactor {
                    name: name.to_string(),
                    value,
                });
            }
        }

        Ok(())
    }

    /// kg CO2e per kWh for grey or green supply
    pub fn electricity_per_kwh(&self, green: bool) -> f64 {
        if green {
            self.electricity.green
        } else {
            self.electricity.grey
        }
    }
}
