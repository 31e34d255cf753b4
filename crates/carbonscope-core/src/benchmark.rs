//! Benchmarks
//!
//! Puts a breakdown in context: how it compares to an average small
//! business, and how much switching to green electricity would save.

use serde::{Deserialize, Serialize};

use crate::factors::EmissionFactors;
use crate::input::ActivityInput;
use crate::units::kg_to_tonnes;

/// Average monthly footprint of a Dutch SME, in tonnes CO2e
pub const AVERAGE_SME_TONNES_PER_MONTH: f64 = 4.2;

/// Where a footprint sits relative to the benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Strictly greater than the average
    Above,
    /// Exactly the average
    Equal,
    /// Strictly less than the average
    Below,
}

/// Comparison of a monthly total against a benchmark average
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    /// Footprint being compared, in tonnes
    pub total: f64,
    /// Benchmark average, in tonnes
    pub average: f64,
    /// `total - average`; negative when below
    pub difference: f64,
    /// Sign of `difference`
    pub position: Position,
}

impl BenchmarkComparison {
    /// Compare `total` against `average`
    pub fn compare(total: f64, average: f64) -> Self {
        let position = if total > average {
            Position::Above
        } else if total < average {
            Position::Below
        } else {
            Position::Equal
        };
        Self {
            total,
            average,
            difference: total - average,
            position,
        }
    }

    /// Distance to the average regardless of direction
    pub fn magnitude(&self) -> f64 {
        self.difference.abs()
    }

    /// `total` as a percentage of `average`, `None` when the average is zero
    pub fn percent_of_average(&self) -> Option<f64> {
        (self.average != 0.0).then(|| self.total / self.average * 100.0)
    }
}

/// Tonnes per month saved by buying the same electricity as green energy.
///
/// Zero when the input already uses green electricity.
pub fn green_energy_savings(input: &ActivityInput, factors: &EmissionFactors) -> f64 {
    if input.is_green_energy {
        return 0.0;
    }
    let grey = factors.electricity_per_kwh(false);
    let green = factors.electricity_per_kwh(true);
    kg_to_tonnes(input.electricity_usage_kwh * (grey - green))
}
