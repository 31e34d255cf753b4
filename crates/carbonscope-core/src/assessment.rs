//! Assessment
//!
//! Everything a host needs to present one month of activity: the breakdown,
//! the recommendation, the benchmark comparison and the green electricity
//! savings potential.

use serde::{Deserialize, Serialize};

use crate::advisor::{recommend, Advice, Language};
use crate::benchmark::{green_energy_savings, BenchmarkComparison};
use crate::calculator::{EmissionBreakdown, EmissionCalculator};
use crate::factors::EmissionFactors;
use crate::input::ActivityInput;

/// Result of assessing one activity record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Scope 1/2/3 emissions in tonnes
    pub breakdown: EmissionBreakdown,
    /// Category the recommendation targets
    pub advice: Advice,
    /// `advice` rendered in the requested language
    pub advice_text: String,
    /// Comparison against the configured average
    pub benchmark: BenchmarkComparison,
    /// Tonnes per month saved by switching to green electricity
    pub green_energy_savings: f64,
}

impl Assessment {
    /// Assess `input` with the given factors, benchmark and language
    pub fn evaluate(
        input: &ActivityInput,
        factors: &EmissionFactors,
        benchmark_tonnes: f64,
        language: Language,
    ) -> Self {
        let breakdown = EmissionCalculator::new(factors).calculate(input);
        let advice = recommend(&breakdown);
        let benchmark = BenchmarkComparison::compare(breakdown.total, benchmark_tonnes);
        let savings = green_energy_savings(input, factors);

        tracing::debug!(
            total = breakdown.total,
            ?advice,
            position = ?benchmark.position,
            "Assessed activity input"
        );

        Self {
            breakdown,
            advice,
            advice_text: advice.message(language).to_string(),
            benchmark,
            green_energy_savings: savings,
        }
    }
}
