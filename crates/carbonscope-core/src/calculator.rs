//! Breakdown Calculator
//!
//! Turns an [`ActivityInput`] into a Scope 1/2/3 [`EmissionBreakdown`] in
//! metric tonnes CO2e per month.
//!
//! Every category is accumulated in kg and converted to tonnes with
//! [`kg_to_tonnes`] at the very end, the grand total included, so that
//! sub-values add up to their parent totals.
//!
//! The calculator is total: it accepts any input, never fails and applies no
//! clamping. Quantities that are non-finite or larger in magnitude than
//! [`crate::input::MAX_QUANTITY`] count as 0, so with a validated factor set
//! every reported value is finite. Negative quantities produce negative emissions; callers that
//! want to reject them run [`crate::validation::validate`] first.

use serde::{Deserialize, Serialize};

use crate::factors::EmissionFactors;
use crate::input::ActivityInput;
use crate::units::{kg_to_tonnes, litres_burned};

/// Direct emissions from burning fuel on site and in owned vehicles
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scope1 {
    /// Natural gas combustion
    pub gas: f64,
    /// Fuel burned by business vehicles
    pub vehicles: f64,
    /// `gas + vehicles`
    pub total: f64,
}

/// Indirect emissions from purchased electricity
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scope2 {
    /// Purchased electricity
    pub electricity: f64,
    /// Equal to `electricity`
    pub total: f64,
}

/// Other indirect emissions in the value chain
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scope3 {
    /// Procurement spend
    pub purchased_goods: f64,
    /// Car, train and plane travel
    pub business_travel: f64,
    /// Waste streams
    pub waste: f64,
    /// Sum of the three categories
    pub total: f64,
}

/// Monthly emissions in metric tonnes CO2e
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionBreakdown {
    /// Direct emissions
    pub scope1: Scope1,
    /// Purchased energy
    pub scope2: Scope2,
    /// Value chain
    pub scope3: Scope3,
    /// Sum of the three scope totals
    pub total: f64,
}

impl EmissionBreakdown {
    /// Scope totals in scope order
    pub fn scope_totals(&self) -> [f64; 3] {
        [self.scope1.total, self.scope2.total, self.scope3.total]
    }

    /// True when nothing was emitted
    pub fn is_zero(&self) -> bool {
        self.total == 0.0 && self.scope_totals().iter().all(|t| *t == 0.0)
    }
}

/// Calculator bound to one emission factor set
#[derive(Debug, Clone, Copy)]
pub struct EmissionCalculator<'a> {
    factors: &'a EmissionFactors,
}

impl Default for EmissionCalculator<'static> {
    fn default() -> Self {
        Self::new(EmissionFactors::standard())
    }
}

impl<'a> EmissionCalculator<'a> {
    /// Create a calculator using the given factors
    pub fn new(factors: &'a EmissionFactors) -> Self {
        Self { factors }
    }

    /// Factors this calculator applies
    pub fn factors(&self) -> &'a EmissionFactors {
        self.factors
    }

    /// Compute the full breakdown for one month of activity
    pub fn calculate(&self, input: &ActivityInput) -> EmissionBreakdown {
        let f = self.factors;
        let input = input.bounded();

        // Scope 1
        let gas_kg = input.gas_usage_m3 * f.gas;
        let vehicles_kg = litres_burned(input.vehicle_km, f.consumption.get(input.fuel_type))
            * f.fuel.get(input.fuel_type);
        let scope1_kg = gas_kg + vehicles_kg;

        // Scope 2
        let electricity_kg =
            input.electricity_usage_kwh * f.electricity_per_kwh(input.is_green_energy);
        let scope2_kg = electricity_kg;

        // Scope 3
        let goods_kg = input.purchased_goods_value * f.purchased_goods;
        let travel = &input.business_travel;
        let travel_kg = travel.car_km * f.transport.car
            + travel.train_km * f.transport.train
            + travel.plane_km * f.transport.plane;
        let waste = &input.waste;
        let waste_kg = waste.general_kg * f.waste.general
            + waste.paper_kg * f.waste.paper
            + waste.plastic_kg * f.waste.plastic;
        let scope3_kg = goods_kg + travel_kg + waste_kg;

        let total_kg = scope1_kg + scope2_kg + scope3_kg;

        tracing::trace!(
            scope1_kg,
            scope2_kg,
            scope3_kg,
            total_kg,
            "Calculated emission breakdown"
        );

        EmissionBreakdown {
            scope1: Scope1 {
                gas: kg_to_tonnes(gas_kg),
                vehicles: kg_to_tonnes(vehicles_kg),
                total: kg_to_tonnes(scope1_kg),
            },
            scope2: Scope2 {
                electricity: kg_to_tonnes(electricity_kg),
                total: kg_to_tonnes(scope2_kg),
            },
            scope3: Scope3 {
                purchased_goods: kg_to_tonnes(goods_kg),
                business_travel: kg_to_tonnes(travel_kg),
                waste: kg_to_tonnes(waste_kg),
                total: kg_to_tonnes(scope3_kg),
            },
            total: kg_to_tonnes(total_kg),
        }
    }
}

/// Compute a breakdown with the standard factor set
pub fn calculate(input: &ActivityInput) -> EmissionBreakdown {
    EmissionCalculator::default().calculate(input)
}
