//! Activity input record
//!
//! Monthly activity data as entered by the user. Form layers deliver every
//! field as text, often empty, so deserialization is deliberately lenient:
//! numbers, numeric strings, empty strings, `null` and missing fields are
//! all accepted, and anything that isn't a number becomes 0.
//!
//! Field names follow the camelCase record layout (`gasUsageM3`,
//! `vehicleKm`, ...). The shorter form names (`gasUsage`,
//! `electricityUsage`, `greenEnergy`, `purchasedGoods`, `car`, `general`,
//! ...) are accepted as aliases.
//!
//! Quantities whose magnitude exceeds [`MAX_QUANTITY`] are treated as
//! unparseable and become 0, which keeps every product and sum in the
//! calculator finite. A JSON number literal outside the `f64` range (e.g.
//! `1e999`) is rejected by the JSON parser itself before any field is
//! looked at, so such a document fails as a whole; the same value sent as
//! a string (`"1e999"`) becomes 0.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::factors::FuelType;

/// Largest accepted magnitude for a single quantity
pub const MAX_QUANTITY: f64 = 1e12;

/// Business travel distances per month
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessTravel {
    /// Kilometres by car
    #[serde(alias = "car", deserialize_with = "lenient_quantity")]
    pub car_km: f64,
    /// Kilometres by train
    #[serde(alias = "train", deserialize_with = "lenient_quantity")]
    pub train_km: f64,
    /// Kilometres by plane
    #[serde(alias = "plane", deserialize_with = "lenient_quantity")]
    pub plane_km: f64,
}

/// Waste produced per month
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WasteInput {
    /// Residual waste in kg
    #[serde(alias = "general", deserialize_with = "lenient_quantity")]
    pub general_kg: f64,
    /// Paper in kg
    #[serde(alias = "paper", deserialize_with = "lenient_quantity")]
    pub paper_kg: f64,
    /// Plastic in kg
    #[serde(alias = "plastic", deserialize_with = "lenient_quantity")]
    pub plastic_kg: f64,
}

/// Raw monthly activity data for one business
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivityInput {
    /// Natural gas in m³
    #[serde(alias = "gasUsage", deserialize_with = "lenient_quantity")]
    pub gas_usage_m3: f64,

    /// Fuel used by the business vehicles
    #[serde(deserialize_with = "lenient_fuel")]
    pub fuel_type: FuelType,

    /// Kilometres driven with business vehicles
    #[serde(deserialize_with = "lenient_quantity")]
    pub vehicle_km: f64,

    /// Electricity in kWh
    #[serde(alias = "electricityUsage", deserialize_with = "lenient_quantity")]
    pub electricity_usage_kwh: f64,

    /// Electricity is bought as certified green energy
    #[serde(alias = "greenEnergy", deserialize_with = "lenient_flag")]
    pub is_green_energy: bool,

    /// Procurement spend in currency units
    #[serde(alias = "purchasedGoods", deserialize_with = "lenient_quantity")]
    pub purchased_goods_value: f64,

    /// Business travel distances
    #[serde(deserialize_with = "lenient_group")]
    pub business_travel: BusinessTravel,

    /// Waste streams
    #[serde(deserialize_with = "lenient_group")]
    pub waste: WasteInput,
}

impl ActivityInput {
    /// Parse an activity record from JSON.
    ///
    /// Only a structurally broken document (not an object, bad syntax) is an
    /// error; individual field values never are.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Every numeric field with its dotted name, in form order
    pub fn quantities(&self) -> [(&'static str, f64); 10] {
        [
            ("gasUsageM3", self.gas_usage_m3),
            ("vehicleKm", self.vehicle_km),
            ("electricityUsageKwh", self.electricity_usage_kwh),
            ("purchasedGoodsValue", self.purchased_goods_value),
            ("businessTravel.carKm", self.business_travel.car_km),
            ("businessTravel.trainKm", self.business_travel.train_km),
            ("businessTravel.planeKm", self.business_travel.plane_km),
            ("waste.generalKg", self.waste.general_kg),
            ("waste.paperKg", self.waste.paper_kg),
            ("waste.plasticKg", self.waste.plastic_kg),
        ]
    }

    /// Copy of the record with every quantity passed through
    /// [`bounded_quantity`]
    pub fn bounded(&self) -> Self {
        let travel = &self.business_travel;
        let waste = &self.waste;
        Self {
            gas_usage_m3: bounded_quantity(self.gas_usage_m3),
            fuel_type: self.fuel_type,
            vehicle_km: bounded_quantity(self.vehicle_km),
            electricity_usage_kwh: bounded_quantity(self.electricity_usage_kwh),
            is_green_energy: self.is_green_energy,
            purchased_goods_value: bounded_quantity(self.purchased_goods_value),
            business_travel: BusinessTravel {
                car_km: bounded_quantity(travel.car_km),
                train_km: bounded_quantity(travel.train_km),
                plane_km: bounded_quantity(travel.plane_km),
            },
            waste: WasteInput {
                general_kg: bounded_quantity(waste.general_kg),
                paper_kg: bounded_quantity(waste.paper_kg),
                plastic_kg: bounded_quantity(waste.plastic_kg),
            },
        }
    }
}

/// Replace non-finite values and values beyond [`MAX_QUANTITY`] with 0
pub fn bounded_quantity(value: f64) -> f64 {
    if value.is_finite() && value.abs() <= MAX_QUANTITY {
        value
    } else {
        0.0
    }
}

/// Coerce form text to a number the way a browser `parseFloat` does.
///
/// Leading and trailing whitespace is ignored and the longest leading decimal
/// prefix is used, so `"12abc"` gives 12. Text without a numeric prefix, and
/// results that are non-finite or beyond [`MAX_QUANTITY`], give 0.
pub fn parse_quantity(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return 0.0;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().map(bounded_quantity).unwrap_or(0.0)
}

fn coerce_quantity(value: Option<Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().map(bounded_quantity).unwrap_or(0.0),
        Some(Value::String(s)) => parse_quantity(&s),
        _ => 0.0,
    }
}

fn lenient_quantity<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(coerce_quantity(raw))
}

/// Nested groups (`businessTravel`, `waste`) fall back to all zeros when
/// they are `null`, a string or anything else that isn't an object.
fn lenient_group<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + serde::de::DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
        _ => T::default(),
    })
}

fn lenient_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => matches!(
            s.trim().to_lowercase().as_str(),
            "true" | "on" | "yes" | "1" | "ja"
        ),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        _ => false,
    })
}

fn lenient_fuel<'de, D>(deserializer: D) -> std::result::Result<FuelType, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => FuelType::parse(&s).unwrap_or_else(|| {
            tracing::warn!("Unknown fuel type '{}', assuming {}", s, FuelType::default());
            FuelType::default()
        }),
        Some(Value::Null) | None => FuelType::default(),
        Some(other) => {
            tracing::warn!("Unexpected fuel type value {}, assuming {}", other, FuelType::default());
            FuelType::default()
        }
    })
}
