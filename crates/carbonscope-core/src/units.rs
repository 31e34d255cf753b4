//! Unit Conversion Functions
//!
//! Conversions used while turning activity data into CO2-equivalent mass:
//! - Mass: kg → metric tonnes
//! - Fuel: distance driven + consumption rate (L/100 km) → litres burned

/// Kilograms per metric tonne
pub const KG_PER_TONNE: f64 = 1000.0;

/// Convert kilograms to metric tonnes
///
/// Every reported breakdown value goes through this one function so that
/// sub-values and totals are scaled identically.
pub fn kg_to_tonnes(kg: f64) -> f64 {
    kg / KG_PER_TONNE
}

/// Litres of fuel burned over a distance
///
/// # Arguments
/// * `km` - Distance driven in kilometres
/// * `litres_per_100km` - Assumed consumption rate (0.0 for electric)
///
/// # Returns
/// Litres of fuel consumed
pub fn litres_burned(km: f64, litres_per_100km: f64) -> f64 {
    km * (litres_per_100km / 100.0)
}
