//! Display formatting for CO2 quantities

/// Unit suffix used by [`format_tonnes`]
pub const TONNES_CO2E: &str = "t CO2e";

/// Format a CO2 quantity with exactly two decimals.
///
/// Always uses `.` as decimal separator. Negative zero prints as `0.00`.
pub fn format_co2(value: f64) -> String {
    // -0.0 == 0.0, so this also normalises the sign
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.2}", value)
}

/// Format a quantity in tonnes with its unit, e.g. `3.80 t CO2e`
pub fn format_tonnes(value: f64) -> String {
    format!("{} {}", format_co2(value), TONNES_CO2E)
}
