//! # CarbonScope Core Library
//!
//! Greenhouse-gas footprint estimation for small businesses.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Emission factor sets (standard Dutch factors, loadable from JSON)
//! - Lenient parsing of monthly activity data as entered in forms
//! - Scope 1/2/3 CO2-equivalent breakdowns in metric tonnes
//! - A rule-based recommendation targeting the largest category
//! - Benchmark comparison and fixed two-decimal display formatting
//!
//! Calculation, advice and formatting are pure and never fail. Only file
//! loading and the opt-in input validation return errors.
//!
//! ## Example
//!
//! ```rust
//! use carbonscope_core::prelude::*;
//!
//! let input = ActivityInput::from_json(r#"{"gasUsage": "850", "fuelType": "benzine"}"#)?;
//! let breakdown = calculate(&input);
//!
//! assert_eq!(format_co2(breakdown.scope1.gas), "1.60");
//! println!("{}", advise(&breakdown));
//! # Ok::<(), carbonscope_core::CarbonError>(())
//! ```

pub mod advisor;
pub mod assessment;
pub mod benchmark;
pub mod calculator;
pub mod config;
pub mod error;
pub mod factors;
pub mod format;
pub mod input;
pub mod units;
pub mod validation;

pub use error::{CarbonError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::advisor::{advise, recommend, Advice, Language, Scope};
    pub use crate::assessment::Assessment;
    pub use crate::benchmark::{green_energy_savings, BenchmarkComparison, Position};
    pub use crate::calculator::{calculate, EmissionBreakdown, EmissionCalculator};
    pub use crate::config::Settings;
    pub use crate::factors::{EmissionFactors, FuelType};
    pub use crate::format::{format_co2, format_tonnes};
    pub use crate::input::{ActivityInput, BusinessTravel, WasteInput};
    pub use crate::validation::{validate, ValidationReport};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
