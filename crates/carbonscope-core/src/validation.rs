//! Opt-in input validation.
//!
//! The calculator accepts negative quantities and simply produces negative
//! emissions. Hosts that want to refuse such input validate at the boundary
//! with this module before calling the calculator.

use serde::{Deserialize, Serialize};

use crate::error::{CarbonError, Result};
use crate::input::ActivityInput;

/// One offending input field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputIssue {
    /// Dotted field name, e.g. `businessTravel.carKm`
    pub field: String,
    /// The negative value found
    pub value: f64,
}

impl From<InputIssue> for CarbonError {
    fn from(issue: InputIssue) -> Self {
        CarbonError::NegativeInput {
            field: issue.field,
            value: issue.value,
        }
    }
}

/// Validation result for one activity record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Negative fields, in form order
    pub issues: Vec<InputIssue>,
}

impl ValidationReport {
    /// Returns true if no field was rejected
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Convert into a `Result`, keeping the first issue as the error
    pub fn into_result(self) -> Result<()> {
        match self.issues.into_iter().next() {
            Some(issue) => Err(issue.into()),
            None => Ok(()),
        }
    }
}

/// Collect every negative quantity in the record
pub fn validate(input: &ActivityInput) -> ValidationReport {
    let issues = input
        .quantities()
        .into_iter()
        .filter(|(_, value)| *value < 0.0)
        .map(|(field, value)| InputIssue {
            field: field.to_string(),
            value,
        })
        .collect();
    ValidationReport { issues }
}

impl ActivityInput {
    /// Reject the record if any quantity is negative
    pub fn check(&self) -> Result<()> {
        validate(self).into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::BusinessTravel;

    #[test]
    fn test_default_input_is_valid() {
        assert!(validate(&ActivityInput::default()).is_valid());
        assert!(ActivityInput::default().check().is_ok());
    }

    #[test]
    fn test_negative_fields_reported_in_order() {
        let input = ActivityInput {
            vehicle_km: -5.0,
            business_travel: BusinessTravel {
                plane_km: -100.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let report = validate(&input);
        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.issues[0].field, "vehicleKm");
        assert_eq!(report.issues[1].field, "businessTravel.planeKm");

        assert_eq!(
            input.check(),
            Err(CarbonError::NegativeInput {
                field: "vehicleKm".to_string(),
                value: -5.0
            })
        );
    }
}
