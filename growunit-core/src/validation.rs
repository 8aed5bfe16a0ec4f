//! Opt-in field-level checks for a decoded `GrowUnit`.
//!
//! Decoding never calls into this module. Only single-field constraints are
//! checked here; combinations such as an active intake without an outtake fan
//! are legal.

use crate::error::GrowUnitError;
use growunit_schemas::GrowUnit;
use std::fmt;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    /// Wire name of the offending field.
    pub field: &'static str,
    pub reason: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

fn check_positive(field: &'static str, value: f64, out: &mut Vec<FieldViolation>) {
    if !value.is_finite() || value <= 0.0 {
        out.push(FieldViolation {
            field,
            reason: format!("must be a positive number, got {value}"),
        });
    }
}

fn check_non_negative(field: &'static str, value: f64, out: &mut Vec<FieldViolation>) {
    if !value.is_finite() || value < 0.0 {
        out.push(FieldViolation {
            field,
            reason: format!("must be zero or a positive number, got {value}"),
        });
    }
}

/// Collects every field-level violation of `unit`, in field order.
pub fn violations(unit: &GrowUnit) -> Vec<FieldViolation> {
    let mut out = Vec::new();

    if unit.name.trim().is_empty() {
        out.push(FieldViolation {
            field: "Name",
            reason: "must not be blank".to_string(),
        });
    }
    check_positive("Width", unit.width, &mut out);
    check_positive("Height", unit.height, &mut out);
    check_positive("Depth", unit.depth, &mut out);
    check_non_negative(
        "OuttakeFanThroughputInM3H",
        unit.outtake_fan_throughput_in_m3h,
        &mut out,
    );
    check_non_negative("WattageLamp", unit.wattage_lamp, &mut out);

    out
}

/// Fails with `InvalidGrowUnit` carrying all violations found.
pub fn validate(unit: &GrowUnit) -> Result<(), GrowUnitError> {
    let violations = violations(unit);
    if violations.is_empty() {
        return Ok(());
    }

    warn!(id = unit.id, count = violations.len(), "grow unit failed validation");
    Err(GrowUnitError::InvalidGrowUnit {
        id: unit.id,
        violations,
    })
}
