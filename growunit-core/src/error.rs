use crate::validation::FieldViolation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrowUnitError {
    /// The payload does not supply all eleven fields with the right types.
    #[error("Malformed grow unit: {0}")]
    MalformedGrowUnit(String),

    #[error("Grow unit {id} failed validation: {}", format_violations(.violations))]
    InvalidGrowUnit {
        id: u64,
        violations: Vec<FieldViolation>,
    },

    #[error("Grow unit id {0} appears more than once")]
    DuplicateId(u64),

    #[error("Failed to encode grow unit: {0}")]
    Encoding(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Unsupported grow unit file format: '{0}'")]
    UnsupportedFormat(String),

    #[error("Failed to write CSV summary '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
