use crate::grow_unit::GrowUnit;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowUnitFile {
    pub schema_version: String,
    pub grow_units: Vec<GrowUnit>,
}
