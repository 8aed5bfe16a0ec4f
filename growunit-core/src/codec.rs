//! Conversion between `GrowUnit` values and their JSON and YAML wire forms.
//!
//! Decoding is all-or-nothing: any missing or mistyped field rejects the whole
//! payload with [`GrowUnitError::MalformedGrowUnit`]. Keys outside the eleven
//! wire fields are ignored.

use crate::error::GrowUnitError;
use growunit_schemas::{GrowUnit, GrowUnitFile};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    Json,
    Yaml,
}

impl WireFormat {
    /// Picks the format from a file extension (`json`, `yaml` or `yml`).
    pub fn from_path(path: &Path) -> Result<Self, GrowUnitError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(GrowUnitError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

fn malformed(err: impl std::fmt::Display) -> GrowUnitError {
    debug!(error = %err, "rejected grow unit payload");
    GrowUnitError::MalformedGrowUnit(err.to_string())
}

fn decode_json<T: DeserializeOwned>(text: &str) -> Result<T, GrowUnitError> {
    serde_json::from_str(text).map_err(malformed)
}

fn decode_yaml<T: DeserializeOwned>(text: &str) -> Result<T, GrowUnitError> {
    serde_yaml::from_str(text).map_err(malformed)
}

pub fn from_json_str(text: &str) -> Result<GrowUnit, GrowUnitError> {
    decode_json(text)
}

pub fn from_json_slice(bytes: &[u8]) -> Result<GrowUnit, GrowUnitError> {
    serde_json::from_slice(bytes).map_err(malformed)
}

pub fn from_json_value(value: serde_json::Value) -> Result<GrowUnit, GrowUnitError> {
    serde_json::from_value(value).map_err(malformed)
}

pub fn from_yaml_str(text: &str) -> Result<GrowUnit, GrowUnitError> {
    decode_yaml(text)
}

/// Decodes a JSON array of grow units, as returned by a list endpoint.
///
/// One malformed element rejects the whole list.
pub fn list_from_json_str(text: &str) -> Result<Vec<GrowUnit>, GrowUnitError> {
    decode_json(text)
}

/// JSON has no representation for NaN or infinities; serde_json would write
/// them as `null`, which the decoder then rejects.
fn ensure_json_encodable(unit: &GrowUnit) -> Result<(), GrowUnitError> {
    let reals = [
        ("Width", unit.width),
        ("Height", unit.height),
        ("Depth", unit.depth),
        ("OuttakeFanThroughputInM3H", unit.outtake_fan_throughput_in_m3h),
        ("WattageLamp", unit.wattage_lamp),
    ];
    match reals.iter().find(|(_, value)| !value.is_finite()) {
        Some((field, value)) => Err(GrowUnitError::Encoding(format!(
            "{field} of grow unit {} is {value}, which JSON cannot represent",
            unit.id
        ))),
        None => Ok(()),
    }
}

pub fn to_json_string(unit: &GrowUnit) -> Result<String, GrowUnitError> {
    ensure_json_encodable(unit)?;
    serde_json::to_string(unit).map_err(|e| GrowUnitError::Encoding(e.to_string()))
}

pub fn to_json_string_pretty(unit: &GrowUnit) -> Result<String, GrowUnitError> {
    ensure_json_encodable(unit)?;
    serde_json::to_string_pretty(unit).map_err(|e| GrowUnitError::Encoding(e.to_string()))
}

pub fn to_json_value(unit: &GrowUnit) -> Result<serde_json::Value, GrowUnitError> {
    ensure_json_encodable(unit)?;
    serde_json::to_value(unit).map_err(|e| GrowUnitError::Encoding(e.to_string()))
}

pub fn to_yaml_string(unit: &GrowUnit) -> Result<String, GrowUnitError> {
    serde_yaml::to_string(unit).map_err(|e| GrowUnitError::Encoding(e.to_string()))
}

/// Encodes a single unit in the requested wire format.
pub fn encode(format: WireFormat, unit: &GrowUnit) -> Result<String, GrowUnitError> {
    match format {
        WireFormat::Json => to_json_string_pretty(unit),
        WireFormat::Yaml => to_yaml_string(unit),
    }
}

pub fn file_from_str(format: WireFormat, text: &str) -> Result<GrowUnitFile, GrowUnitError> {
    match format {
        WireFormat::Json => decode_json(text),
        WireFormat::Yaml => decode_yaml(text),
    }
}

pub fn file_to_string(format: WireFormat, file: &GrowUnitFile) -> Result<String, GrowUnitError> {
    let encoded = match format {
        WireFormat::Json => {
            for unit in &file.grow_units {
                ensure_json_encodable(unit)?;
            }
            serde_json::to_string_pretty(file).map_err(|e| e.to_string())
        }
        WireFormat::Yaml => serde_yaml::to_string(file).map_err(|e| e.to_string()),
    };
    encoded.map_err(GrowUnitError::Encoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_follows_extension() {
        assert_eq!(WireFormat::from_path(Path::new("units.json")).unwrap(), WireFormat::Json);
        assert_eq!(WireFormat::from_path(Path::new("units.yaml")).unwrap(), WireFormat::Yaml);
        assert_eq!(WireFormat::from_path(Path::new("a/b.yml")).unwrap(), WireFormat::Yaml);
        assert!(matches!(
            WireFormat::from_path(Path::new("units.toml")),
            Err(GrowUnitError::UnsupportedFormat(_))
        ));
        assert!(WireFormat::from_path(Path::new("README")).is_err());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let unit = from_json_value(json!({
            "Id": 3,
            "Name": "Balcony box",
            "Width": 50,
            "Height": 90,
            "Depth": 40,
            "CarbonFilter": false,
            "ActiveIntake": false,
            "OuttakeFanThroughputInM3H": 0,
            "WattageLamp": 0,
            "Ventilation": true,
            "Inside": false,
            "GrowMedium": "cocos"
        }))
        .unwrap();

        assert_eq!(unit.id, 3);
        assert!(!to_json_string(&unit).unwrap().contains("GrowMedium"));
    }

    #[test]
    fn wrong_type_is_malformed() {
        let err = from_json_value(json!({
            "Id": 3,
            "Name": "Balcony box",
            "Width": "wide",
            "Height": 90,
            "Depth": 40,
            "CarbonFilter": false,
            "ActiveIntake": false,
            "OuttakeFanThroughputInM3H": 0,
            "WattageLamp": 0,
            "Ventilation": true,
            "Inside": false
        }))
        .unwrap_err();

        assert!(matches!(err, GrowUnitError::MalformedGrowUnit(_)));
    }

    fn tent_a() -> GrowUnit {
        GrowUnit::new(
            1,
            "Tent A",
            120.0,
            200.0,
            60.0,
            true,
            true,
            150.5,
            600.0,
            true,
            true,
        )
    }

    #[test]
    fn non_finite_reals_cannot_be_written_as_json() {
        let mut unit = tent_a();
        unit.wattage_lamp = f64::INFINITY;

        match to_json_string(&unit) {
            Err(GrowUnitError::Encoding(msg)) => assert!(msg.contains("WattageLamp")),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            to_json_string_pretty(&unit),
            Err(GrowUnitError::Encoding(_))
        ));
        assert!(matches!(to_json_value(&unit), Err(GrowUnitError::Encoding(_))));
        assert!(matches!(
            encode(WireFormat::Json, &unit),
            Err(GrowUnitError::Encoding(_))
        ));

        unit.wattage_lamp = 600.0;
        unit.depth = f64::NAN;
        match to_json_value(&unit) {
            Err(GrowUnitError::Encoding(msg)) => assert!(msg.contains("Depth")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn file_with_non_finite_unit_cannot_be_written_as_json() {
        let mut broken = tent_a();
        broken.id = 2;
        broken.outtake_fan_throughput_in_m3h = f64::NEG_INFINITY;
        let file = GrowUnitFile {
            schema_version: "1.0".to_string(),
            grow_units: vec![tent_a(), broken],
        };

        match file_to_string(WireFormat::Json, &file) {
            Err(GrowUnitError::Encoding(msg)) => {
                assert!(msg.contains("OuttakeFanThroughputInM3H"));
                assert!(msg.contains("grow unit 2"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn garbage_text_is_malformed() {
        assert!(matches!(
            from_json_str("{not json"),
            Err(GrowUnitError::MalformedGrowUnit(_))
        ));
        assert!(matches!(
            from_yaml_str("- just\n- a list\n"),
            Err(GrowUnitError::MalformedGrowUnit(_))
        ));
    }
}
