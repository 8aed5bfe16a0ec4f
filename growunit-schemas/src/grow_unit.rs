use serde::{Deserialize, Serialize};

/// The configuration of one physical growing chamber at a point in time.
///
/// Every field is mandatory. A payload missing any of them does not describe a
/// grow unit, so none of the fields carries a serde default.
///
/// Lengths and power are stored in whatever unit the producer uses; the record
/// does not encode or convert units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GrowUnit {
    /// Identifier of the unit within its owning collection.
    pub id: u64,
    /// A human-readable label (e.g., "Tent A").
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    /// Whether a carbon (odor) filter is installed.
    pub carbon_filter: bool,
    /// Whether air intake is fan-driven rather than passive.
    pub active_intake: bool,
    /// Rated exhaust-fan throughput in cubic meters per hour. Zero means no outtake fan.
    #[serde(rename = "OuttakeFanThroughputInM3H")]
    pub outtake_fan_throughput_in_m3h: f64,
    /// Power draw of the installed grow lamp in watts.
    pub wattage_lamp: f64,
    pub ventilation: bool,
    /// Whether the unit stands indoors.
    pub inside: bool,
}

impl GrowUnit {
    /// Creates a grow unit from all eleven of its values.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u64,
        name: impl Into<String>,
        width: f64,
        height: f64,
        depth: f64,
        carbon_filter: bool,
        active_intake: bool,
        outtake_fan_throughput_in_m3h: f64,
        wattage_lamp: f64,
        ventilation: bool,
        inside: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            width,
            height,
            depth,
            carbon_filter,
            active_intake,
            outtake_fan_throughput_in_m3h,
            wattage_lamp,
            ventilation,
            inside,
        }
    }
}
