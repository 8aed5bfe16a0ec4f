use crate::error::GrowUnitError;
use growunit_schemas::GrowUnit;

/// A fluent builder for assembling a `GrowUnit` field by field.
///
/// Nothing is defaulted: `build` refuses to produce a unit until all eleven
/// fields have been set, which is useful when the values arrive piecemeal
/// (e.g., from form inputs).
#[derive(Debug, Default, Clone)]
pub struct GrowUnitBuilder {
    id: Option<u64>,
    name: Option<String>,
    width: Option<f64>,
    height: Option<f64>,
    depth: Option<f64>,
    carbon_filter: Option<bool>,
    active_intake: Option<bool>,
    outtake_fan_throughput_in_m3h: Option<f64>,
    wattage_lamp: Option<f64>,
    ventilation: Option<bool>,
    inside: Option<bool>,
}

impl GrowUnitBuilder {
    /// Creates a new, empty `GrowUnitBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets width, height and depth in one call.
    pub fn with_dimensions(mut self, width: f64, height: f64, depth: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self.depth = Some(depth);
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_carbon_filter(mut self, installed: bool) -> Self {
        self.carbon_filter = Some(installed);
        self
    }

    pub fn with_active_intake(mut self, active: bool) -> Self {
        self.active_intake = Some(active);
        self
    }

    pub fn with_outtake_fan_throughput_in_m3h(mut self, throughput: f64) -> Self {
        self.outtake_fan_throughput_in_m3h = Some(throughput);
        self
    }

    pub fn with_wattage_lamp(mut self, watts: f64) -> Self {
        self.wattage_lamp = Some(watts);
        self
    }

    pub fn with_ventilation(mut self, present: bool) -> Self {
        self.ventilation = Some(present);
        self
    }

    pub fn with_inside(mut self, inside: bool) -> Self {
        self.inside = Some(inside);
        self
    }

    /// Consumes the builder and returns the complete `GrowUnit`.
    ///
    /// # Errors
    ///
    /// Returns `GrowUnitError::MalformedGrowUnit` naming the first field (in
    /// declaration order) that was never set.
    pub fn build(self) -> Result<GrowUnit, GrowUnitError> {
        Ok(GrowUnit {
            id: require(self.id, "Id")?,
            name: require(self.name, "Name")?,
            width: require(self.width, "Width")?,
            height: require(self.height, "Height")?,
            depth: require(self.depth, "Depth")?,
            carbon_filter: require(self.carbon_filter, "CarbonFilter")?,
            active_intake: require(self.active_intake, "ActiveIntake")?,
            outtake_fan_throughput_in_m3h: require(
                self.outtake_fan_throughput_in_m3h,
                "OuttakeFanThroughputInM3H",
            )?,
            wattage_lamp: require(self.wattage_lamp, "WattageLamp")?,
            ventilation: require(self.ventilation, "Ventilation")?,
            inside: require(self.inside, "Inside")?,
        })
    }
}

fn require<T>(value: Option<T>, field: &str) -> Result<T, GrowUnitError> {
    value.ok_or_else(|| GrowUnitError::MalformedGrowUnit(format!("missing field `{field}`")))
}

impl From<GrowUnit> for GrowUnitBuilder {
    fn from(unit: GrowUnit) -> Self {
        Self {
            id: Some(unit.id),
            name: Some(unit.name),
            width: Some(unit.width),
            height: Some(unit.height),
            depth: Some(unit.depth),
            carbon_filter: Some(unit.carbon_filter),
            active_intake: Some(unit.active_intake),
            outtake_fan_throughput_in_m3h: Some(unit.outtake_fan_throughput_in_m3h),
            wattage_lamp: Some(unit.wattage_lamp),
            ventilation: Some(unit.ventilation),
            inside: Some(unit.inside),
        }
    }
}
