use growunit_schemas::GrowUnit;

/// Floor area covered by the unit (`Width * Depth`), in the square of the
/// producer's length unit.
pub fn footprint_area(unit: &GrowUnit) -> f64 {
    unit.width * unit.depth
}

/// Enclosed volume (`Width * Depth * Height`), in the cube of the producer's
/// length unit.
pub fn volume(unit: &GrowUnit) -> f64 {
    footprint_area(unit) * unit.height
}
