use crate::{analysis, error::GrowUnitError};
use csv::Writer;
use growunit_schemas::GrowUnit;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SummaryRow<'a> {
    id: u64,
    name: &'a str,
    width: f64,
    height: f64,
    depth: f64,
    carbon_filter: bool,
    active_intake: bool,
    #[serde(rename = "OuttakeFanThroughputInM3H")]
    outtake_fan_throughput_in_m3h: f64,
    wattage_lamp: f64,
    ventilation: bool,
    inside: bool,
    footprint_area: f64,
    volume: f64,
}

impl<'a> From<&'a GrowUnit> for SummaryRow<'a> {
    fn from(unit: &'a GrowUnit) -> Self {
        Self {
            id: unit.id,
            name: &unit.name,
            width: unit.width,
            height: unit.height,
            depth: unit.depth,
            carbon_filter: unit.carbon_filter,
            active_intake: unit.active_intake,
            outtake_fan_throughput_in_m3h: unit.outtake_fan_throughput_in_m3h,
            wattage_lamp: unit.wattage_lamp,
            ventilation: unit.ventilation,
            inside: unit.inside,
            footprint_area: analysis::footprint_area(unit),
            volume: analysis::volume(unit),
        }
    }
}

/// Writes one CSV row per grow unit: the eleven wire fields followed by the
/// derived footprint area and volume.
pub struct SummaryWriter<W: Write> {
    writer: Writer<W>,
    target: String,
}

impl SummaryWriter<fs::File> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GrowUnitError> {
        let path = path.as_ref();
        let target = path.display().to_string();
        let writer =
            Writer::from_path(path).map_err(|e| GrowUnitError::CsvError(target.clone(), e))?;
        Ok(Self { writer, target })
    }
}

impl<W: Write> SummaryWriter<W> {
    pub fn from_writer(inner: W) -> Self {
        Self {
            writer: Writer::from_writer(inner),
            target: "<writer>".to_string(),
        }
    }

    pub fn write_unit(&mut self, unit: &GrowUnit) -> Result<(), GrowUnitError> {
        self.writer
            .serialize(SummaryRow::from(unit))
            .map_err(|e| GrowUnitError::CsvError(self.target.clone(), e))?;
        self.writer
            .flush()
            .map_err(|e| GrowUnitError::FileIO(self.target.clone(), e))?;
        Ok(())
    }
}
