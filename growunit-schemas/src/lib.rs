pub mod file_formats;
pub mod grow_unit;

pub use file_formats::GrowUnitFile;
pub use grow_unit::GrowUnit;
