pub mod analysis;
pub mod builder;
pub mod codec;
pub mod error;
pub mod report;
pub mod validation;

pub use builder::GrowUnitBuilder;
pub use error::GrowUnitError;
pub use growunit_schemas::{GrowUnit, GrowUnitFile};
