pub mod aircraft;
pub mod run;

pub use aircraft::AircraftModel;
pub use run::{ColumnRange, JobFiles, RunConfig, TableLayout};
