pub mod load;
pub mod table;

pub use load::Load;
pub use table::{CoefficientRow, CoefficientTable, SampleTable};
