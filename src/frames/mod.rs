pub mod load_transfer;
pub mod wind_axes;

pub use load_transfer::LoadTransfer;
pub use wind_axes::WindAxes;
