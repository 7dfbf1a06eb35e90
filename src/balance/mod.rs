pub mod balance_type;
pub mod calibration;
pub mod eighteen_rod;
pub mod sixteen_rod;

pub use balance_type::BalanceType;
pub use calibration::{BalanceCalibration, TransferCorrection};
pub use eighteen_rod::EighteenRodBalance;
pub use sixteen_rod::SixteenRodBalance;
