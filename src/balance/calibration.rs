use super::balance_type::BalanceType;
use crate::models::Load;

/// Empirical scale factors a balance applies while moving its load to the CG.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferCorrection {
    pub fx: f64,
    pub fy: f64,
    pub mz: f64,
}

impl TransferCorrection {
    pub const UNITY: TransferCorrection = TransferCorrection {
        fx: 1.0,
        fy: 1.0,
        mz: 1.0,
    };
}

impl Default for TransferCorrection {
    fn default() -> Self {
        Self::UNITY
    }
}

/// Maps the wind-on minus wind-off channel readings of one sample to the
/// six-component load at the balance center.
pub trait BalanceCalibration {
    fn balance_type(&self) -> BalanceType;

    fn balance_frame_load(&self, differential: &Load) -> Load;

    fn transfer_correction(&self) -> TransferCorrection {
        TransferCorrection::UNITY
    }
}
