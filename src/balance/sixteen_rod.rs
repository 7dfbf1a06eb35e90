use super::balance_type::BalanceType;
use super::calibration::BalanceCalibration;
use crate::models::Load;
use lazy_static::lazy_static;
use nalgebra as na;

lazy_static! {
    /// Interaction matrix of the 16-rod balance, rows Fx..Mz, columns Fx..Mz readings
    static ref CALIBRATION_MATRIX: na::Matrix6<f64> = na::Matrix6::from_row_slice(&[
        0.2554675, -0.0154822, 0.00390868, -0.0051715, -0.00178511, -0.0024596,
        0.00068324, 0.6661034, 0.0120892, -0.0109143, 0.0391122, 0.0151383,
        0.00096904, 0.00120306, 0.585989, 0.027769, 0.014161, 0.00452654,
        0.000095445, 0.00029407, 0.00726843, 0.03304980, 0.0082689, 0.000152507,
        -0.00036007, -0.00009756, 0.00098957, 0.00055426, 0.02351212, -0.000134249,
        -0.000025559, 0.00075648, 0.000344149, -0.000585242, -0.0022913, 0.0276978,
    ]);
}

/// Linear 16-rod strain-gauge balance.
#[derive(Debug, Clone, Copy, Default)]
pub struct SixteenRodBalance;

impl BalanceCalibration for SixteenRodBalance {
    fn balance_type(&self) -> BalanceType {
        BalanceType::SixteenRod
    }

    fn balance_frame_load(&self, differential: &Load) -> Load {
        *CALIBRATION_MATRIX * differential
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::TransferCorrection;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_differential_gives_zero_load() {
        let load = SixteenRodBalance.balance_frame_load(&Load::zeros());
        assert_eq!(load, Load::zeros());
    }

    #[test]
    fn test_single_channel_picks_matrix_column() {
        let load = SixteenRodBalance.balance_frame_load(&Load::new(10.0, 0.0, 0.0, 0.0, 0.0, 0.0));
        let expected = Load::new(
            2.554675,
            0.0068324,
            0.0096904,
            0.00095445,
            -0.0036007,
            -0.00025559,
        );
        assert_relative_eq!(load, expected, epsilon = 1e-15);
    }

    #[test]
    fn test_linearity() {
        let a = Load::new(1.0, -2.0, 0.5, 0.1, -0.3, 0.2);
        let b = Load::new(-0.4, 0.7, 3.0, -0.2, 0.05, 0.6);
        let sum = SixteenRodBalance.balance_frame_load(&(a + b));
        let parts = SixteenRodBalance.balance_frame_load(&a) + SixteenRodBalance.balance_frame_load(&b);
        assert_relative_eq!(sum, parts, epsilon = 1e-12);
    }

    #[test]
    fn test_no_transfer_correction() {
        assert_eq!(SixteenRodBalance.transfer_correction(), TransferCorrection::UNITY);
    }
}
