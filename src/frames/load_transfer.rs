use crate::balance::TransferCorrection;
use crate::config::AircraftModel;
use crate::models::Load;

/// Moves a load from the balance center to the aircraft CG.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadTransfer {
    pub dx: f64, // m
    pub dy: f64, // m
    pub dz: f64, // m
    pub correction: TransferCorrection,
}

impl LoadTransfer {
    pub fn new(dx: f64, dy: f64, dz: f64, correction: TransferCorrection) -> Self {
        LoadTransfer {
            dx,
            dy,
            dz,
            correction,
        }
    }

    pub fn for_model(model: &AircraftModel, correction: TransferCorrection) -> Self {
        Self::new(model.dx, model.dy, model.dz, correction)
    }

    /// Lever-arm terms use the balance forces before the force corrections.
    pub fn apply(&self, balance: &Load) -> Load {
        let (fx, fy, fz) = (balance[0], balance[1], balance[2]);
        let (mx, my, mz) = (balance[3], balance[4], balance[5]);
        let (dx, dy, dz) = (self.dx, self.dy, self.dz);

        Load::new(
            fx * self.correction.fx,
            fy * self.correction.fy,
            fz,
            mx + fz * dy - fy * dz,
            my - fx * dz - fz * dx,
            (mz + fx * dy + fy * dx) * self.correction.mz,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EIGHTEEN_ROD: TransferCorrection = TransferCorrection {
        fx: 0.95,
        fy: 0.98,
        mz: 0.56,
    };

    #[test]
    fn test_zero_offset_is_identity_for_unity_correction() {
        let transfer = LoadTransfer::new(0.0, 0.0, 0.0, TransferCorrection::UNITY);
        let load = Load::new(1.0, -2.0, 3.0, 0.4, -0.5, 0.6);
        assert_eq!(transfer.apply(&load), load);
    }

    #[test]
    fn test_zero_offset_only_scales_yaw_moment() {
        let transfer = LoadTransfer::new(0.0, 0.0, 0.0, EIGHTEEN_ROD);
        let load = Load::new(1.0, -2.0, 3.0, 0.4, -0.5, 0.6);
        let moved = transfer.apply(&load);

        assert_eq!(moved[3], 0.4);
        assert_eq!(moved[4], -0.5);
        assert_relative_eq!(moved[5], 0.6 * 0.56);
        assert_relative_eq!(moved[0], 0.95);
        assert_relative_eq!(moved[1], -1.96);
        assert_eq!(moved[2], 3.0);
    }

    #[test]
    fn test_lever_arm_moments() {
        let transfer = LoadTransfer::new(0.1, 0.2, 0.3, TransferCorrection::UNITY);
        let moved = transfer.apply(&Load::new(10.0, 20.0, 30.0, 1.0, 2.0, 3.0));

        assert_relative_eq!(moved[3], 1.0 + 30.0 * 0.2 - 20.0 * 0.3, epsilon = 1e-12);
        assert_relative_eq!(moved[4], 2.0 - 10.0 * 0.3 - 30.0 * 0.1, epsilon = 1e-12);
        assert_relative_eq!(moved[5], 3.0 + 10.0 * 0.2 + 20.0 * 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_moments_use_uncorrected_forces() {
        let transfer = LoadTransfer::new(0.0, 1.0, 0.0, EIGHTEEN_ROD);
        let moved = transfer.apply(&Load::new(10.0, 0.0, 0.0, 0.0, 0.0, 0.0));
        // 10 N on a 1 m arm, then the yaw correction; not 9.5 N
        assert_relative_eq!(moved[5], 10.0 * 0.56, epsilon = 1e-12);
    }
}
