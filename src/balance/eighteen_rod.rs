use super::balance_type::BalanceType;
use super::calibration::{BalanceCalibration, TransferCorrection};
use crate::models::Load;
use tracing::trace;

/// Fixed sweep budget of the nonlinear solve. There is no convergence test;
/// results are only comparable with reference data when exactly this many
/// sweeps are run.
pub const SWEEPS: usize = 100;

/// Primary sensitivity of each channel, used for the first estimate
const PRIMARY_GAINS: [f64; 6] = [6.11960, 12.33276, 4.76279, 0.38218, 0.19456, 0.69732];

/// Nonlinear 18-rod strain-gauge balance.
///
/// Each load component is the primary gain times its own reading plus linear
/// and quadratic interaction terms in all six components. The system is solved
/// by Gauss-Seidel sweeps: within a sweep Fx is updated first and every later
/// component already sees the new values.
#[derive(Debug, Clone, Copy)]
pub struct EighteenRodBalance {
    sweeps: usize,
}

impl Default for EighteenRodBalance {
    fn default() -> Self {
        EighteenRodBalance { sweeps: SWEEPS }
    }
}

impl EighteenRodBalance {
    pub fn sweeps(&self) -> usize {
        self.sweeps
    }

    pub fn initial_estimate(differential: &Load) -> [f64; 6] {
        let mut f = [0.0; 6];
        for (i, gain) in PRIMARY_GAINS.iter().enumerate() {
            f[i] = gain * differential[i];
        }
        f
    }
}

impl BalanceCalibration for EighteenRodBalance {
    fn balance_type(&self) -> BalanceType {
        BalanceType::EighteenRod
    }

    fn balance_frame_load(&self, differential: &Load) -> Load {
        let e: [f64; 6] = (*differential).into();
        let mut f = Self::initial_estimate(differential);
        for _ in 0..self.sweeps {
            sweep(&e, &mut f);
        }
        trace!(?f, "18-rod solve finished");
        Load::from(f)
    }

    fn transfer_correction(&self) -> TransferCorrection {
        TransferCorrection {
            fx: 0.95,
            fy: 0.98,
            mz: 0.56,
        }
    }
}

// Term order matches the calibration report; reordering changes the last bits.
#[rustfmt::skip]
fn sweep(e: &[f64; 6], f: &mut [f64; 6]) {
    f[0] = 6.11960 * e[0]
        + 0.00548 * f[1]
        + 0.10290 * f[2]
        + 0.12796 * f[3]
        + 1.03638 * f[4]
        - 0.21182 * f[5]
        + 0.00090 * f[0] * f[0]
        - 0.00023 * f[0] * f[1]
        + 0.00034 * f[0] * f[2]
        + 0.00198 * f[0] * f[3]
        + 0.00447 * f[0] * f[4]
        - 0.00065 * f[0] * f[5]
        - 0.00001 * f[1] * f[2]
        - 0.00444 * f[1] * f[3]
        - 0.00041 * f[1] * f[4]
        + 0.00512 * f[1] * f[5]
        + 0.00014 * f[2] * f[2]
        - 0.00243 * f[2] * f[3]
        - 0.00292 * f[2] * f[4]
        + 0.00033 * f[2] * f[5]
        - 0.31818 * f[3] * f[3]
        + 0.04225 * f[3] * f[4]
        + 0.27065 * f[3] * f[5]
        - 0.02223 * f[4] * f[4]
        - 0.01045 * f[4] * f[5]
        - 0.02171 * f[5] * f[5];
    f[1] = 12.33276 * e[1]
        - 0.01686 * f[0]
        + 0.01297 * f[2]
        - 0.23388 * f[3]
        - 0.19139 * f[4]
        + 0.18227 * f[5]
        - 0.00010 * f[1] * f[1]
        - 0.00010 * f[1] * f[0]
        + 0.00004 * f[1] * f[2]
        - 0.00274 * f[1] * f[3]
        + 0.00056 * f[1] * f[4]
        + 0.00107 * f[1] * f[5]
        + 0.00045 * f[0] * f[0]
        + 0.00030 * f[0] * f[2]
        + 0.00077 * f[0] * f[3]
        + 0.00181 * f[0] * f[4]
        - 0.00549 * f[0] * f[5]
        - 0.00006 * f[2] * f[2]
        - 0.01497 * f[2] * f[3]
        + 0.00340 * f[2] * f[4]
        + 0.00213 * f[2] * f[5]
        - 0.03901 * f[3] * f[3]
        - 0.15065 * f[3] * f[4]
        + 0.02407 * f[3] * f[5]
        + 0.00754 * f[4] * f[4]
        + 0.02244 * f[4] * f[5]
        - 0.01096 * f[5] * f[5];
    f[2] = 4.76279 * e[2]
        - 0.02295 * f[1]
        + 0.00338 * f[0]
        - 0.17365 * f[3]
        - 0.36139 * f[4]
        + 0.00857 * f[5]
        + 0.00032 * f[2] * f[2]
        - 0.00009 * f[2] * f[1]
        - 0.00016 * f[2] * f[0]
        + 0.00366 * f[2] * f[3]
        - 0.00382 * f[2] * f[4]
        + 0.00146 * f[2] * f[5]
        + 0.00031 * f[1] * f[1]
        - 0.00050 * f[1] * f[0]
        + 0.02079 * f[1] * f[3]
        - 0.00222 * f[1] * f[4]
        - 0.00709 * f[1] * f[5]
        + 0.00045 * f[0] * f[0]
        + 0.00588 * f[0] * f[3]
        + 0.01732 * f[0] * f[4]
        - 0.00223 * f[0] * f[5]
        - 0.12878 * f[3] * f[3]
        + 0.09362 * f[3] * f[4]
        - 0.24968 * f[3] * f[5]
        + 0.08996 * f[4] * f[4]
        + 0.01747 * f[4] * f[5]
        + 0.01161 * f[5] * f[5];
    f[3] = 0.38218 * e[3]
        + 0.00068 * f[1]
        - 0.00015 * f[2]
        + 0.00010 * f[0]
        - 0.0073 * f[4]
        + 0.01998 * f[5]
        - 0.00141 * f[3] * f[3]
        - 0.00067 * f[3] * f[1]
        - 0.00055 * f[3] * f[2]
        + 0.00016 * f[3] * f[0]
        - 0.00475 * f[3] * f[4]
        + 0.00236 * f[3] * f[5]
        - 0.00001 * f[1] * f[1]
        + 0.00001 * f[2] * f[1]
        + 0.00002 * f[1] * f[0]
        + 0.00025 * f[1] * f[4]
        + 0.00025 * f[1] * f[5]
        - 0.00003 * f[2] * f[2]
        + 0.00002 * f[2] * f[0]
        + 0.00026 * f[2] * f[4]
        + 0.00004 * f[2] * f[5]
        - 0.00004 * f[0] * f[0]
        - 0.00042 * f[0] * f[4]
        + 0.00023 * f[0] * f[5]
        - 0.00954 * f[4] * f[4]
        - 0.00136 * f[4] * f[5]
        + 0.00219 * f[5] * f[5];
    f[4] = 0.19456 * e[4]
        - 0.00007 * f[1]
        + 0.00227 * f[2]
        + 0.00113 * f[3]
        - 0.00012 * f[0]
        + 0.00488 * f[5]
        + 0.00714 * f[4] * f[4]
        + 0.00000 * f[4] * f[1]
        - 0.00010 * f[4] * f[2]
        - 0.00955 * f[4] * f[3]
        + 0.00158 * f[0] * f[0]
        - 0.00279 * f[4] * f[5]
        + 0.00001 * f[1] * f[1]
        + 0.00058 * f[1] * f[3]
        - 0.00035 * f[1] * f[5]
        + 0.00001 * f[2] * f[2]
        - 0.00035 * f[2] * f[3]
        - 0.00005 * f[2] * f[0]
        - 0.00006 * f[2] * f[5]
        - 0.00180 * f[3] * f[3]
        + 0.00022 * f[3] * f[0]
        - 0.02256 * f[3] * f[5]
        - 0.00005 * f[0] * f[0]
        + 0.00090 * f[0] * f[5]
        - 0.00117 * f[5] * f[5];
    f[5] = 0.69732 * e[5]
        + 0.00041 * f[1]
        - 0.00087 * f[2]
        - 0.05093 * f[3]
        - 0.03029 * f[4]
        + 0.00121 * f[0]
        - 0.00147 * f[5] * f[5]
        - 0.00009 * f[5] * f[1]
        + 0.00000 * f[5] * f[2]
        + 0.00302 * f[5] * f[3]
        - 0.00159 * f[5] * f[4]
        + 0.00169 * f[5] * f[0]
        - 0.00019 * f[1] * f[3]
        - 0.00007 * f[1] * f[4]
        + 0.00001 * f[1] * f[0]
        - 0.00001 * f[2] * f[2]
        + 0.00035 * f[2] * f[3]
        + 0.00011 * f[2] * f[4]
        + 0.00001 * f[2] * f[0]
        - 0.00497 * f[3] * f[3]
        + 0.01545 * f[3] * f[4]
        - 0.00069 * f[3] * f[0]
        - 0.00108 * f[4] * f[4]
        + 0.00031 * f[4] * f[5]
        + 0.00001 * f[0] * f[0];
}
