use crate::models::load::{forces, from_parts, moments};
use crate::models::Load;
use nalgebra as na;

/// Body axes to wind axes for one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindAxes {
    pub alpha: f64, // Angle of attack (rad)
    pub beta: f64,  // Sideslip (rad)
}

impl WindAxes {
    pub fn new(alpha: f64, beta: f64) -> Self {
        WindAxes { alpha, beta }
    }

    pub fn from_degrees(alpha: f64, beta: f64) -> Self {
        Self::new(alpha.to_radians(), beta.to_radians())
    }

    /// Mean attitude over the wind-off and wind-on readings (degrees in).
    /// Each reading is converted before averaging.
    pub fn mean_of(static_deg: (f64, f64), dynamic_deg: (f64, f64)) -> Self {
        Self::new(
            (static_deg.0.to_radians() + dynamic_deg.0.to_radians()) / 2.0,
            (static_deg.1.to_radians() + dynamic_deg.1.to_radians()) / 2.0,
        )
    }

    pub fn force_matrix(&self) -> na::Matrix3<f64> {
        let (sa, ca) = self.alpha.sin_cos();
        let (sb, cb) = self.beta.sin_cos();

        na::Matrix3::new(
            ca * cb, sa * cb, -sb,
            -sa, ca, 0.0,
            ca * sb, sa * sb, cb,
        )
    }

    /// Moment axes as used by the tunnel's reference reduction. This is not
    /// the force matrix: the signs differ and the (x, My) entry is
    /// `-sin(alpha) * cos(alpha)` rather than a `cos(beta)` product. Kept
    /// as-is so coefficients match archived data.
    pub fn moment_matrix(&self) -> na::Matrix3<f64> {
        let (sa, ca) = self.alpha.sin_cos();
        let (sb, cb) = self.beta.sin_cos();

        na::Matrix3::new(
            ca * cb, -(sa * ca), sb,
            sa, ca, 0.0,
            -(ca * sb), sa * sb, cb,
        )
    }

    pub fn rotate(&self, body: &Load) -> Load {
        let f = self.force_matrix() * forces(body);
        let m = self.moment_matrix() * moments(body);
        from_parts(&f, &m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_zero_angles_are_identity() {
        let axes = WindAxes::new(0.0, 0.0);
        let body = Load::new(1.0, -2.0, 3.0, 0.4, -0.5, 0.6);
        assert_relative_eq!(axes.rotate(&body), body, epsilon = 1e-15);
        assert_eq!(axes.force_matrix(), na::Matrix3::identity());
        assert_eq!(axes.moment_matrix(), na::Matrix3::identity());
    }

    #[test]
    fn test_force_matrix_is_orthonormal() {
        let r = WindAxes::from_degrees(12.0, -4.0).force_matrix();
        assert_relative_eq!(r * r.transpose(), na::Matrix3::identity(), epsilon = 1e-12);
    }

    #[test]
    fn test_pure_alpha_force_rotation() {
        let axes = WindAxes::new(FRAC_PI_2, 0.0);
        let aero = axes.rotate(&Load::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0));
        assert_relative_eq!(aero[0], 0.0, epsilon = 1e-15);
        assert_relative_eq!(aero[1], -1.0, epsilon = 1e-15);
        assert_relative_eq!(aero[2], 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_pitch_moment_term_uses_alpha_twice() {
        let alpha = 10f64.to_radians();
        let beta = 20f64.to_radians();
        let axes = WindAxes::new(alpha, beta);
        let aero = axes.rotate(&Load::new(0.0, 0.0, 0.0, 0.0, 1.0, 0.0));

        assert_relative_eq!(aero[3], -alpha.sin() * alpha.cos(), epsilon = 1e-15);
        assert!((aero[3] + alpha.sin() * beta.cos()).abs() > 1e-3);
        assert_relative_eq!(aero[4], alpha.cos(), epsilon = 1e-15);
        assert_relative_eq!(aero[5], alpha.sin() * beta.sin(), epsilon = 1e-15);
    }

    #[test]
    fn test_moment_rows_match_reference_formula() {
        let axes = WindAxes::from_degrees(6.0, 3.0);
        let (sa, ca) = axes.alpha.sin_cos();
        let (sb, cb) = axes.beta.sin_cos();
        let (mx, my, mz) = (0.3, -0.7, 0.2);
        let aero = axes.rotate(&Load::new(0.0, 0.0, 0.0, mx, my, mz));

        assert_relative_eq!(aero[3], ca * cb * mx - sa * ca * my + sb * mz, epsilon = 1e-15);
        assert_relative_eq!(aero[4], sa * mx + ca * my, epsilon = 1e-15);
        assert_relative_eq!(aero[5], -ca * sb * mx + sa * sb * my + cb * mz, epsilon = 1e-15);
    }

    #[test]
    fn test_mean_of_converts_then_averages() {
        let axes = WindAxes::mean_of((4.0, 1.0), (4.2, 1.0));
        assert_relative_eq!(axes.alpha, 4.1f64.to_radians(), epsilon = 1e-15);
        assert_relative_eq!(axes.beta, 1.0f64.to_radians(), epsilon = 1e-15);
    }
}
