use crate::config::AircraftModel;
use crate::constants::{AIR_DENSITY, FORCE_UNIT};
use crate::models::Load;
use serde::{Deserialize, Serialize};

/// Physical constants used by the reduction. Defaults are the tunnel's
/// standard values; runs may override them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    pub air_density: f64, // kg/m³
    pub force_unit: f64,  // N per balance unit
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        PhysicalConstants {
            air_density: AIR_DENSITY,
            force_unit: FORCE_UNIT,
        }
    }
}

impl PhysicalConstants {
    /// q = ½ρV²
    pub fn dynamic_pressure(&self, speed: f64) -> f64 {
        0.5 * self.air_density * speed.powi(2)
    }
}

/// Turns loads into force and moment coefficients for one test article.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientNormalizer {
    pub force_unit: f64,
    pub dynamic_pressure: f64, // Pa
    pub area: f64,             // m²
    pub span: f64,             // m
    pub ref_chord: f64,        // m
}

impl CoefficientNormalizer {
    pub fn new(model: &AircraftModel, constants: &PhysicalConstants) -> Self {
        CoefficientNormalizer {
            force_unit: constants.force_unit,
            dynamic_pressure: constants.dynamic_pressure(model.speed),
            area: model.area,
            span: model.span,
            ref_chord: model.ref_chord,
        }
    }

    /// Forces over qS, roll and pitch over qSl, yaw over qS·ba.
    pub fn normalize(&self, load: &Load) -> Load {
        let g = self.force_unit;
        let qs = self.dynamic_pressure * self.area;
        let qsl = self.dynamic_pressure * self.area * self.span;
        let qsb = self.dynamic_pressure * self.area * self.ref_chord;

        Load::new(
            load[0] * g / qs,
            load[1] * g / qs,
            load[2] * g / qs,
            load[3] * g / qsl,
            load[4] * g / qsl,
            load[5] * g / qsb,
        )
    }
}
