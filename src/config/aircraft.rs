use crate::constants::DEFAULT_WIND_SPEED;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Test article geometry and tunnel speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftModel {
    pub area: f64,       // Reference area (m²)
    pub span: f64,       // Wing span (m)
    pub root_chord: f64, // Root chord (m)
    pub ref_chord: f64,  // Reference chord (m)
    pub dx: f64,         // Balance center to CG, x (m)
    pub dy: f64,         // Balance center to CG, y (m)
    pub dz: f64,         // Balance center to CG, z (m)
    pub speed: f64,      // Wind speed (m/s)
}

impl Default for AircraftModel {
    fn default() -> Self {
        AircraftModel {
            area: 0.0,
            span: 0.0,
            root_chord: 0.0,
            ref_chord: 0.0,
            dx: 0.0,
            dy: 0.0,
            dz: 0.0,
            speed: DEFAULT_WIND_SPEED,
        }
    }
}

impl AircraftModel {
    pub fn set_area(&mut self, area: f64) {
        self.area = area;
    }

    pub fn set_span(&mut self, span: f64) {
        self.span = span;
    }

    pub fn set_root_chord(&mut self, root_chord: f64) {
        self.root_chord = root_chord;
    }

    pub fn set_ref_chord(&mut self, ref_chord: f64) {
        self.ref_chord = ref_chord;
    }

    pub fn set_wind_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn set_dx(&mut self, dx: f64) {
        self.dx = dx;
    }

    pub fn set_dy(&mut self, dy: f64) {
        self.dy = dy;
    }

    pub fn set_dz(&mut self, dz: f64) {
        self.dz = dz;
    }
}

impl fmt::Display for AircraftModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:>24}  {} m/s", "Speed:", self.speed)?;
        writeln!(f, "{:>24}  {} m²", "Area:", self.area)?;
        writeln!(f, "{:>24}  {} m", "Span:", self.span)?;
        writeln!(f, "{:>24}  {} m", "Root chord:", self.root_chord)?;
        writeln!(f, "{:>24}  {} m", "Reference chord:", self.ref_chord)?;
        write!(
            f,
            "{:>24}  ({}, {}, {}) m",
            "CG offset:", self.dx, self.dy, self.dz
        )
    }
}
