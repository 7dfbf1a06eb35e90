// Atmosphere
pub const AIR_DENSITY: f64 = 1.2250; // Sea-level air density (kg/m³)

// Units
pub const FORCE_UNIT: f64 = 9.8; // Balance readings are in kgf, this converts them to N

// Test article defaults
pub const DEFAULT_WIND_SPEED: f64 = 25.0; // Tunnel wind speed (m/s)

// Table layout defaults
pub const DEFAULT_HEADER_ROWS: usize = 1;
pub const DEFAULT_FOOTER_ROWS: usize = 0;

// Output format: every value is written as `%-15.8f`
pub const FIELD_WIDTH: usize = 15;
pub const FIELD_PRECISION: usize = 8;

// Number of six-component channels (Fx, Fy, Fz, Mx, My, Mz)
pub const LOAD_COMPONENTS: usize = 6;
