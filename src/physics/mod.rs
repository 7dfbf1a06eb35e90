pub mod coefficients;

pub use coefficients::{CoefficientNormalizer, PhysicalConstants};
