use super::load::Load;
use nalgebra as na;

/// A static or dynamic balance table, fully loaded into memory.
#[derive(Debug, Clone)]
pub struct SampleTable {
    /// Header lines byte for byte as they appear in the file, terminators included
    pub header: Vec<u8>,
    /// Footer lines byte for byte as they appear in the file, terminators included
    pub footer: Vec<u8>,
    /// One row per sample, one column per angle channel (degrees)
    pub angles: na::DMatrix<f64>,
    /// Raw balance channels per sample
    pub loads: Vec<Load>,
}

impl SampleTable {
    pub fn rows(&self) -> usize {
        self.loads.len()
    }

    pub fn angle_columns(&self) -> usize {
        self.angles.ncols()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientRow {
    pub angles: Vec<f64>,
    pub coefficients: Load,
}

/// Output table: passthrough header/footer around the reduced rows.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    pub header: Vec<u8>,
    pub footer: Vec<u8>,
    pub rows: Vec<CoefficientRow>,
}

impl CoefficientTable {
    pub fn new(header: &[u8], footer: &[u8]) -> Self {
        CoefficientTable {
            header: header.to_vec(),
            footer: footer.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, angles: Vec<f64>, coefficients: Load) {
        self.rows.push(CoefficientRow {
            angles,
            coefficients,
        });
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
