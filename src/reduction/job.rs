use super::pipeline::{Pipeline, Reduction};
use crate::config::RunConfig;
use crate::errors::ReductionError;
use crate::frames::LoadTransfer;
use crate::io::{read_table, write_table};
use crate::physics::{CoefficientNormalizer, PhysicalConstants};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub rows: usize,
    pub body_file: PathBuf,
    pub aero_file: PathBuf,
}

/// One static/dynamic table pair reduced to body and wind axis coefficients.
#[derive(Debug, Clone)]
pub struct ReductionJob {
    config: RunConfig,
}

impl ReductionJob {
    pub fn new(config: RunConfig) -> Self {
        ReductionJob { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn with_constants(mut self, constants: PhysicalConstants) -> Self {
        self.config.constants = constants;
        self
    }

    /// Computes both coefficient tables in memory. Nothing is written.
    pub fn reduce(&self) -> Result<Reduction, ReductionError> {
        let config = &self.config;

        // Unsupported balances fail here, before any file is opened
        let calibration = config.balance.calibration()?;
        config.layout.validate()?;

        let static_table = read_table(&config.files.static_file, &config.layout)?;
        let dynamic_table = read_table(&config.files.dynamic_file, &config.layout)?;
        debug!(
            static_rows = static_table.rows(),
            dynamic_rows = dynamic_table.rows(),
            "tables loaded"
        );

        let transfer = LoadTransfer::for_model(&config.aircraft, calibration.transfer_correction());
        let normalizer = CoefficientNormalizer::new(&config.aircraft, &config.constants);
        debug!(q = normalizer.dynamic_pressure, "dynamic pressure");

        let pipeline = Pipeline::new(calibration, transfer, normalizer);
        Ok(pipeline.reduce_tables(&static_table, &dynamic_table)?)
    }

    /// Reduces and writes the body and aero tables. Both tables are fully
    /// computed before the first file is created, and the body table is
    /// removed again if the aero table cannot be written.
    pub fn run(&self) -> Result<RunSummary, ReductionError> {
        info!("Reducing balance data\n{}", self);
        let reduction = self.reduce()?;

        let files = &self.config.files;
        write_table(&files.body_file, &reduction.body)?;
        if let Err(e) = write_table(&files.aero_file, &reduction.aero) {
            // No partial output: the body table goes too
            if let Err(remove) = fs::remove_file(&files.body_file) {
                warn!(body = %files.body_file.display(), "could not remove body table: {}", remove);
            }
            return Err(e.into());
        }

        info!(
            rows = reduction.body.len(),
            body = %files.body_file.display(),
            aero = %files.aero_file.display(),
            "coefficient tables written"
        );

        Ok(RunSummary {
            rows: reduction.body.len(),
            body_file: files.body_file.clone(),
            aero_file: files.aero_file.clone(),
        })
    }

    /// Success flag only. The error is logged and dropped.
    pub fn translate_data(&self) -> bool {
        match self.run() {
            Ok(_) => true,
            Err(e) => {
                error!("Failed to translate the data files: {}", e);
                false
            }
        }
    }
}

impl fmt::Display for ReductionJob {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let config = &self.config;
        let layout = &config.layout;
        writeln!(f, "{:>24}  {}", "Static file:", config.files.static_file.display())?;
        writeln!(f, "{:>24}  {}", "Dynamic file:", config.files.dynamic_file.display())?;
        writeln!(f, "{:>24}  {}", "Body file:", config.files.body_file.display())?;
        writeln!(f, "{:>24}  {}", "Aero file:", config.files.aero_file.display())?;
        writeln!(f, "{:>24}  {}", "Balance:", config.balance)?;
        writeln!(
            f,
            "{:>24}  header {} / footer {}, angles {}..={}, forces {}..={}",
            "Layout:",
            layout.header_rows,
            layout.footer_rows,
            layout.angle_columns.start,
            layout.angle_columns.end,
            layout.force_columns.start,
            layout.force_columns.end
        )?;
        write!(f, "{}", config.aircraft)
    }
}
