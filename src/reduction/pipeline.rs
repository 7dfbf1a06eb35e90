use crate::balance::BalanceCalibration;
use crate::errors::InputFormatError;
use crate::frames::{LoadTransfer, WindAxes};
use crate::models::{CoefficientTable, Load, SampleTable};
use crate::physics::CoefficientNormalizer;
use tracing::debug;

/// Loads of a single sample through every stage.
#[derive(Debug, Clone, PartialEq)]
pub struct ReducedSample {
    pub balance: Load,
    pub body: Load,
    pub aero: Load,
    pub body_coefficients: Load,
    pub aero_coefficients: Load,
}

/// Body-axis and wind-axis coefficient tables of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    pub body: CoefficientTable,
    pub aero: CoefficientTable,
}

pub struct Pipeline {
    calibration: Box<dyn BalanceCalibration>,
    transfer: LoadTransfer,
    normalizer: CoefficientNormalizer,
}

impl Pipeline {
    pub fn new(
        calibration: Box<dyn BalanceCalibration>,
        transfer: LoadTransfer,
        normalizer: CoefficientNormalizer,
    ) -> Self {
        Pipeline {
            calibration,
            transfer,
            normalizer,
        }
    }

    pub fn reduce_sample(
        &self,
        static_load: &Load,
        dynamic_load: &Load,
        axes: &WindAxes,
    ) -> ReducedSample {
        let differential = dynamic_load - static_load;
        let balance = self.calibration.balance_frame_load(&differential);
        let body = self.transfer.apply(&balance);
        let aero = axes.rotate(&body);

        ReducedSample {
            balance,
            body,
            aero,
            body_coefficients: self.normalizer.normalize(&body),
            aero_coefficients: self.normalizer.normalize(&aero),
        }
    }

    /// Reduces every row. Headers and footers are taken from the static table.
    pub fn reduce_tables(
        &self,
        static_table: &SampleTable,
        dynamic_table: &SampleTable,
    ) -> Result<Reduction, InputFormatError> {
        let columns = static_table.angle_columns().min(dynamic_table.angle_columns());
        if columns < 2 {
            return Err(InputFormatError::TooFewAngleColumns { columns });
        }
        if static_table.rows() != dynamic_table.rows() {
            return Err(InputFormatError::RowCountMismatch {
                static_rows: static_table.rows(),
                dynamic_rows: dynamic_table.rows(),
            });
        }

        let mut body = CoefficientTable::new(&static_table.header, &static_table.footer);
        let mut aero = CoefficientTable::new(&static_table.header, &static_table.footer);

        for row in 0..static_table.rows() {
            let sta = static_table.angles.row(row);
            let dynamic = dynamic_table.angles.row(row);
            let axes = WindAxes::mean_of((sta[0], sta[1]), (dynamic[0], dynamic[1]));
            let angles: Vec<f64> = sta
                .iter()
                .zip(dynamic.iter())
                .map(|(s, d)| (s + d) / 2.0)
                .collect();

            let sample = self.reduce_sample(
                &static_table.loads[row],
                &dynamic_table.loads[row],
                &axes,
            );
            debug!(row, balance = ?sample.balance, "reduced sample");

            body.push(angles.clone(), sample.body_coefficients);
            aero.push(angles, sample.aero_coefficients);
        }

        Ok(Reduction { body, aero })
    }
}
