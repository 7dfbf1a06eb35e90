use super::aircraft::AircraftModel;
use crate::balance::BalanceType;
use crate::constants::{DEFAULT_FOOTER_ROWS, DEFAULT_HEADER_ROWS, LOAD_COMPONENTS};
use crate::errors::ConfigurationError;
use crate::physics::coefficients::PhysicalConstants;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Inclusive, 1-based column range as written in the run file: `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct ColumnRange {
    pub start: usize,
    pub end: usize,
}

impl ColumnRange {
    pub fn new(start: usize, end: usize) -> Self {
        ColumnRange { start, end }
    }

    /// Number of columns covered. Zero when `end < start`.
    pub fn len(&self) -> usize {
        (self.end + 1).saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Zero-based index range for slicing a parsed row.
    pub fn indices(&self) -> Range<usize> {
        self.start.saturating_sub(1)..self.end
    }
}

impl From<(usize, usize)> for ColumnRange {
    fn from((start, end): (usize, usize)) -> Self {
        ColumnRange::new(start, end)
    }
}

impl From<ColumnRange> for (usize, usize) {
    fn from(range: ColumnRange) -> Self {
        (range.start, range.end)
    }
}

/// Where the data lives inside the static and dynamic tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableLayout {
    pub header_rows: usize,
    pub footer_rows: usize,
    pub angle_columns: ColumnRange,
    pub force_columns: ColumnRange,
}

impl Default for TableLayout {
    fn default() -> Self {
        TableLayout {
            header_rows: DEFAULT_HEADER_ROWS,
            footer_rows: DEFAULT_FOOTER_ROWS,
            angle_columns: ColumnRange::new(1, 2),
            force_columns: ColumnRange::new(3, 8),
        }
    }
}

impl TableLayout {
    /// Angle range must carry at least alpha and beta, force range exactly six channels.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        check_range("angle", self.angle_columns)?;
        check_range("force", self.force_columns)?;

        if self.angle_columns.len() < 2 {
            return Err(invalid("angle", self.angle_columns, "need at least alpha and beta"));
        }
        if self.force_columns.len() != LOAD_COMPONENTS {
            return Err(invalid("force", self.force_columns, "need exactly six channels"));
        }
        Ok(())
    }
}

fn check_range(name: &'static str, range: ColumnRange) -> Result<(), ConfigurationError> {
    if range.start < 1 {
        return Err(invalid(name, range, "columns are numbered from 1"));
    }
    if range.end < range.start {
        return Err(invalid(name, range, "end precedes start"));
    }
    Ok(())
}

fn invalid(name: &'static str, range: ColumnRange, reason: &'static str) -> ConfigurationError {
    ConfigurationError::InvalidColumnRange {
        name,
        start: range.start,
        end: range.end,
        reason,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFiles {
    pub static_file: PathBuf,
    pub dynamic_file: PathBuf,
    pub body_file: PathBuf,
    pub aero_file: PathBuf,
}

/// Complete description of one reduction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub balance: BalanceType,
    #[serde(flatten)]
    pub files: JobFiles,
    #[serde(default)]
    pub layout: TableLayout,
    #[serde(default)]
    pub aircraft: AircraftModel,
    #[serde(default)]
    pub constants: PhysicalConstants,
}

impl RunConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigurationError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigurationError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const FULL_RUN: &str = r#"
balance = "eighteen-rod"
static_file = "sta.dat"
dynamic_file = "dyn.dat"
body_file = "body.dat"
aero_file = "aero.dat"

[layout]
header_rows = 2
footer_rows = 1
angle_columns = [1, 3]
force_columns = [4, 9]

[aircraft]
area = 0.5
span = 1.2
ref_chord = 0.4
speed = 30.0

[constants]
air_density = 1.2
"#;

    #[test]
    fn test_parse_full_run_file() {
        let config = RunConfig::from_toml_str(FULL_RUN).unwrap();
        assert_eq!(config.balance, BalanceType::EighteenRod);
        assert_eq!(config.files.static_file, PathBuf::from("sta.dat"));
        assert_eq!(config.files.aero_file, PathBuf::from("aero.dat"));
        assert_eq!(config.layout.header_rows, 2);
        assert_eq!(config.layout.footer_rows, 1);
        assert_eq!(config.layout.angle_columns, ColumnRange::new(1, 3));
        assert_eq!(config.layout.force_columns, ColumnRange::new(4, 9));
        assert_eq!(config.aircraft.area, 0.5);
        assert_eq!(config.aircraft.root_chord, 0.0);
        assert_eq!(config.aircraft.speed, 30.0);
        assert_eq!(config.constants.air_density, 1.2);
        assert_eq!(config.constants.force_unit, 9.8);
    }

    #[test]
    fn test_sections_fall_back_to_defaults() {
        let text = r#"
balance = 1
static_file = "a"
dynamic_file = "b"
body_file = "c"
aero_file = "d"
"#;
        let config = RunConfig::from_toml_str(text).unwrap();
        assert_eq!(config.balance, BalanceType::SixteenRod);
        assert_eq!(config.layout, TableLayout::default());
        assert_eq!(config.aircraft, AircraftModel::default());
        assert_eq!(config.constants, PhysicalConstants::default());
    }

    #[test]
    fn test_unknown_balance_is_rejected() {
        let text = r#"
balance = 7
static_file = "a"
dynamic_file = "b"
body_file = "c"
aero_file = "d"
"#;
        assert!(matches!(
            RunConfig::from_toml_str(text),
            Err(ConfigurationError::Toml(_))
        ));
    }

    #[test]
    fn test_column_range_indices() {
        let range = ColumnRange::new(3, 8);
        assert_eq!(range.len(), 6);
        assert_eq!(range.indices(), 2..8);
        assert!(ColumnRange::new(4, 3).is_empty());
    }

    #[test_case(ColumnRange::new(1, 2), ColumnRange::new(3, 8) => true; "reference layout")]
    #[test_case(ColumnRange::new(1, 4), ColumnRange::new(5, 10) => true; "four angle columns")]
    #[test_case(ColumnRange::new(0, 2), ColumnRange::new(3, 8) => false; "zero based start")]
    #[test_case(ColumnRange::new(1, 1), ColumnRange::new(3, 8) => false; "single angle column")]
    #[test_case(ColumnRange::new(1, 2), ColumnRange::new(3, 7) => false; "five force columns")]
    #[test_case(ColumnRange::new(1, 2), ColumnRange::new(8, 3) => false; "reversed force range")]
    fn test_layout_validation(angles: ColumnRange, forces: ColumnRange) -> bool {
        let layout = TableLayout {
            angle_columns: angles,
            force_columns: forces,
            ..TableLayout::default()
        };
        layout.validate().is_ok()
    }
}
