use super::calibration::BalanceCalibration;
use super::eighteen_rod::EighteenRodBalance;
use super::sixteen_rod::SixteenRodBalance;
use crate::errors::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Balance hardware installed in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "BalanceSelector")]
pub enum BalanceType {
    FourteenRod,
    SixteenRod,
    EighteenRod,
    Box,
}

/// Run files may name the balance or give its legacy index.
#[derive(Deserialize)]
#[serde(untagged)]
enum BalanceSelector {
    Index(i64),
    Name(String),
}

impl TryFrom<BalanceSelector> for BalanceType {
    type Error = ConfigurationError;

    fn try_from(selector: BalanceSelector) -> Result<Self, Self::Error> {
        match selector {
            BalanceSelector::Index(index) => BalanceType::from_index(index),
            BalanceSelector::Name(name) => name.parse(),
        }
    }
}

impl BalanceType {
    pub const ALL: [BalanceType; 4] = [
        BalanceType::FourteenRod,
        BalanceType::SixteenRod,
        BalanceType::EighteenRod,
        BalanceType::Box,
    ];

    /// Legacy selector: 0 = 14-rod, 1 = 16-rod, 2 = 18-rod, 3 = box.
    pub fn from_index(index: i64) -> Result<Self, ConfigurationError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(ConfigurationError::UnknownBalanceIndex(index))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Resolve the calibration for this balance. Done once per run, before any
    /// file is touched.
    pub fn calibration(self) -> Result<Box<dyn BalanceCalibration>, ConfigurationError> {
        match self {
            BalanceType::SixteenRod => Ok(Box::new(SixteenRodBalance)),
            BalanceType::EighteenRod => Ok(Box::new(EighteenRodBalance::default())),
            BalanceType::FourteenRod | BalanceType::Box => {
                Err(ConfigurationError::Unimplemented(self))
            }
        }
    }
}

impl FromStr for BalanceType {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fourteen-rod" | "14-rod" | "g14" => Ok(BalanceType::FourteenRod),
            "sixteen-rod" | "16-rod" | "g16" => Ok(BalanceType::SixteenRod),
            "eighteen-rod" | "18-rod" | "g18" => Ok(BalanceType::EighteenRod),
            "box" => Ok(BalanceType::Box),
            _ => Err(ConfigurationError::UnknownBalanceName(s.to_string())),
        }
    }
}

impl fmt::Display for BalanceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BalanceType::FourteenRod => write!(f, "14-rod balance"),
            BalanceType::SixteenRod => write!(f, "16-rod balance"),
            BalanceType::EighteenRod => write!(f, "18-rod balance"),
            BalanceType::Box => write!(f, "Box balance"),
        }
    }
}
