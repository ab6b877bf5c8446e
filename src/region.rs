//! Regional labor-rate defaults.
//!
//! Selecting a region seeds the hourly rate. The table is fixed; users who
//! want a different rate override it after choosing a region.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::CalculatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RegionId {
    #[default]
    Usa,
    Europe,
    Gcc,
    Asia,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Region {
    pub id: RegionId,
    pub name: &'static str,
    /// Default USD per hour
    pub hourly_rate: f64,
    pub flag: &'static str,
}

pub static REGIONS: [Region; 4] = [
    Region {
        id: RegionId::Usa,
        name: "USA",
        hourly_rate: 35.0,
        flag: "🇺🇸",
    },
    Region {
        id: RegionId::Europe,
        name: "Europe",
        hourly_rate: 30.0,
        flag: "🇪🇺",
    },
    Region {
        id: RegionId::Gcc,
        name: "GCC",
        hourly_rate: 25.0,
        flag: "🇸🇦",
    },
    Region {
        id: RegionId::Asia,
        name: "Asia",
        hourly_rate: 20.0,
        flag: "🇨🇳",
    },
];

impl RegionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usa => "usa",
            Self::Europe => "europe",
            Self::Gcc => "gcc",
            Self::Asia => "asia",
        }
    }

    pub fn region(&self) -> &'static Region {
        match self {
            Self::Usa => &REGIONS[0],
            Self::Europe => &REGIONS[1],
            Self::Gcc => &REGIONS[2],
            Self::Asia => &REGIONS[3],
        }
    }

    pub fn hourly_rate(&self) -> f64 {
        self.region().hourly_rate
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionId {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        REGIONS
            .iter()
            .map(|r| r.id)
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| CalculatorError::UnknownRegion(s.to_string()))
    }
}

/// Hourly-rate default for a region identifier such as `"gcc"`.
pub fn resolve_hourly_rate(id: &str) -> Result<f64, CalculatorError> {
    id.parse::<RegionId>().map(|region| region.hourly_rate())
}
