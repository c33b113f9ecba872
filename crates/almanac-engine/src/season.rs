//! The four fixed-length seasons of the in-game year.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AlmanacError;

/// Number of days in every season, every year.
pub const SEASON_DAYS: u32 = 31;

/// Number of seasons in a year.
pub const SEASONS_PER_YEAR: u32 = 4;

/// A season of the in-game year, in fixed cyclic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// All seasons in calendar order.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    /// 0-based position within the year (Spring = 0).
    pub fn index(self) -> usize {
        match self {
            Season::Spring => 0,
            Season::Summer => 1,
            Season::Autumn => 2,
            Season::Winter => 3,
        }
    }

    /// Length of the season in days. Always [`SEASON_DAYS`].
    pub fn days(self) -> u32 {
        SEASON_DAYS
    }

    /// The following season. Winter wraps to Spring.
    pub fn next(self) -> Season {
        Season::ALL[(self.index() + 1) % Season::ALL.len()]
    }

    /// The preceding season. Spring wraps to Winter.
    pub fn previous(self) -> Season {
        Season::ALL[(self.index() + Season::ALL.len() - 1) % Season::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Season {
    type Err = AlmanacError;

    /// Parse a season name, case-insensitively. "Fall" is accepted for Autumn.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "autumn" | "fall" => Ok(Season::Autumn),
            "winter" => Ok(Season::Winter),
            _ => Err(AlmanacError::InvalidSeason(format!("'{}'", s.trim()))),
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
