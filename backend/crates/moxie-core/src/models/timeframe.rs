use std::fmt;

use serde::{Deserialize, Serialize};

/// Window over which Moxie earnings are aggregated upstream
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Timeframe {
    Today,
    Weekly,
    Lifetime,
}

impl Timeframe {
    /// All timeframes, in display order
    pub const ALL: [Timeframe; 3] = [Self::Today, Self::Weekly, Self::Lifetime];

    /// Upstream enum literal (`FarcasterMoxieEarningStatsTimeframe`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "TODAY",
            Self::Weekly => "WEEKLY",
            Self::Lifetime => "LIFETIME",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Weekly => "Weekly",
            Self::Lifetime => "Lifetime",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
