use crate::{EarningsAmount, Timeframe};

use serde::{Deserialize, Serialize};

/// Earnings for all three timeframes of one user
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EarningsSnapshot {
    #[serde(default)]
    pub today: EarningsAmount,
    #[serde(default)]
    pub weekly: EarningsAmount,
    #[serde(default)]
    pub lifetime: EarningsAmount,
}

impl EarningsSnapshot {
    pub fn get(&self, timeframe: Timeframe) -> &EarningsAmount {
        match timeframe {
            Timeframe::Today => &self.today,
            Timeframe::Weekly => &self.weekly,
            Timeframe::Lifetime => &self.lifetime,
        }
    }
}
