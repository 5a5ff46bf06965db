use crate::format_score;

use serde::Serialize;

// Presentation multipliers applied to the Far Score.
pub const LIKE_MULTIPLIER: f64 = 1.0;
pub const REPLY_MULTIPLIER: f64 = 3.0;
pub const RECAST_MULTIPLIER: f64 = 6.0;

/// How much a like, reply, or recast from this account is worth
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngagementValues {
    pub like: f64,
    pub reply: f64,
    pub recast: f64,
}

impl EngagementValues {
    /// Multiples are taken of the score rounded to two decimals, as displayed
    pub fn from_score(score: f64) -> Self {
        let score = (score * 100.0).round() / 100.0;
        Self {
            like: score * LIKE_MULTIPLIER,
            reply: score * REPLY_MULTIPLIER,
            recast: score * RECAST_MULTIPLIER,
        }
    }

    pub fn like_display(&self) -> String {
        format_score(self.like)
    }

    pub fn reply_display(&self) -> String {
        format_score(self.reply)
    }

    pub fn recast_display(&self) -> String {
        format_score(self.recast)
    }
}
