//! Domain types shared by the Moxie stats frame crates.
//!
//! Everything here is request-scoped: profiles and earnings are produced from
//! an upstream response, rendered once, and dropped.

pub mod engagement;
pub mod error;
pub mod format;
pub mod models;

#[cfg(test)]
mod tests;

pub use engagement::EngagementValues;
pub use error::{CoreError, Result};
pub use format::{format_number, format_score};
pub use models::cast_id::CastId;
pub use models::earnings_amount::EarningsAmount;
pub use models::earnings_snapshot::EarningsSnapshot;
pub use models::frame_state::FrameState;
pub use models::timeframe::Timeframe;
pub use models::user_profile::UserProfile;
