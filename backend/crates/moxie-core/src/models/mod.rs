pub mod cast_id;
pub mod earnings_amount;
pub mod earnings_snapshot;
pub mod frame_state;
pub mod timeframe;
pub mod user_profile;
