mod timeframe;
mod user_profile;
