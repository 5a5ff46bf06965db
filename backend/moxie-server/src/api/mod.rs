pub mod cast_action;
pub mod error;
pub mod farscore;
pub mod moxie_earnings;
