pub mod cast_action;
pub mod cast_action_metadata;
pub mod cast_action_response;
