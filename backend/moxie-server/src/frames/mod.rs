pub mod card;
pub mod frame;
pub mod frame_payload;
pub mod frame_query;
pub mod frames;
pub mod links;
pub mod message_context;
pub mod resolve;
pub mod score_client;
pub mod view;
