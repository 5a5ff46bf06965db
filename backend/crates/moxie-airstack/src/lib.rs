//! Upstream clients: the Airstack GraphQL API and the Farcaster hub.
//!
//! Both clients are plain request/response mappers. They never retry and
//! never cache; each call is one HTTP round trip.

pub(crate) mod airstack;
pub(crate) mod error;
pub(crate) mod hub;


pub use airstack::client::AirstackClient;
pub use error::{Result as UpstreamResult, UpstreamError};
pub use hub::client::HubClient;
pub use hub::validated_message::ValidatedMessage;
