pub(crate) mod client;
pub(crate) mod normalize;
pub(crate) mod queries;
pub(crate) mod response;
