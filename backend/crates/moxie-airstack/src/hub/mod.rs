pub(crate) mod client;
pub(crate) mod response;
pub(crate) mod validated_message;
