pub mod farscore;
pub mod farscore_query;
pub mod farscore_response;
