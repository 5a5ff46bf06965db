use serde::{Deserialize, Serialize};

/// Identifies a cast by its author and hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastId {
    pub fid: u64,
    pub hash: String,
}
