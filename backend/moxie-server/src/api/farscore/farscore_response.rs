use moxie_core::UserProfile;

use serde::{Deserialize, Serialize};

/// Profile response, flattened to the fields the frame renders
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarscoreResponse {
    pub user_data: UserProfile,
}
