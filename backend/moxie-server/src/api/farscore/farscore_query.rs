use serde::Deserialize;

/// Query string of `GET /api/farscore`
#[derive(Debug, Deserialize)]
pub struct FarscoreQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}
