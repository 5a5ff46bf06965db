use serde::Deserialize;

/// Query string of `GET /api/moxie-earnings`
#[derive(Debug, Deserialize)]
pub struct MoxieEarningsQuery {
    #[serde(rename = "entityId")]
    pub entity_id: Option<String>,
}
