use serde::Serialize;

/// Tells the client to open a frame instead of showing a toast
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastActionFrameResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub frame_url: String,
}

impl CastActionFrameResponse {
    pub fn new(frame_url: String) -> Self {
        Self {
            kind: "frame".to_string(),
            frame_url,
        }
    }
}

/// Error shape cast action clients display to the user
#[derive(Debug, Serialize)]
pub struct CastActionMessage {
    pub message: String,
}
