use serde::Deserialize;

/// Query string of `/frames`
#[derive(Debug, Default, Deserialize)]
pub struct FrameQuery {
    pub userfid: Option<String>,
}
