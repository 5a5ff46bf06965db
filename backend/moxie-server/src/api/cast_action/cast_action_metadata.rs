use serde::Serialize;

pub const CAST_ACTION_NAME: &str = "Moxie Demo Frame";
pub const CAST_ACTION_ICON: &str = "pulse";
pub const CAST_ACTION_DESCRIPTION: &str = "Use this as a base to build moxie stats frames";

/// Descriptor a client fetches before installing the cast action
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastActionMetadata {
    pub name: String,
    pub icon: String,
    pub description: String,
    pub about_url: String,
    pub action: CastActionKind,
}

#[derive(Debug, Serialize)]
pub struct CastActionKind {
    #[serde(rename = "type")]
    pub kind: String,
}

impl CastActionMetadata {
    pub fn new(about_url: &str) -> Self {
        Self {
            name: CAST_ACTION_NAME.to_string(),
            icon: CAST_ACTION_ICON.to_string(),
            description: CAST_ACTION_DESCRIPTION.to_string(),
            about_url: about_url.to_string(),
            action: CastActionKind {
                kind: "post".to_string(),
            },
        }
    }
}
