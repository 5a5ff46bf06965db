//! Frame vNext document model.

use crate::html::escape_html;

pub const FRAME_VERSION: &str = "vNext";
pub const DEFAULT_ASPECT_RATIO: &str = "1.91:1";

/// Clients render at most four buttons
pub const MAX_BUTTONS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Sends a signed message to the target and renders the returned frame
    Post,
    /// Opens the target in a browser
    Link,
}

impl ButtonAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonAction::Post => "post",
            ButtonAction::Link => "link",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameButton {
    pub label: String,
    pub action: ButtonAction,
    pub target: String,
}

impl FrameButton {
    pub fn post(label: &str, target: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            action: ButtonAction::Post,
            target: target.into(),
        }
    }

    pub fn link(label: &str, target: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            action: ButtonAction::Link,
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub image: String,
    pub aspect_ratio: &'static str,
    pub post_url: String,
    pub state: Option<String>,
    pub buttons: Vec<FrameButton>,
}

impl Frame {
    pub fn new(image: String, post_url: String) -> Self {
        Self {
            image,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            post_url,
            state: None,
            buttons: Vec::new(),
        }
    }

    pub fn with_state(mut self, state: Option<String>) -> Self {
        self.state = state;
        self
    }

    pub fn with_buttons(mut self, buttons: Vec<FrameButton>) -> Self {
        self.buttons = buttons;
        self
    }

    /// `(property, content)` pairs in document order. Buttons are numbered from 1.
    pub fn meta_tags(&self) -> Vec<(String, String)> {
        let mut tags = vec![
            ("fc:frame".to_string(), FRAME_VERSION.to_string()),
            ("fc:frame:image".to_string(), self.image.clone()),
            (
                "fc:frame:image:aspect_ratio".to_string(),
                self.aspect_ratio.to_string(),
            ),
            ("og:image".to_string(), self.image.clone()),
            ("fc:frame:post_url".to_string(), self.post_url.clone()),
        ];

        if let Some(state) = &self.state {
            tags.push(("fc:frame:state".to_string(), state.clone()));
        }

        for (i, button) in self.buttons.iter().take(MAX_BUTTONS).enumerate() {
            let key = format!("fc:frame:button:{}", i + 1);
            tags.push((key.clone(), button.label.clone()));
            tags.push((format!("{}:action", key), button.action.as_str().to_string()));
            tags.push((format!("{}:target", key), button.target.clone()));
        }

        tags
    }

    /// `<meta>` elements, one per line
    pub fn meta_html(&self) -> String {
        self.meta_tags()
            .iter()
            .map(|(property, content)| {
                format!(
                    r#"<meta property="{}" content="{}"/>"#,
                    escape_html(property),
                    escape_html(content)
                )
            })
            .collect::<Vec<_>>()
            .join("\n    ")
    }

    /// Standalone document returned by the frame route
    pub fn to_html(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8"/>
    {}
  </head>
  <body></body>
</html>
"#,
            self.meta_html()
        )
    }
}
