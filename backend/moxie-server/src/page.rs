//! Landing page. Sharing `/` in a client unfurls the splash frame.

use crate::AppState;
use crate::frames::links::FrameLinks;
use crate::frames::view::FrameView;

use axum::{extract::State, response::Html};

pub const PAGE_TITLE: &str = "Moxie Stats Frame Example";

/// GET /
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let links = FrameLinks::new(&state.base_url);
    let frame = FrameView::Splash.render(&links, None);

    Html(format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8"/>
    <title>{title}</title>
    <meta property="og:title" content="{title}"/>
    {meta}
  </head>
  <body>
    <h1>{title}</h1>
  </body>
</html>
"#,
        title = PAGE_TITLE,
        meta = frame.meta_html()
    ))
}
