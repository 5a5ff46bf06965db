//! SVG cards used as frame images.

use crate::html::escape_xml;

use moxie_core::{EarningsSnapshot, Timeframe, UserProfile, format_number};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub const CARD_WIDTH: u32 = 1146;
pub const CARD_HEIGHT: u32 = 600;

const BACKGROUND: &str = "#fdf2f8";
const INK: &str = "#1e40af";
const PLACEHOLDER: &str = "--";
const NOT_AVAILABLE: &str = "N/A";

/// Encode an SVG document as an inline image URI
pub fn data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

/// Placeholder card shown before a user is resolved
pub fn splash_svg() -> String {
    let mut body = String::new();
    body.push_str(&format!(
        r#"<rect x="120" y="60" width="906" height="340" rx="16" fill="{BACKGROUND}" stroke="{INK}" stroke-width="4"/>"#
    ));
    body.push_str(&text(573, 120, 40, "airstack"));
    body.push_str(&text(573, 190, 44, "Far Score"));
    body.push_str(&text(573, 280, 72, PLACEHOLDER));
    body.push_str(&text(573, 360, 44, &format!("Rank: {}", PLACEHOLDER)));
    body.push_str(&format!(
        r#"<rect x="0" y="420" width="{CARD_WIDTH}" height="150" fill="{INK}" fill-opacity="0.8"/>"#
    ));
    body.push_str(&light_text(573, 485, 64, "Moxie Demo Frame"));
    body.push_str(&light_text(
        573,
        545,
        36,
        "Use this to build your Moxie Stats Frame.",
    ));

    document(&body)
}

/// Stats card for a resolved user
pub fn score_svg(profile: &UserProfile, earnings: &EarningsSnapshot) -> String {
    let mut body = String::new();

    // Header
    if !profile.profile_image_url.is_empty() {
        body.push_str(&format!(
            r#"<image href="{}" x="40" y="20" width="80" height="80"/>"#,
            escape_xml(&profile.profile_image_url)
        ));
    }
    body.push_str(&left_text(140, 55, 40, &profile.profile_display_name));
    body.push_str(&left_text(140, 90, 28, &format!("@{}", profile.username)));

    // Far Score
    body.push_str(&panel(40, 130, 380, 380));
    body.push_str(&text(230, 190, 40, "airstack"));
    body.push_str(&text(230, 260, 44, "Far Score"));
    body.push_str(&text(230, 350, 72, &profile.score_display()));
    body.push_str(&text(
        230,
        440,
        40,
        &format!("Rank: {}", profile.rank_display()),
    ));

    // Engagement Value
    let (like, reply, recast) = match profile.engagement() {
        Some(values) => (
            values.like_display(),
            values.reply_display(),
            values.recast_display(),
        ),
        None => (
            NOT_AVAILABLE.to_string(),
            NOT_AVAILABLE.to_string(),
            NOT_AVAILABLE.to_string(),
        ),
    };
    body.push_str(&column(
        460,
        "Engagement Value",
        &[("Like", like), ("Reply", reply), ("Recast/Quote", recast)],
    ));

    // Moxie Earnings
    let amounts: Vec<(&str, String)> = Timeframe::ALL
        .iter()
        .map(|tf| {
            (
                tf.label(),
                format_number(earnings.get(*tf).all_earnings_amount),
            )
        })
        .collect();
    body.push_str(&column(800, "Moxie Earnings", &amounts));

    // Footer
    body.push_str(&format!(
        r#"<rect x="0" y="540" width="{CARD_WIDTH}" height="60" fill="{INK}"/>"#
    ));
    body.push_str(&format!(
        r##"<text x="40" y="580" font-size="28" fill="#ffffff">Moxie Stats Demo Frame</text>"##
    ));

    document(&body)
}

fn document(body: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CARD_WIDTH}" height="{CARD_HEIGHT}" viewBox="0 0 {CARD_WIDTH} {CARD_HEIGHT}" font-family="sans-serif"><rect width="100%" height="100%" fill="{BACKGROUND}"/>{body}</svg>"#
    )
}

fn column<S: AsRef<str>>(x: u32, title: &str, rows: &[(&str, S)]) -> String {
    let mut out = panel(x, 130, 300, 380);
    out.push_str(&text(x + 150, 170, 30, title));

    for (i, (label, value)) in rows.iter().enumerate() {
        let y = 220 + (i as u32) * 100;
        out.push_str(&text(x + 150, y, 24, label));
        out.push_str(&text(x + 150, y + 45, 40, value.as_ref()));
    }

    out
}

fn panel(x: u32, y: u32, width: u32, height: u32) -> String {
    format!(
        r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" rx="12" fill="{BACKGROUND}" stroke="{INK}" stroke-width="3"/>"#
    )
}

fn text(x: u32, y: u32, size: u32, content: &str) -> String {
    format!(
        r#"<text x="{x}" y="{y}" font-size="{size}" fill="{INK}" text-anchor="middle">{}</text>"#,
        escape_xml(content)
    )
}

fn left_text(x: u32, y: u32, size: u32, content: &str) -> String {
    format!(
        r#"<text x="{x}" y="{y}" font-size="{size}" fill="{INK}">{}</text>"#,
        escape_xml(content)
    )
}

fn light_text(x: u32, y: u32, size: u32, content: &str) -> String {
    format!(
        r##"<text x="{x}" y="{y}" font-size="{size}" fill="#ffffff" text-anchor="middle">{}</text>"##,
        escape_xml(content)
    )
}
