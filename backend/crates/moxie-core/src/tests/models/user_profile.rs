use crate::UserProfile;

fn profile(score: Option<f64>, rank: Option<i64>) -> UserProfile {
    UserProfile {
        fid: "602".into(),
        name: "Betashop".into(),
        username: "betashop.eth".into(),
        profile_display_name: "Betashop".into(),
        social_capital_score: score,
        social_capital_rank: rank,
        profile_image_url: String::new(),
    }
}

#[test]
fn test_score_and_rank_display() {
    let p = profile(Some(42.5), Some(17));

    assert_eq!(p.score_display(), "42.50");
    assert_eq!(p.rank_display(), "17");
}

#[test]
fn test_missing_social_capital_displays_not_available() {
    let p = profile(None, None);

    assert_eq!(p.score_display(), "N/A");
    assert_eq!(p.rank_display(), "N/A");
    assert!(p.engagement().is_none());
}

#[test]
fn test_profile_serializes_camel_case() {
    let json = serde_json::to_value(profile(Some(1.0), Some(2))).unwrap();

    assert_eq!(json["profileDisplayName"], "Betashop");
    assert_eq!(json["socialCapitalRank"], 2);
}
