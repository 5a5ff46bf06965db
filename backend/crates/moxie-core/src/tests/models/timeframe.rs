use crate::Timeframe;

#[test]
fn test_timeframe_as_str() {
    assert_eq!(Timeframe::Today.as_str(), "TODAY");
    assert_eq!(Timeframe::Weekly.as_str(), "WEEKLY");
    assert_eq!(Timeframe::Lifetime.as_str(), "LIFETIME");
}

#[test]
fn test_timeframe_labels_in_display_order() {
    let labels: Vec<&str> = Timeframe::ALL.iter().map(Timeframe::label).collect();
    assert_eq!(labels, ["Today", "Weekly", "Lifetime"]);
}

#[test]
fn test_timeframe_serializes_as_upstream_literal() {
    let json = serde_json::to_string(&Timeframe::Lifetime).unwrap();
    assert_eq!(json, "\"LIFETIME\"");
}
