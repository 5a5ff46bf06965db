use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Moxie earnings for a single timeframe.
///
/// Every field defaults to zero: a user with no earnings rows is a valid
/// (new or inactive) user, not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsAmount {
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub all_earnings_amount: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub cast_earnings_amount: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub frame_dev_earnings_amount: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub other_earnings_amount: f64,
}

impl EarningsAmount {
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Accept an amount as a JSON number, a numeric string, or null.
///
/// Null and unparseable strings become `0.0`.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}
