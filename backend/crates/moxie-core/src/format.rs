//! Number formatting for frame cards.

const BILLION: f64 = 1_000_000_000.0;
const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

/// Abbreviate an amount with a unit suffix and two decimals.
///
/// `1234567.0` becomes `"1.23M"`, `1500.0` becomes `"1.50K"`, `12.3456`
/// becomes `"12.35"`.
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();

    if magnitude >= BILLION {
        format!("{:.2}B", value / BILLION)
    } else if magnitude >= MILLION {
        format!("{:.2}M", value / MILLION)
    } else if magnitude >= THOUSAND {
        format!("{:.2}K", value / THOUSAND)
    } else {
        format!("{:.2}", value)
    }
}

/// Fixed two-decimal rendering used for scores and engagement values
pub fn format_score(value: f64) -> String {
    format!("{:.2}", value)
}
