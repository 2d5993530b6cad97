use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder label used when an entry carries no usable date.
pub const UNKNOWN_DATE_LABEL: &str = "Unknown";

/// Single chart point embedded into the rendered dashboard page.
///
/// Field order matters: the serialized form is substituted verbatim into
/// the page template and consumed by the chart script as `{date, percentage}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub date: String,
    pub percentage: f64,
}

impl ChartPoint {
    /// Map one raw history entry to a chart point.
    ///
    /// The date comes from the entry's `timestamp` field, falling back to
    /// `date`, falling back to the placeholder label, and is embedded
    /// verbatim. The percentage defaults to zero when absent or
    /// non-numeric. Entries that are not objects map to the placeholder
    /// point.
    pub fn from_entry(entry: &Value) -> Self {
        let date = entry
            .get("timestamp")
            .or_else(|| entry.get("date"))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| UNKNOWN_DATE_LABEL.to_string());
        let percentage = entry
            .get("percentage")
            .and_then(Value::as_f64)
            .unwrap_or(0.0);

        Self {
            date,
            percentage: round_percentage(percentage),
        }
    }
}

/// Round a coverage percentage to two decimal places for display.
/// Ties round to even so representable halves stay stable across runs.
pub fn round_percentage(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
