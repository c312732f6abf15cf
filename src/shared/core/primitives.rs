use chrono::{DateTime, Datelike, Utc};

/// Parse an operator-entered amount. Blank, non-numeric and non-finite input yield `None`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// `Some(trimmed)` for non-blank text, `None` otherwise.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn capitalize(value: &str) -> String {
    let mut chars = value.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// English month name and four digit year of an epoch-millisecond timestamp (UTC).
pub fn month_and_year(epoch_millis: i64) -> Option<(String, i32)> {
    let at: DateTime<Utc> = DateTime::from_timestamp_millis(epoch_millis)?;
    Some((at.format("%B").to_string(), at.year()))
}
