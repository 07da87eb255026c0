use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Placeholder shown for sponsors without a usable (or public) name.
pub const PRIVATE_SPONSOR_NAME: &str = "Private Sponsor";

/// Placeholder for cells with no meaningful value.
pub const DASH: &str = "-";

/// Escape the five XML special characters.
pub fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Cut `name` to `max_chars` characters, appending `…` when something was dropped.
pub fn truncate_name(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        return name.to_owned();
    }
    let mut out: String = name.chars().take(max_chars).collect();
    out.push('…');
    out
}

/// `$` + amount; integers unadorned, fractions with at most two decimals and no trailing zeros.
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0".to_owned();
    }
    if amount.fract() == 0.0 {
        return format!("${amount:.0}");
    }
    let fixed = format!("{amount:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("${trimmed}")
}

/// Parse the date shapes providers send: RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.f]`, or `YYYY-MM-DD`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// `Mon YYYY` for a parseable join date, [`DASH`] otherwise.
pub fn format_since(created_at: Option<&str>) -> String {
    created_at
        .and_then(parse_timestamp)
        .map(|dt| dt.format("%b %Y").to_string())
        .unwrap_or_else(|| DASH.to_owned())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/text.rs"]
mod tests;
