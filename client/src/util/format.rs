//! Display formatting for timestamps and counters.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::macros::format_description;
use time::{Date, PrimitiveDateTime};

/// Render a backend timestamp as `Jun 20, 2025`.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.fff][Z|±hh:mm]` and the
/// space-separated variant. Unparseable input is returned unchanged.
pub fn short_date(raw: &str) -> String {
    let trimmed = raw.trim();
    match parse_date(trimmed) {
        Some(date) => {
            let fmt = format_description!("[month repr:short] [day padding:none], [year]");
            date.format(&fmt).unwrap_or_else(|_| trimmed.to_owned())
        }
        None => trimmed.to_owned(),
    }
}

fn parse_date(raw: &str) -> Option<Date> {
    let date_part = raw.get(..10)?;
    let date_fmt = format_description!("[year]-[month]-[day]");
    let date = Date::parse(date_part, &date_fmt).ok()?;
    if raw.len() > 10 {
        let rest = &raw[10..];
        if !rest.starts_with(['T', ' ']) {
            return None;
        }
        // Validate the time portion when it carries hours and minutes.
        let time_part = rest[1..].get(..5)?;
        let dt_fmt = format_description!("[year]-[month]-[day] [hour]:[minute]");
        PrimitiveDateTime::parse(&format!("{date_part} {time_part}"), &dt_fmt).ok()?;
    }
    Some(date)
}

/// Thousands-separated counter (`1,204`).
pub fn count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Counter that may not have loaded; `-` when absent.
pub fn count_or_dash(value: Option<u64>) -> String {
    value.map_or_else(|| "-".to_owned(), count)
}

/// Optional field with a placeholder for missing or blank values.
pub fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => placeholder.to_owned(),
    }
}
