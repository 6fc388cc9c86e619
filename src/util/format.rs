//! Display formatting for times, durations, prices, and day sets.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Parse an `HH:MM` 24-hour string into minutes since midnight.
pub fn parse_hhmm(value: &str) -> Option<u32> {
    let (hours, minutes) = value.split_once(':')?;
    if hours.len() != 2 || minutes.len() != 2 {
        return None;
    }
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Human duration between two `HH:MM` times, treating an arrival earlier
/// than the departure as next-day.
pub fn format_duration(departure: &str, arrival: &str) -> Option<String> {
    let dep = parse_hhmm(departure)?;
    let arr = parse_hhmm(arrival)?;
    let minutes = if arr >= dep { arr - dep } else { arr + 24 * 60 - dep };
    Some(format!("{}h {:02}m", minutes / 60, minutes % 60))
}

/// Render a minor-unit amount as a price string, e.g. `1250` -> `"$12.50"`.
pub fn format_price(amount_minor: i64) -> String {
    let sign = if amount_minor < 0 { "-" } else { "" };
    let magnitude = amount_minor.unsigned_abs();
    format!("{sign}${}.{:02}", magnitude / 100, magnitude % 100)
}

/// Parse a price input like `"12.50"` or `"12"` into minor units.
pub fn parse_price(value: &str) -> Option<i64> {
    let value = value.trim().trim_start_matches('$');
    let (whole, fraction) = match value.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (value, ""),
    };
    if whole.is_empty() || fraction.len() > 2 {
        return None;
    }
    let whole: i64 = whole.parse().ok()?;
    let fraction_minor = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().ok()? * 10,
        _ => fraction.parse::<i64>().ok()?,
    };
    Some(whole * 100 + fraction_minor)
}

/// The week's `MON`..`SUN` labels in display order.
pub const WEEK_DAYS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

/// Short human label for a wire day code.
pub fn day_label(day: &str) -> &str {
    match day {
        "MON" => "Mon",
        "TUE" => "Tue",
        "WED" => "Wed",
        "THU" => "Thu",
        "FRI" => "Fri",
        "SAT" => "Sat",
        "SUN" => "Sun",
        other => other,
    }
}

/// Comma-joined day labels in week order regardless of input order.
pub fn format_days(days: &[String]) -> String {
    WEEK_DAYS
        .iter()
        .filter(|day| days.iter().any(|d| d == *day))
        .map(|day| day_label(day))
        .collect::<Vec<_>>()
        .join(", ")
}
