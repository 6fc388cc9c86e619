//! Trip-search form and results state.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::TripResult;

/// Shared search state: the form inputs plus the latest result set.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub from: String,
    pub to: String,
    /// Travel date as `YYYY-MM-DD`.
    pub date: String,
    pub results: Vec<TripResult>,
    /// Whether a search has completed since the last input change, to
    /// distinguish "no results" from "not searched yet".
    pub searched: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl SearchState {
    /// Swap origin and destination in place.
    pub fn swap_endpoints(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }
}

/// Validate and normalize the search form. Returns trimmed
/// `(from, to, date)` ready for the query string.
pub fn validate_search_input(from: &str, to: &str, date: &str) -> Result<(String, String, String), &'static str> {
    let from = from.trim();
    let to = to.trim();
    let date = date.trim();
    if from.is_empty() || to.is_empty() {
        return Err("Enter both origin and destination.");
    }
    if from.eq_ignore_ascii_case(to) {
        return Err("Origin and destination must differ.");
    }
    if !is_iso_date(date) {
        return Err("Pick a travel date.");
    }
    Ok((from.to_owned(), to.to_owned(), date.to_owned()))
}

/// Shallow `YYYY-MM-DD` shape check; the backend validates the calendar.
fn is_iso_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit())
}
