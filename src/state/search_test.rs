use super::*;

#[test]
fn validate_trims_and_accepts_complete_input() {
    assert_eq!(
        validate_search_input(" Porto ", "Lisbon", "2026-08-07"),
        Ok(("Porto".to_owned(), "Lisbon".to_owned(), "2026-08-07".to_owned()))
    );
}

#[test]
fn validate_requires_both_endpoints() {
    assert_eq!(
        validate_search_input("", "Lisbon", "2026-08-07"),
        Err("Enter both origin and destination.")
    );
    assert_eq!(
        validate_search_input("Porto", "  ", "2026-08-07"),
        Err("Enter both origin and destination.")
    );
}

#[test]
fn validate_rejects_same_city_ignoring_case() {
    assert_eq!(
        validate_search_input("porto", "PORTO", "2026-08-07"),
        Err("Origin and destination must differ.")
    );
}

#[test]
fn validate_rejects_malformed_dates() {
    assert!(validate_search_input("Porto", "Lisbon", "").is_err());
    assert!(validate_search_input("Porto", "Lisbon", "07-08-2026").is_err());
    assert!(validate_search_input("Porto", "Lisbon", "2026-8-7").is_err());
}

#[test]
fn swap_endpoints_exchanges_cities() {
    let mut state = SearchState {
        from: "Porto".to_owned(),
        to: "Lisbon".to_owned(),
        ..SearchState::default()
    };
    state.swap_endpoints();
    assert_eq!(state.from, "Lisbon");
    assert_eq!(state.to, "Porto");
}
