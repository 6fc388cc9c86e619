use super::*;

#[test]
fn parse_hhmm_accepts_valid_times() {
    assert_eq!(parse_hhmm("00:00"), Some(0));
    assert_eq!(parse_hhmm("08:30"), Some(510));
    assert_eq!(parse_hhmm("23:59"), Some(1439));
}

#[test]
fn parse_hhmm_rejects_out_of_range_and_malformed() {
    assert_eq!(parse_hhmm("24:00"), None);
    assert_eq!(parse_hhmm("12:60"), None);
    assert_eq!(parse_hhmm("8:30"), None);
    assert_eq!(parse_hhmm("0830"), None);
    assert_eq!(parse_hhmm(""), None);
}

#[test]
fn duration_handles_same_day_and_overnight() {
    assert_eq!(format_duration("08:30", "12:15").as_deref(), Some("3h 45m"));
    assert_eq!(format_duration("22:00", "06:00").as_deref(), Some("8h 00m"));
    assert_eq!(format_duration("bad", "06:00"), None);
}

#[test]
fn price_renders_minor_units_with_two_decimals() {
    assert_eq!(format_price(1250), "$12.50");
    assert_eq!(format_price(5), "$0.05");
    assert_eq!(format_price(0), "$0.00");
    assert_eq!(format_price(-300), "-$3.00");
}

#[test]
fn parse_price_accepts_common_shapes() {
    assert_eq!(parse_price("12.50"), Some(1250));
    assert_eq!(parse_price("12"), Some(1200));
    assert_eq!(parse_price("12.5"), Some(1250));
    assert_eq!(parse_price(" $9.99 "), Some(999));
    assert_eq!(parse_price("0.05"), Some(5));
}

#[test]
fn parse_price_rejects_malformed_input() {
    assert_eq!(parse_price(""), None);
    assert_eq!(parse_price("."), None);
    assert_eq!(parse_price("12.345"), None);
    assert_eq!(parse_price("twelve"), None);
}

#[test]
fn format_days_orders_by_week_and_labels() {
    let days = vec!["FRI".to_owned(), "MON".to_owned()];
    assert_eq!(format_days(&days), "Mon, Fri");
    assert_eq!(format_days(&[]), "");
}
