use super::*;

#[test]
fn fare_input_value_renders_minor_units() {
    assert_eq!(fare_input_value(Some(1250)), "12.50");
    assert_eq!(fare_input_value(Some(5)), "0.05");
    assert_eq!(fare_input_value(None), "");
}

#[test]
fn toggle_day_adds_then_removes() {
    let mut days = vec!["MON".to_owned()];
    toggle_day(&mut days, "FRI");
    assert_eq!(days, vec!["MON".to_owned(), "FRI".to_owned()]);
    toggle_day(&mut days, "MON");
    assert_eq!(days, vec!["FRI".to_owned()]);
}
