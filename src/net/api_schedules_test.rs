use super::*;

#[test]
fn schedule_endpoint_formats_expected_path() {
    assert_eq!(schedule_endpoint("s7"), "/operator/schedules/s7");
}

#[test]
fn update_payload_carries_time_days_and_active_flag() {
    let draft = ScheduleDraft {
        departure_time: "21:15".to_owned(),
        days_of_week: vec!["SAT".to_owned(), "SUN".to_owned()],
        active: false,
    };
    assert_eq!(
        schedule_update_payload(&draft),
        serde_json::json!({
            "departureTime": "21:15",
            "daysOfWeek": ["SAT", "SUN"],
            "active": false,
        })
    );
}
