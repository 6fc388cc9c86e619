use super::*;
use crate::net::types::SeatType;

#[test]
fn sub_resource_endpoints_nest_under_route() {
    assert_eq!(route_endpoint("r1"), "/operator/routes/r1");
    assert_eq!(segments_endpoint("r1"), "/operator/routes/r1/segments");
    assert_eq!(fares_endpoint("r1"), "/operator/routes/r1/fares");
    assert_eq!(schedule_endpoint("r1"), "/operator/routes/r1/schedule");
}

#[test]
fn route_payload_trims_and_keeps_stop_order() {
    let draft = RouteDraft {
        name: " Coastal Express ".to_owned(),
        origin: "Porto".to_owned(),
        destination: "Lisbon".to_owned(),
        stops: vec![" Coimbra".to_owned(), "Leiria ".to_owned()],
        ..RouteDraft::default()
    };
    assert_eq!(
        route_payload(&draft),
        serde_json::json!({
            "name": "Coastal Express",
            "origin": "Porto",
            "destination": "Lisbon",
            "stops": ["Coimbra", "Leiria"],
        })
    );
}

#[test]
fn segment_payload_carries_position() {
    let segment = SegmentDraft {
        origin_stop: "Porto".to_owned(),
        destination_stop: "Coimbra".to_owned(),
    };
    assert_eq!(
        segment_payload(&segment, 0),
        serde_json::json!({
            "originStop": "Porto",
            "destinationStop": "Coimbra",
            "position": 0,
        })
    );
}

#[test]
fn fare_payload_uses_server_segment_id_not_draft_index() {
    assert_eq!(
        fare_payload("seg-9", SeatType::Sleeper, 2400),
        serde_json::json!({
            "segmentId": "seg-9",
            "seatType": "SLEEPER",
            "amountMinor": 2400,
        })
    );
}

#[test]
fn schedule_payload_carries_bus_time_and_days() {
    let draft = RouteDraft {
        bus_id: "b1".to_owned(),
        departure_time: "08:30".to_owned(),
        days_of_week: vec!["MON".to_owned(), "FRI".to_owned()],
        ..RouteDraft::default()
    };
    assert_eq!(
        schedule_payload(&draft),
        serde_json::json!({
            "busId": "b1",
            "departureTime": "08:30",
            "daysOfWeek": ["MON", "FRI"],
        })
    );
}

#[test]
fn wizard_error_is_labelled_with_the_failing_step() {
    let err = WizardError::at(
        WizardStage::Segments,
        &ApiError::Api {
            status: 400,
            message: "Stop names must be unique".to_owned(),
        },
    );
    assert_eq!(err.step, WizardStage::Segments);
    assert_eq!(err.to_string(), "Creating the segments failed: Stop names must be unique");
}
