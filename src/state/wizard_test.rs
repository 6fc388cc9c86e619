use super::*;

fn draft() -> RouteDraft {
    RouteDraft {
        name: "Coastal Express".to_owned(),
        origin: "Porto".to_owned(),
        destination: "Lisbon".to_owned(),
        stops: vec!["Coimbra".to_owned()],
        fares: vec![
            FareDraft {
                segment_index: 0,
                seat_type: SeatType::Seater,
                amount_minor: 1200,
            },
            FareDraft {
                segment_index: 1,
                seat_type: SeatType::Seater,
                amount_minor: 1500,
            },
        ],
        bus_id: "b1".to_owned(),
        departure_time: "08:30".to_owned(),
        days_of_week: vec!["MON".to_owned(), "FRI".to_owned()],
    }
}

#[test]
fn stage_order_is_route_segments_fares_schedule() {
    assert_eq!(WizardStage::Route.next(), Some(WizardStage::Segments));
    assert_eq!(WizardStage::Segments.next(), Some(WizardStage::Fares));
    assert_eq!(WizardStage::Fares.next(), Some(WizardStage::Schedule));
    assert_eq!(WizardStage::Schedule.next(), None);
    assert_eq!(WizardStage::Route.prev(), None);
    assert_eq!(WizardStage::Schedule.prev(), Some(WizardStage::Fares));
}

#[test]
fn segments_pair_consecutive_stops() {
    let segments = segments_from_stops("Porto", &["Coimbra".to_owned()], "Lisbon");
    assert_eq!(
        segments,
        vec![
            SegmentDraft {
                origin_stop: "Porto".to_owned(),
                destination_stop: "Coimbra".to_owned(),
            },
            SegmentDraft {
                origin_stop: "Coimbra".to_owned(),
                destination_stop: "Lisbon".to_owned(),
            },
        ]
    );
}

#[test]
fn no_intermediate_stops_yields_single_segment() {
    let segments = segments_from_stops("Porto", &[], "Lisbon");
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].origin_stop, "Porto");
    assert_eq!(segments[0].destination_stop, "Lisbon");
}

#[test]
fn unfared_segments_lists_gaps_only() {
    let mut d = draft();
    assert!(unfared_segments(&d).is_empty());
    d.fares.retain(|fare| fare.segment_index != 1);
    assert_eq!(unfared_segments(&d), vec![1]);
}

#[test]
fn route_stage_requires_distinct_endpoints() {
    let mut d = draft();
    assert!(validate_stage(WizardStage::Route, &d).is_ok());
    d.destination = "Porto".to_owned();
    assert!(validate_stage(WizardStage::Route, &d).is_err());
    d.destination = String::new();
    assert!(validate_stage(WizardStage::Route, &d).is_err());
}

#[test]
fn segments_stage_rejects_blank_stops() {
    let mut d = draft();
    d.stops.push("  ".to_owned());
    assert!(validate_stage(WizardStage::Segments, &d).is_err());
}

#[test]
fn fares_stage_requires_every_segment_fared_and_positive() {
    let mut d = draft();
    assert!(validate_stage(WizardStage::Fares, &d).is_ok());
    d.fares[0].amount_minor = 0;
    assert!(validate_stage(WizardStage::Fares, &d).is_err());
    d.fares.clear();
    assert!(validate_stage(WizardStage::Fares, &d).is_err());
}

#[test]
fn schedule_stage_validates_bus_time_and_days() {
    let mut d = draft();
    assert!(validate_stage(WizardStage::Schedule, &d).is_ok());
    d.departure_time = "25:99".to_owned();
    assert!(validate_stage(WizardStage::Schedule, &d).is_err());
    d.departure_time = "08:30".to_owned();
    d.bus_id = String::new();
    assert!(validate_stage(WizardStage::Schedule, &d).is_err());
    d.bus_id = "b1".to_owned();
    d.days_of_week.clear();
    assert!(validate_stage(WizardStage::Schedule, &d).is_err());
}

#[test]
fn set_fare_upserts_by_segment_and_seat_type() {
    let mut d = draft();
    d.set_fare(0, SeatType::Seater, 1300);
    assert_eq!(d.fare_amount(0, SeatType::Seater), Some(1300));
    assert_eq!(d.fares.len(), 2);

    d.set_fare(0, SeatType::Sleeper, 2000);
    assert_eq!(d.fare_amount(0, SeatType::Sleeper), Some(2000));
    assert_eq!(d.fares.len(), 3);

    d.clear_fare(0, SeatType::Sleeper);
    assert_eq!(d.fare_amount(0, SeatType::Sleeper), None);
}

#[test]
fn validate_all_reports_first_failing_stage() {
    let mut d = draft();
    assert!(validate_all(&d).is_ok());
    d.fares.clear();
    let message = validate_all(&d).unwrap_err();
    assert!(message.contains("fare"));
}

#[test]
fn draft_round_trips_through_json_for_persistence() {
    let d = draft();
    let raw = serde_json::to_string(&d).unwrap();
    let back: RouteDraft = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, d);
}
