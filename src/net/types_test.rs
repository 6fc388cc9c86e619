use super::*;

#[test]
fn primary_role_prefers_admin_over_operator() {
    let profile = UserProfile {
        id: "u1".to_owned(),
        name: "Dee".to_owned(),
        email: "dee@example.com".to_owned(),
        roles: vec!["OPERATOR".to_owned(), "ADMIN".to_owned()],
    };
    assert_eq!(profile.primary_role(), Role::Admin);
}

#[test]
fn primary_role_prefers_operator_over_user() {
    assert_eq!(Role::from_labels(&["USER", "OPERATOR"]), Role::Operator);
}

#[test]
fn primary_role_defaults_to_user_for_empty_or_unknown_labels() {
    assert_eq!(Role::from_labels::<&str>(&[]), Role::User);
    assert_eq!(Role::from_labels(&["SUPPORT"]), Role::User);
}

#[test]
fn can_operate_matches_operator_and_admin_only() {
    assert!(Role::Admin.can_operate());
    assert!(Role::Operator.can_operate());
    assert!(!Role::User.can_operate());
}

#[test]
fn auth_tokens_deserialize_from_camel_case() {
    let tokens: AuthTokens =
        serde_json::from_str(r#"{"accessToken":"A1","refreshToken":"R1"}"#).unwrap();
    assert_eq!(tokens.access_token, "A1");
    assert_eq!(tokens.refresh_token, "R1");
}

#[test]
fn refresh_response_tolerates_missing_rotation() {
    let resp: RefreshResponse = serde_json::from_str(r#"{"accessToken":"A2"}"#).unwrap();
    assert_eq!(resp.access_token, "A2");
    assert_eq!(resp.refresh_token, None);
}

#[test]
fn trip_result_deserializes_with_defaulted_collections() {
    let trip: TripResult = serde_json::from_str(
        r#"{
            "scheduleId": "s1",
            "routeName": "Coastal Express",
            "origin": "Porto",
            "destination": "Lisbon",
            "departureTime": "08:30",
            "arrivalTime": "12:15"
        }"#,
    )
    .unwrap();
    assert_eq!(trip.schedule_id, "s1");
    assert!(trip.seat_types.is_empty());
    assert!(trip.amenity_ids.is_empty());
}

#[test]
fn seat_type_uses_screaming_snake_case_on_the_wire() {
    assert_eq!(serde_json::to_string(&SeatType::Sleeper).unwrap(), r#""SLEEPER""#);
    let quote: FareQuote =
        serde_json::from_str(r#"{"seatType":"SEATER","amountMinor":1250}"#).unwrap();
    assert_eq!(quote.seat_type, SeatType::Seater);
    assert_eq!(quote.amount_minor, 1250);
}
