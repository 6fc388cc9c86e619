use super::*;

#[test]
fn bus_endpoint_formats_expected_path() {
    assert_eq!(bus_endpoint("b42"), "/operator/buses/b42");
}

#[test]
fn bus_payload_trims_text_fields_and_keeps_amenities() {
    let draft = BusDraft {
        registration_no: " AB-12-CD ".to_owned(),
        name: "Night Cruiser ".to_owned(),
        seat_layout: "2x2".to_owned(),
        total_seats: 40,
        amenity_ids: vec!["wifi".to_owned(), "usb".to_owned()],
    };
    assert_eq!(
        bus_payload(&draft),
        serde_json::json!({
            "registrationNo": "AB-12-CD",
            "name": "Night Cruiser",
            "seatLayout": "2x2",
            "totalSeats": 40,
            "amenityIds": ["wifi", "usb"],
        })
    );
}
