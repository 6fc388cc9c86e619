use super::*;

fn valid_draft() -> BusDraft {
    BusDraft {
        registration_no: "AB-12-CD".to_owned(),
        name: "Night Cruiser".to_owned(),
        seat_layout: "2x2".to_owned(),
        total_seats: 40,
        amenity_ids: vec![],
    }
}

#[test]
fn validate_accepts_complete_draft() {
    assert!(validate_bus_draft(&valid_draft()).is_ok());
}

#[test]
fn validate_rejects_blank_fields_and_zero_seats() {
    let mut draft = valid_draft();
    draft.registration_no = "  ".to_owned();
    assert!(validate_bus_draft(&draft).is_err());

    let mut draft = valid_draft();
    draft.name.clear();
    assert!(validate_bus_draft(&draft).is_err());

    let mut draft = valid_draft();
    draft.total_seats = 0;
    assert_eq!(validate_bus_draft(&draft), Err("Total seats must be at least 1."));
}

#[test]
fn toggle_amenity_adds_then_removes() {
    let mut draft = valid_draft();
    draft.toggle_amenity("wifi");
    assert_eq!(draft.amenity_ids, vec!["wifi".to_owned()]);
    draft.toggle_amenity("wifi");
    assert!(draft.amenity_ids.is_empty());
}

#[test]
fn from_bus_copies_editable_fields() {
    let bus = crate::net::types::Bus {
        id: "b1".to_owned(),
        registration_no: "AB-12-CD".to_owned(),
        name: "Night Cruiser".to_owned(),
        seat_layout: "2x1".to_owned(),
        total_seats: 30,
        amenity_ids: vec!["wifi".to_owned()],
    };
    let draft = BusDraft::from_bus(&bus);
    assert_eq!(draft.registration_no, "AB-12-CD");
    assert_eq!(draft.seat_layout, "2x1");
    assert_eq!(draft.amenity_ids, vec!["wifi".to_owned()]);
}
