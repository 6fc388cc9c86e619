use super::*;

#[test]
fn amenity_names_resolves_known_ids_in_trip_order() {
    let catalogue = vec![
        Amenity {
            id: "wifi".to_owned(),
            name: "Wi-Fi".to_owned(),
        },
        Amenity {
            id: "usb".to_owned(),
            name: "USB Charging".to_owned(),
        },
    ];
    let trip = TripResult {
        schedule_id: "s1".to_owned(),
        route_name: "Coastal Express".to_owned(),
        origin: "Porto".to_owned(),
        destination: "Lisbon".to_owned(),
        departure_time: "08:30".to_owned(),
        arrival_time: "12:15".to_owned(),
        seat_types: vec![],
        amenity_ids: vec!["usb".to_owned(), "wifi".to_owned(), "ghost".to_owned()],
    };
    assert_eq!(
        amenity_names(&trip, &catalogue),
        vec!["USB Charging".to_owned(), "Wi-Fi".to_owned()]
    );
}
