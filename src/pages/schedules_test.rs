use super::*;

fn route(id: &str, name: &str) -> BusRoute {
    BusRoute {
        id: id.to_owned(),
        name: name.to_owned(),
        origin: "Porto".to_owned(),
        destination: "Lisbon".to_owned(),
        stops: vec![],
    }
}

#[test]
fn route_label_resolves_known_routes() {
    let routes = vec![route("r1", "Coastal Express")];
    assert_eq!(route_label(&routes, "r1"), "Coastal Express");
}

#[test]
fn labels_fall_back_to_raw_ids() {
    assert_eq!(route_label(&[], "r9"), "r9");
    assert_eq!(bus_label(&[], "b9"), "b9");
}
