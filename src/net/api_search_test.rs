use super::*;

#[test]
fn search_endpoint_encodes_city_names() {
    assert_eq!(
        search_endpoint("São Paulo", "Rio", "2026-08-07"),
        "/search?from=S%C3%A3o%20Paulo&to=Rio&date=2026-08-07"
    );
}
