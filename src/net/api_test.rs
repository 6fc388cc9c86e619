use super::*;

#[test]
fn percent_encode_passes_unreserved_characters() {
    assert_eq!(percent_encode("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
}

#[test]
fn percent_encode_escapes_reserved_and_spaces() {
    assert_eq!(percent_encode("a b"), "a%20b");
    assert_eq!(percent_encode("user@example.com"), "user%40example.com");
    assert_eq!(percent_encode("a&b=c"), "a%26b%3Dc");
}

#[test]
fn percent_encode_escapes_multibyte_utf8() {
    assert_eq!(percent_encode("São"), "S%C3%A3o");
}

#[test]
fn query_string_joins_pairs_with_question_mark_prefix() {
    assert_eq!(
        query_string(&[("from", "Porto"), ("to", "Lisbon"), ("date", "2026-08-07")]),
        "?from=Porto&to=Lisbon&date=2026-08-07"
    );
    assert_eq!(query_string(&[]), "");
}

#[test]
fn form_encode_has_no_prefix_and_escapes_values() {
    assert_eq!(form_encode(&[("email", "a@b.com")]), "email=a%40b.com");
}
