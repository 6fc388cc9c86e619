use super::*;

#[test]
fn email_is_trimmed_and_shape_checked() {
    assert_eq!(validate_email("  dee@coastal.pt "), Ok("dee@coastal.pt".to_owned()));
    assert!(validate_email("not-an-email").is_err());
    assert!(validate_email("@coastal.pt").is_err());
    assert!(validate_email("dee@").is_err());
    assert!(validate_email("dee@nodot").is_err());
    assert!(validate_email("d ee@coastal.pt").is_err());
}

#[test]
fn password_requires_minimum_length_without_trimming() {
    assert!(validate_password("short").is_err());
    assert_eq!(validate_password("  six  x").unwrap(), "  six  x");
}

#[test]
fn password_pair_requires_match() {
    assert_eq!(validate_password_pair("longenough", "longenough"), Ok("longenough".to_owned()));
    assert_eq!(
        validate_password_pair("longenough", "different1"),
        Err("Passwords do not match.")
    );
    assert!(validate_password_pair("short", "short").is_err());
}

#[test]
fn required_trims_and_uses_given_message() {
    assert_eq!(validate_required(" Coastal ", "Enter a name."), Ok("Coastal".to_owned()));
    assert_eq!(validate_required("   ", "Enter a name."), Err("Enter a name."));
}
