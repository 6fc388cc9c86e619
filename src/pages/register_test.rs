use super::*;

#[test]
fn validate_register_input_normalizes_all_fields() {
    let input = validate_register_input(
        " Dee ",
        "Coastal Coaches",
        " dee@coastal.pt ",
        "hunter2hunter2",
        "hunter2hunter2",
    )
    .unwrap();
    assert_eq!(input.name, "Dee");
    assert_eq!(input.email, "dee@coastal.pt");
    assert_eq!(input.password, "hunter2hunter2");
}

#[test]
fn validate_register_input_requires_every_field() {
    assert_eq!(
        validate_register_input("", "Coastal", "dee@coastal.pt", "hunter2hunter2", "hunter2hunter2"),
        Err("Enter your name.")
    );
    assert_eq!(
        validate_register_input("Dee", " ", "dee@coastal.pt", "hunter2hunter2", "hunter2hunter2"),
        Err("Enter your company name.")
    );
    assert_eq!(
        validate_register_input("Dee", "Coastal", "dee@coastal.pt", "hunter2hunter2", "other"),
        Err("Passwords do not match.")
    );
}

#[test]
fn classify_register_error_routes_taken_email_to_field() {
    assert_eq!(
        classify_register_error("Email already in use"),
        RegisterErrorSlot::Email
    );
    assert_eq!(
        classify_register_error("Company name too long"),
        RegisterErrorSlot::General
    );
}
