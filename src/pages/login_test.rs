use super::*;

#[test]
fn validate_login_input_trims_email_and_keeps_password_exact() {
    assert_eq!(
        validate_login_input(" dee@coastal.pt ", "hunter2hunter2"),
        Ok(("dee@coastal.pt".to_owned(), "hunter2hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_rejects_bad_email() {
    assert_eq!(
        validate_login_input("not-an-email", "hunter2hunter2"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_login_input_rejects_short_password() {
    assert_eq!(
        validate_login_input("dee@coastal.pt", "short"),
        Err("Password must be at least 8 characters.")
    );
}
