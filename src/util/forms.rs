//! Shared form validators for the auth and registration screens.
//!
//! Validation here is shallow on purpose; the backend is authoritative and
//! its 4xx messages are surfaced into the same inline slots.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Minimum accepted password length, matched to the backend policy.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Trim and shape-check an email address.
pub fn validate_email(value: &str) -> Result<String, &'static str> {
    let email = value.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return Err("Enter a valid email address.");
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || email.contains(' ') {
        return Err("Enter a valid email address.");
    }
    Ok(email.to_owned())
}

/// Length-check a password without trimming (leading/trailing spaces are
/// legal password characters).
pub fn validate_password(value: &str) -> Result<String, &'static str> {
    if value.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok(value.to_owned())
}

/// Check the confirmation field matches.
pub fn validate_password_pair(password: &str, confirm: &str) -> Result<String, &'static str> {
    let password = validate_password(password)?;
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(password)
}

/// Trim a required free-text field.
pub fn validate_required(value: &str, message: &'static str) -> Result<String, &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(message);
    }
    Ok(trimmed.to_owned())
}
