//! Shallow client-side form validation.
//!
//! The backend stays the authority on correctness; these checks only stop
//! obviously incomplete submissions before a request is issued. Limits mirror
//! the backend column widths.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

pub const MAX_USERNAME: usize = 50;
pub const MAX_EMAIL: usize = 100;
pub const MAX_NAME: usize = 100;
pub const MAX_PHONE: usize = 15;
pub const MAX_LOCATION: usize = 100;
pub const MAX_CONTACT_MESSAGE: usize = 2000;
pub const MIN_PASSWORD: usize = 8;

/// Validation failure carrying the message shown under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError(pub String);

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trimmed value of a required field.
///
/// # Errors
///
/// Fails when the trimmed value is empty.
pub fn required(label: &str, value: &str) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError(format!("{label} is required.")));
    }
    Ok(trimmed.to_owned())
}

/// Trimmed value of a required field no longer than `max` characters.
///
/// # Errors
///
/// Fails when empty or too long.
pub fn required_max(label: &str, value: &str, max: usize) -> Result<String, FieldError> {
    let trimmed = required(label, value)?;
    if trimmed.chars().count() > max {
        return Err(FieldError(format!("{label} must be at most {max} characters.")));
    }
    Ok(trimmed)
}

/// A required email with a plausible `local@domain.tld` shape.
///
/// # Errors
///
/// Fails when empty, too long, or missing the `@`/dot structure.
pub fn email(value: &str) -> Result<String, FieldError> {
    let trimmed = required_max("Email", value, MAX_EMAIL)?;
    let valid = trimmed.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && !domain.contains('@')
            && domain.split('.').count() >= 2
            && domain.split('.').all(|part| !part.is_empty())
    });
    if !valid || trimmed.contains(char::is_whitespace) {
        return Err(FieldError("Enter a valid email address.".to_owned()));
    }
    Ok(trimmed)
}

/// A required password. Passwords are not trimmed.
///
/// # Errors
///
/// Fails when empty or shorter than [`MIN_PASSWORD`].
pub fn password(value: &str) -> Result<String, FieldError> {
    if value.is_empty() {
        return Err(FieldError("Password is required.".to_owned()));
    }
    if value.chars().count() < MIN_PASSWORD {
        return Err(FieldError(format!("Password must be at least {MIN_PASSWORD} characters.")));
    }
    Ok(value.to_owned())
}

/// # Errors
///
/// Fails when the confirmation differs from the password.
pub fn password_confirmation(password: &str, confirm: &str) -> Result<(), FieldError> {
    if password == confirm {
        Ok(())
    } else {
        Err(FieldError("Passwords do not match.".to_owned()))
    }
}

/// A required phone number: digits with an optional leading `+`.
///
/// # Errors
///
/// Fails when empty, too long, or containing other characters.
pub fn phone(value: &str) -> Result<String, FieldError> {
    let trimmed: String = required("Phone", value)?
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .collect();
    let digits = trimmed.strip_prefix('+').unwrap_or(&trimmed);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError("Enter a valid phone number.".to_owned()));
    }
    if trimmed.len() > MAX_PHONE {
        return Err(FieldError(format!("Phone must be at most {MAX_PHONE} characters.")));
    }
    Ok(trimmed)
}

/// Split a comma/newline separated recipient list, dropping blank entries.
pub fn parse_phone_list(input: &str) -> Vec<String> {
    input
        .split(['\n', ','])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}
