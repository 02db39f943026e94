//! Contact form validation
//!
//! Rules are checked in a fixed order and the first failure wins:
//! required fields, email format, name length, message length.
//! The `Display` text of each error is what the client sees.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur while validating a contact submission
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContactValidationError {
    #[error("Name, email, and message are required fields")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Name must be between {0} and {1} characters")]
    NameLength(usize, usize),

    #[error("Message must be between {0} and {1} characters")]
    MessageLength(usize, usize),
}

pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 255;
pub const MIN_MESSAGE_LENGTH: usize = 10;
pub const MAX_MESSAGE_LENGTH: usize = 5000;

/// Characters a browser form treats as whitespace
///
/// Includes U+FEFF and excludes U+0085, unlike `char::is_whitespace`.
const FORM_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// `local@domain.tld`, each part free of whitespace and `@`
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^{}@]+", FORM_WHITESPACE);
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is valid")
});

/// Whether `c` counts as whitespace for trimming form input
fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Trim form whitespace from both ends
pub fn trim_form_input(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// Check that every field was supplied and is not the empty string
///
/// Whitespace-only values pass here and are caught by the length rules.
pub fn validate_required<'a>(
    name: Option<&'a str>,
    email: Option<&'a str>,
    message: Option<&'a str>,
) -> Result<(&'a str, &'a str, &'a str), ContactValidationError> {
    match (name, email, message) {
        (Some(name), Some(email), Some(message))
            if !name.is_empty() && !email.is_empty() && !message.is_empty() =>
        {
            Ok((name, email, message))
        }
        _ => Err(ContactValidationError::MissingFields),
    }
}

/// Validate an email address exactly as submitted
pub fn validate_email(email: &str) -> Result<(), ContactValidationError> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(ContactValidationError::InvalidEmail)
    }
}

/// Validate the sender name length after trimming
pub fn validate_name(name: &str) -> Result<(), ContactValidationError> {
    let len = trim_form_input(name).chars().count();

    if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&len) {
        return Err(ContactValidationError::NameLength(
            MIN_NAME_LENGTH,
            MAX_NAME_LENGTH,
        ));
    }

    Ok(())
}

/// Validate the message body length after trimming
pub fn validate_message_body(message: &str) -> Result<(), ContactValidationError> {
    let len = trim_form_input(message).chars().count();

    if !(MIN_MESSAGE_LENGTH..=MAX_MESSAGE_LENGTH).contains(&len) {
        return Err(ContactValidationError::MessageLength(
            MIN_MESSAGE_LENGTH,
            MAX_MESSAGE_LENGTH,
        ));
    }

    Ok(())
}
