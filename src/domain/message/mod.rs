//! Contact message domain module
//!
//! Messages come from the public contact form. They are validated before
//! they are stored and are never read back over HTTP.

mod entity;
mod repository;
mod validation;

pub use entity::{ContactSubmission, Message, MessageId, NewMessage};
pub use repository::MessageRepository;
pub use validation::{
    validate_email, validate_message_body, validate_name, validate_required,
    ContactValidationError, MAX_MESSAGE_LENGTH, MAX_NAME_LENGTH, MIN_MESSAGE_LENGTH,
    MIN_NAME_LENGTH,
    trim_form_input,
};

#[cfg(test)]
pub use repository::mock;
