//! Contact message entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{
    trim_form_input, validate_email, validate_message_body, validate_name, validate_required,
    ContactValidationError,
};

/// Message identifier, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(i32);

impl MessageId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw contact form payload as received
///
/// Every field is optional so that a missing field is reported by
/// validation rather than by the JSON decoder.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
        }
    }

    /// Run every contact rule in order and produce a trimmed message
    pub fn validate(&self) -> Result<NewMessage, ContactValidationError> {
        let (name, email, message) = validate_required(
            self.name.as_deref(),
            self.email.as_deref(),
            self.message.as_deref(),
        )?;

        validate_email(email)?;
        validate_name(name)?;
        validate_message_body(message)?;

        Ok(NewMessage {
            name: trim_form_input(name).to_string(),
            email: trim_form_input(email).to_string(),
            message: trim_form_input(message).to_string(),
        })
    }

    /// Length of the submitted body, for logging without the content
    pub fn message_len(&self) -> Option<usize> {
        self.message.as_ref().map(|m| m.chars().count())
    }
}

/// A validated contact message ready to persist
///
/// Only [`ContactSubmission::validate`] builds one.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    name: String,
    email: String,
    message: String,
}

impl NewMessage {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Turn into a stored message once the store has assigned id and timestamp
    pub fn into_message(self, id: MessageId, created_at: DateTime<Utc>) -> Message {
        Message {
            id,
            name: self.name,
            email: self.email,
            message: self.message,
            created_at,
        }
    }
}

/// A stored contact message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    id: MessageId,
    name: String,
    email: String,
    message: String,
    created_at: DateTime<Utc>,
}

impl Message {
    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
