//! Contact form acknowledgment

use serde::{Deserialize, Serialize};

pub const CONTACT_ACK_MESSAGE: &str =
    "Message received successfully! We will get back to you soon.";

/// Body returned once a message is stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactAck {
    pub success: bool,
    pub message: String,
}

impl ContactAck {
    pub fn received() -> Self {
        Self {
            success: true,
            message: CONTACT_ACK_MESSAGE.to_string(),
        }
    }
}
