//! Public API types

pub mod contact;
pub mod error;
pub mod json;
pub mod project;

pub use contact::{ContactAck, CONTACT_ACK_MESSAGE};
pub use error::{ApiError, ApiErrorKind, ApiErrorResponse, NOT_FOUND_MESSAGE};
pub use json::Json;
pub use project::ProjectResponse;
