//! Domain layer - Core entities, validation rules and repository traits

pub mod error;
pub mod message;
pub mod project;

pub use error::DomainError;
pub use message::{
    ContactSubmission, ContactValidationError, Message, MessageId, MessageRepository, NewMessage,
};
pub use project::{NewProject, Project, ProjectId, ProjectRepository, ProjectValidationError};
