//! Project validation

use thiserror::Error;

/// Errors that can occur when building a project for insertion
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProjectValidationError {
    #[error("Project title cannot be empty")]
    EmptyTitle,

    #[error("Project title exceeds maximum length of {0} characters")]
    TitleTooLong(usize),

    #[error("Project description cannot be empty")]
    EmptyDescription,

    #[error("Project link exceeds maximum length of {0} characters")]
    LinkTooLong(usize),
}

/// Column width of `projects.title` and `projects.link`
const MAX_TITLE_LENGTH: usize = 255;
const MAX_LINK_LENGTH: usize = 255;

pub fn validate_project_title(title: &str) -> Result<(), ProjectValidationError> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ProjectValidationError::EmptyTitle);
    }

    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(ProjectValidationError::TitleTooLong(MAX_TITLE_LENGTH));
    }

    Ok(())
}

pub fn validate_project_description(description: &str) -> Result<(), ProjectValidationError> {
    if description.trim().is_empty() {
        return Err(ProjectValidationError::EmptyDescription);
    }

    Ok(())
}

pub fn validate_project_link(link: &str) -> Result<(), ProjectValidationError> {
    if link.chars().count() > MAX_LINK_LENGTH {
        return Err(ProjectValidationError::LinkTooLong(MAX_LINK_LENGTH));
    }

    Ok(())
}
