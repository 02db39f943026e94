//! Project domain module
//!
//! Projects are the portfolio entries shown on the site. They are read-only
//! over HTTP and only ever inserted by the seeder or an operator.

mod entity;
mod repository;
mod validation;

pub use entity::{NewProject, Project, ProjectId};
pub use repository::ProjectRepository;
pub use validation::{
    validate_project_description, validate_project_link, validate_project_title,
    ProjectValidationError,
};

#[cfg(test)]
pub use repository::mock;
