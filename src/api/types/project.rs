//! Project wire format

use serde::{Deserialize, Serialize};

use crate::domain::project::Project;

/// A project as the frontend expects it
///
/// `link` is always present and `null` when the project has none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub link: Option<String>,
}

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().value(),
            title: project.title().to_string(),
            description: project.description().to_string(),
            tech_stack: project.tech_stack().to_vec(),
            link: project.link().map(String::from),
        }
    }
}
