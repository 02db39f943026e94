//! Project entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{
    validate_project_description, validate_project_link, validate_project_title,
    ProjectValidationError,
};

/// Project identifier, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(i32);

impl ProjectId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for ProjectId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A portfolio project as stored
///
/// Projects are immutable once stored; there is no update path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    tech_stack: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<String>,
    created_at: DateTime<Utc>,
}

impl Project {
    /// Rebuild a project from values read back from a store
    pub fn from_stored(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        tech_stack: Vec<String>,
        link: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            tech_stack,
            link,
            created_at,
        }
    }

    // Getters

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tech_stack(&self) -> &[String] {
        &self.tech_stack
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A project that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    title: String,
    description: String,
    tech_stack: Vec<String>,
    link: Option<String>,
}

impl NewProject {
    /// Create a new project with trimmed title and description
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ProjectValidationError> {
        let title = title.into();
        let description = description.into();
        validate_project_title(&title)?;
        validate_project_description(&description)?;

        Ok(Self {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            tech_stack: Vec::new(),
            link: None,
        })
    }

    /// Set the technology tags (builder pattern)
    pub fn with_tech_stack<I, S>(mut self, tech_stack: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech_stack = tech_stack.into_iter().map(Into::into).collect();
        self
    }

    /// Set the external link (builder pattern)
    pub fn with_link(mut self, link: impl Into<String>) -> Result<Self, ProjectValidationError> {
        let link = link.into();
        validate_project_link(&link)?;
        self.link = Some(link);
        Ok(self)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tech_stack(&self) -> &[String] {
        &self.tech_stack
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Turn into a stored project once the store has assigned id and timestamp
    pub fn into_project(self, id: ProjectId, created_at: DateTime<Utc>) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            tech_stack: self.tech_stack,
            link: self.link,
            created_at,
        }
    }
}
