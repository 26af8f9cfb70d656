//! Project record and related status types.

use super::{ParseProjectStatusError, PeopleCount, ProjectDomainError, ProjectId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board column a project is listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Project is still being worked on.
    Active,
    /// Project has been completed.
    Finished,
}

impl ProjectStatus {
    /// Every status, in column order.
    pub const ALL: [Self; 2] = [Self::Active, Self::Finished];

    /// Returns the canonical lowercase representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(ParseProjectStatusError(value.to_owned())),
        }
    }
}

/// Validated field values for a project that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    title: String,
    description: String,
    people: PeopleCount,
}

impl NewProject {
    /// Creates validated project fields.
    ///
    /// Title and description are stored as given; only their trimmed
    /// emptiness is checked here.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError`] when the title or description is blank
    /// or the people count is outside `1..=5`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Result<Self, ProjectDomainError> {
        let title_text = title.into();
        if title_text.trim().is_empty() {
            return Err(ProjectDomainError::EmptyTitle);
        }
        let description_text = description.into();
        if description_text.trim().is_empty() {
            return Err(ProjectDomainError::EmptyDescription);
        }
        Ok(Self {
            title: title_text,
            description: description_text,
            people: PeopleCount::new(people)?,
        })
    }

    /// Returns the project title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the number of people assigned.
    #[must_use]
    pub const fn people(&self) -> PeopleCount {
        self.people
    }
}

/// Project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    people: PeopleCount,
    status: ProjectStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates an active project with the given identifier.
    #[must_use]
    pub fn new(id: ProjectId, fields: NewProject, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            title: fields.title,
            description: fields.description,
            people: fields.people,
            status: ProjectStatus::Active,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the number of people assigned.
    #[must_use]
    pub const fn people(&self) -> PeopleCount {
        self.people
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest status change timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the project to `status`.
    ///
    /// Returns `false` and leaves the record untouched when the project is
    /// already in that status.
    pub fn move_to(&mut self, status: ProjectStatus, clock: &impl Clock) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        self.updated_at = clock.utc();
        true
    }
}
