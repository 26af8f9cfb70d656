//! Identifier and validated scalar types for the project domain.

use super::ProjectDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier of a project record.
///
/// Identifiers start at 1 and are never reused by a store instance. The
/// decimal [`fmt::Display`] form is the drag payload representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ProjectId(u64);

impl ProjectId {
    /// The first identifier handed out by an empty store.
    pub const FIRST: Self = Self(1);

    /// Creates a validated project identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidProjectId`] when the value is zero.
    pub const fn new(value: u64) -> Result<Self, ProjectDomainError> {
        if value == 0 {
            return Err(ProjectDomainError::InvalidProjectId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the identifier that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u64> for ProjectId {
    type Error = ProjectDomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProjectId> for u64 {
    fn from(value: ProjectId) -> Self {
        value.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of people assigned to a project, between 1 and 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PeopleCount(u32);

impl PeopleCount {
    /// Smallest accepted head count.
    pub const MIN: u32 = 1;
    /// Largest accepted head count.
    pub const MAX: u32 = 5;

    /// Creates a validated people count.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidPeopleCount`] when the value is
    /// outside `1..=5`.
    pub const fn new(value: u32) -> Result<Self, ProjectDomainError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(ProjectDomainError::InvalidPeopleCount(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the human readable label, `"1 Person"` or `"N People"`.
    #[must_use]
    pub fn label(self) -> String {
        if self.0 > 1 {
            format!("{} People", self.0)
        } else {
            format!("{} Person", self.0)
        }
    }
}

impl TryFrom<u32> for PeopleCount {
    type Error = ProjectDomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PeopleCount> for u32 {
    fn from(value: PeopleCount) -> Self {
        value.0
    }
}

impl fmt::Display for PeopleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
