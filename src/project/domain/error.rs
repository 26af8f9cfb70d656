//! Error types for project domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain project values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project title is empty after trimming.
    #[error("project title must not be empty")]
    EmptyTitle,

    /// The project description is empty after trimming.
    #[error("project description must not be empty")]
    EmptyDescription,

    /// The number of people is outside the accepted range.
    #[error("invalid people count {0}, expected a value between 1 and 5")]
    InvalidPeopleCount(u32),

    /// The project identifier is zero.
    #[error("invalid project identifier {0}, expected a positive integer")]
    InvalidProjectId(u64),
}

/// Error returned while parsing project statuses from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseProjectStatusError(pub String);
