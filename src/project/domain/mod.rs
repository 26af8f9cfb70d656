//! Domain model for the project store.
//!
//! Records carry their identity and status plus the validated scalar values
//! entered on the input form. Infrastructure concerns stay outside of this
//! boundary.

mod error;
mod ids;
mod project;

pub use error::{ParseProjectStatusError, ProjectDomainError};
pub use ids::{PeopleCount, ProjectId};
pub use project::{NewProject, Project, ProjectStatus};
