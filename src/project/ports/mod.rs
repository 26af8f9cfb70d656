//! Port contracts for the project store.
//!
//! Ports define infrastructure-agnostic interfaces used by store services.

pub mod repository;

pub use repository::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult};

#[cfg(test)]
pub use repository::MockProjectRepository;
