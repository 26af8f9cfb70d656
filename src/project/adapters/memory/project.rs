//! In-memory repository backing the project store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::project::{
    domain::{Project, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};

/// Thread-safe in-memory project repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<InMemoryProjectState>>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    projects: Vec<Project>,
    positions: HashMap<ProjectId, usize>,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> ProjectRepositoryResult<RwLockReadGuard<'_, InMemoryProjectState>> {
        self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> ProjectRepositoryResult<RwLockWriteGuard<'_, InMemoryProjectState>> {
        self.state.write().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

impl ProjectRepository for InMemoryProjectRepository {
    fn append(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut state = self.write()?;
        if state.positions.contains_key(&project.id()) {
            return Err(ProjectRepositoryError::DuplicateProject(project.id()));
        }
        let position = state.projects.len();
        state.positions.insert(project.id(), position);
        state.projects.push(project.clone());
        Ok(())
    }

    fn update(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut state = self.write()?;
        let position = *state
            .positions
            .get(&project.id())
            .ok_or(ProjectRepositoryError::NotFound(project.id()))?;
        let slot = state
            .projects
            .get_mut(position)
            .ok_or(ProjectRepositoryError::NotFound(project.id()))?;
        *slot = project.clone();
        Ok(())
    }

    fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.read()?;
        Ok(state
            .positions
            .get(&id)
            .and_then(|position| state.projects.get(*position))
            .cloned())
    }

    fn list(&self) -> ProjectRepositoryResult<Vec<Project>> {
        Ok(self.read()?.projects.clone())
    }

    fn clear(&self) -> ProjectRepositoryResult<()> {
        let mut state = self.write()?;
        state.projects.clear();
        state.positions.clear();
        Ok(())
    }
}
