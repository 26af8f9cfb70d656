//! Observable project store.
//!
//! The store is the single owner of the project list. Mutations go through
//! [`ProjectStore::add`] and [`ProjectStore::move_project`]; after every
//! accepted mutation each subscriber is invoked synchronously, in
//! subscription order, with no arguments. Subscribers pull the current state
//! with [`ProjectStore::snapshot`].
//!
//! No lock is held while subscribers run, so reading the store from a
//! callback is fine. Mutating the store from inside a callback leaves the
//! notification order undefined and is the caller's responsibility to avoid.

use crate::project::{
    adapters::memory::InMemoryProjectRepository,
    domain::{NewProject, Project, ProjectDomainError, ProjectId, ProjectStatus},
    ports::{ProjectRepository, ProjectRepositoryError},
};
use mockable::{Clock, DefaultClock};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for project store operations.
#[derive(Debug, Error)]
pub enum ProjectStoreError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
}

/// Result type for project store operations.
pub type ProjectStoreResult<T> = Result<T, ProjectStoreError>;

/// Handle returned by [`ProjectStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a [`ProjectStore::move_project`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The status changed and subscribers were notified.
    Moved,
    /// The project already had the requested status; nothing was notified.
    Unchanged,
    /// No project has the identifier; nothing was notified.
    NotFound,
}

type Subscriber = Arc<dyn Fn() + Send + Sync>;

struct StoreState {
    next_id: ProjectId,
    next_subscription: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            next_id: ProjectId::FIRST,
            next_subscription: 1,
            subscribers: Vec::new(),
        }
    }
}

/// Store backed by the in-memory repository and the system clock.
pub type InMemoryProjectStore = ProjectStore<InMemoryProjectRepository, DefaultClock>;

/// Observable project store.
pub struct ProjectStore<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    state: RwLock<StoreState>,
}

impl InMemoryProjectStore {
    /// Creates an empty store backed by memory and the system clock.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryProjectRepository::new()),
            Arc::new(DefaultClock),
        )
    }
}

impl<R, C> ProjectStore<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new store over an empty repository.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            state: RwLock::new(StoreState::default()),
        }
    }

    /// Adds an active project built from raw field values.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::Domain`] when the values are invalid or
    /// [`ProjectStoreError::Repository`] when storage rejects the record.
    pub fn add(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectStoreResult<ProjectId> {
        let fields = NewProject::new(title, description, people)?;
        self.insert(fields)
    }

    /// Adds an active project from validated fields and notifies subscribers.
    ///
    /// The identifier counter only advances once the repository accepted the
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::Repository`] when storage rejects the
    /// record.
    pub fn insert(&self, fields: NewProject) -> ProjectStoreResult<ProjectId> {
        let id = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let assigned = state.next_id;
            let project = Project::new(assigned, fields, &*self.clock);
            self.repository.append(&project)?;
            state.next_id = assigned.next();
            assigned
        };
        info!(project_id = %id, "project added");
        self.notify();
        Ok(id)
    }

    /// Moves a project to `status`.
    ///
    /// Unknown identifiers and moves to the current status are no-ops and do
    /// not notify subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::Repository`] when storage lookup or update
    /// fails.
    pub fn move_project(
        &self,
        id: ProjectId,
        status: ProjectStatus,
    ) -> ProjectStoreResult<MoveOutcome> {
        let Some(mut project) = self.repository.find_by_id(id)? else {
            debug!(project_id = %id, "move ignored for unknown project");
            return Ok(MoveOutcome::NotFound);
        };
        if !project.move_to(status, &*self.clock) {
            debug!(project_id = %id, %status, "move ignored, status unchanged");
            return Ok(MoveOutcome::Unchanged);
        }
        self.repository.update(&project)?;
        info!(project_id = %id, %status, "project moved");
        self.notify();
        Ok(MoveOutcome::Moved)
    }

    /// Returns a copy of every project in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::Repository`] when storage lookup fails.
    pub fn snapshot(&self) -> ProjectStoreResult<Vec<Project>> {
        Ok(self.repository.list()?)
    }

    /// Returns a copy of the projects with the given status, in insertion
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::Repository`] when storage lookup fails.
    pub fn snapshot_by_status(&self, status: ProjectStatus) -> ProjectStoreResult<Vec<Project>> {
        let mut projects = self.snapshot()?;
        projects.retain(|project| project.status() == status);
        Ok(projects)
    }

    /// Finds a project by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::Repository`] when storage lookup fails.
    pub fn find(&self, id: ProjectId) -> ProjectStoreResult<Option<Project>> {
        Ok(self.repository.find_by_id(id)?)
    }

    /// Returns the number of stored projects.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::Repository`] when storage lookup fails.
    pub fn len(&self) -> ProjectStoreResult<usize> {
        Ok(self.repository.list()?.len())
    }

    /// Returns `true` when no project has been added.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::Repository`] when storage lookup fails.
    pub fn is_empty(&self) -> ProjectStoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Registers a callback invoked after every accepted mutation.
    ///
    /// Callbacks receive no arguments and run in subscription order. The
    /// same closure may be registered more than once.
    pub fn subscribe(&self, callback: impl Fn() + Send + Sync + 'static) -> SubscriptionId {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let id = SubscriptionId(state.next_subscription);
        state.next_subscription = state.next_subscription.saturating_add(1);
        state.subscribers.push((id, Arc::new(callback)));
        debug!(subscription = %id, "subscriber registered");
        id
    }

    /// Removes a subscriber.
    ///
    /// Returns `false` when the subscription was already removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let before = state.subscribers.len();
        state.subscribers.retain(|(subscription, _)| *subscription != id);
        let removed = state.subscribers.len() != before;
        if removed {
            debug!(subscription = %id, "subscriber removed");
        }
        removed
    }

    /// Returns the number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .subscribers
            .len()
    }

    /// Removes every project and restarts identifiers at 1.
    ///
    /// Subscribers stay registered and are notified once.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::Repository`] when storage fails to clear.
    pub fn reset(&self) -> ProjectStoreResult<()> {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            self.repository.clear()?;
            state.next_id = ProjectId::FIRST;
        }
        info!("project store reset");
        self.notify();
        Ok(())
    }

    fn notify(&self) {
        let subscribers: Vec<Subscriber> = self
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .subscribers
            .iter()
            .map(|(_, subscriber)| Arc::clone(subscriber))
            .collect();
        debug!(subscribers = subscribers.len(), "notifying subscribers");
        for subscriber in subscribers {
            subscriber();
        }
    }
}

impl<R, C> fmt::Debug for ProjectStore<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectStore")
            .field("subscribers", &self.subscriber_count())
            .finish_non_exhaustive()
    }
}
