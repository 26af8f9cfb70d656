//! Shared world state for project board BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use project_board::{
    board::{BoardApp, BoardConfig, BoardError, RecordingAlert, UserAlert, board_document},
    project::{
        adapters::memory::InMemoryProjectRepository,
        services::{InMemoryProjectStore, MoveOutcome},
    },
};
use rstest::fixture;

/// Board type used by the BDD world.
pub type TestBoard = BoardApp<InMemoryProjectRepository, DefaultClock>;

/// Scenario world for project board behaviour tests.
pub struct BoardWorld {
    pub board: Option<TestBoard>,
    pub alert: Arc<RecordingAlert>,
    pub last_drag_result: Option<Result<MoveOutcome, BoardError>>,
}

impl BoardWorld {
    /// Creates a world with no mounted board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: None,
            alert: Arc::new(RecordingAlert::new()),
            last_drag_result: None,
        }
    }

    /// Mounts a board on the default document.
    pub fn mount(&mut self) -> Result<(), BoardError> {
        let config = BoardConfig::default();
        let alert: Arc<dyn UserAlert> = Arc::clone(&self.alert) as Arc<dyn UserAlert>;
        let board = BoardApp::mount(
            Arc::new(InMemoryProjectStore::in_memory()),
            board_document(&config).into_shared(),
            &config,
            alert,
        )?;
        self.board = Some(board);
        Ok(())
    }

    /// Returns the mounted board.
    pub fn board(&self) -> Result<&TestBoard, eyre::Report> {
        self.board
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing mounted board in scenario world"))
    }

    /// Returns the mounted board for interaction.
    pub fn board_mut(&mut self) -> Result<&mut TestBoard, eyre::Report> {
        self.board
            .as_mut()
            .ok_or_else(|| eyre::eyre!("missing mounted board in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
