//! Mounts a board on a default host document, runs a short scripted
//! session and writes the rendered HTML to stdout.
//!
//! Usage:
//!
//! ```text
//! board_demo [config-path]
//! ```
//!
//! The optional JSON file at `config-path` must deserialize into a
//! [`BoardConfig`]; missing fields keep their defaults. Set `RUST_LOG` to
//! control log output, which goes to stderr.

use camino::Utf8PathBuf;
use project_board::board::{BoardApp, BoardConfig, LogAlert, board_document};
use project_board::project::{domain::ProjectStatus, services::InMemoryProjectStore};
use std::io::Write;
use std::sync::Arc;
use tracing::info;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> Result<(), BoxError> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => BoardConfig::load(&Utf8PathBuf::from(path))?,
        None => BoardConfig::default(),
    };
    let store = Arc::new(InMemoryProjectStore::in_memory());
    let document = board_document(&config).into_shared();
    let mut app = BoardApp::mount(Arc::clone(&store), document, &config, Arc::new(LogAlert))?;

    let input = app.input_mut();
    input.fill("Write docs", "Describe the board components", "1");
    input.submit()?;
    input.fill("Ship release", "Tag and publish the first version", "3");
    input.submit()?;
    input.fill("x", "too short", "9");
    input.submit()?;

    if let Some(first) = store.snapshot()?.first() {
        let outcome = app.drag_project(first.id(), ProjectStatus::Finished)?;
        info!(project_id = %first.id(), ?outcome, "demo drag finished");
    }

    let html = app.render_html()?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{html}")?;
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let installed = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();
    if !installed {
        tracing::debug!("tracing subscriber already installed");
    }
}
