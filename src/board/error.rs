//! Error types for the board component layer.

use super::{config::ConfigError, drag::DragPayloadError};
use crate::project::services::ProjectStoreError;
use thiserror::Error;

/// Result type for board component operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors raised while mounting, rendering or driving board components.
#[derive(Debug, Error)]
pub enum BoardError {
    /// A named template is absent from the host document.
    #[error("HTML id {0} is missing!")]
    MissingTemplate(String),

    /// A named container is absent from the host document.
    #[error("mount point {0} is missing!")]
    MissingMountPoint(String),

    /// Template rendering failed.
    #[error("failed to render {template}: {source}")]
    Render {
        /// Name of the template being rendered.
        template: String,
        /// Underlying template engine error.
        #[source]
        source: minijinja::Error,
    },

    /// The project store rejected an operation.
    #[error(transparent)]
    Store(#[from] ProjectStoreError),

    /// A drag payload could not be decoded.
    #[error(transparent)]
    DragPayload(#[from] DragPayloadError),

    /// The board configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
