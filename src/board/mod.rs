//! Board component layer.
//!
//! Binds the project store to a host document: an input form that adds
//! projects and one column per status that re-renders on every store
//! notification. Items and columns exchange project ids through a
//! `text/plain` drag payload.

pub mod alert;
pub mod app;
pub mod column;
pub mod component;
pub mod config;
pub mod document;
pub mod drag;
pub mod error;
pub mod input;
pub mod item;
pub mod templates;
pub mod validation;

pub use alert::{INVALID_INPUT_MESSAGE, LogAlert, RecordingAlert, UserAlert};
pub use app::{BoardApp, board_document};
pub use column::ProjectColumn;
pub use component::{Component, MountSpec};
pub use config::{BoardConfig, ConfigError, FormRules};
pub use document::{Element, HostDocument, InsertPosition, SharedDocument};
pub use drag::{DataTransfer, DragEvent, DragPayloadError, DragTarget, Draggable, DropEffect};
pub use error::{BoardError, BoardResult};
pub use input::{ProjectInputForm, SubmitOutcome};
pub use item::ProjectItem;
pub use templates::BoardTemplates;

#[cfg(test)]
mod tests;
