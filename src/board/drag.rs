//! Drag and drop handshake between project items and status columns.
//!
//! A drag start stores the project id as decimal text under the
//! [`PLAIN_TEXT`] type. A column accepts a drag whose first declared type is
//! [`PLAIN_TEXT`] and decodes the id on drop. Payloads may come from
//! anywhere on the page, so decoded ids are checked against the store before
//! any move.

use crate::project::domain::ProjectId;
use thiserror::Error;

/// The only payload type exchanged by the board.
pub const PLAIN_TEXT: &str = "text/plain";

/// Operations a drag source allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    /// Move the dragged data.
    Move,
    /// Any operation.
    #[default]
    All,
}

impl DropEffect {
    /// Returns the platform spelling of the effect.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::All => "all",
        }
    }
}

/// Data attached to a drag gesture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    effect_allowed: DropEffect,
}

impl DataTransfer {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `format`, replacing any previous value of that
    /// format.
    pub fn set_data(&mut self, format: &str, data: impl Into<String>) {
        let value = data.into();
        if let Some(entry) = self.entries.iter_mut().find(|(kind, _)| kind == format) {
            entry.1 = value;
        } else {
            self.entries.push((format.to_owned(), value));
        }
    }

    /// Returns the data stored under `format`.
    #[must_use]
    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(kind, _)| kind == format)
            .map(|(_, data)| data.as_str())
    }

    /// Returns the declared types in the order they were set.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(kind, _)| kind.as_str())
    }

    /// Returns the allowed effect.
    #[must_use]
    pub const fn effect_allowed(&self) -> DropEffect {
        self.effect_allowed
    }

    /// Sets the allowed effect.
    pub const fn set_effect_allowed(&mut self, effect: DropEffect) {
        self.effect_allowed = effect;
    }
}

/// A drag event delivered to an item or a column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragEvent {
    data_transfer: Option<DataTransfer>,
    default_prevented: bool,
}

impl DragEvent {
    /// Creates an event carrying an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::with_data(DataTransfer::new())
    }

    /// Creates an event carrying `data_transfer`.
    #[must_use]
    pub const fn with_data(data_transfer: DataTransfer) -> Self {
        Self {
            data_transfer: Some(data_transfer),
            default_prevented: false,
        }
    }

    /// Creates an event without any payload.
    #[must_use]
    pub const fn without_data() -> Self {
        Self {
            data_transfer: None,
            default_prevented: false,
        }
    }

    /// Returns the payload, if any.
    #[must_use]
    pub const fn data_transfer(&self) -> Option<&DataTransfer> {
        self.data_transfer.as_ref()
    }

    /// Returns the payload for modification, if any.
    pub const fn data_transfer_mut(&mut self) -> Option<&mut DataTransfer> {
        self.data_transfer.as_mut()
    }

    /// Marks the default action as prevented, which permits a drop.
    pub const fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Returns `true` once [`DragEvent::prevent_default`] was called.
    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Returns `true` when the first declared payload type is [`PLAIN_TEXT`].
    #[must_use]
    pub fn carries_plain_text(&self) -> bool {
        self.data_transfer
            .as_ref()
            .and_then(|data| data.types().next())
            .is_some_and(|kind| kind == PLAIN_TEXT)
    }
}

/// Errors raised while decoding a drag payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DragPayloadError {
    /// The event carries no payload.
    #[error("drag event carries no data transfer")]
    MissingDataTransfer,

    /// The payload has no plain text entry.
    #[error("drag payload has no text/plain entry")]
    MissingText,

    /// The plain text entry is not a positive decimal integer.
    #[error("drag payload '{0}' is not a project id")]
    Malformed(String),

    /// The decoded id does not name a stored project.
    #[error("drag payload names unknown project {0}")]
    UnknownProject(ProjectId),
}

/// Writes a project id into a drag payload and allows moving it.
pub fn encode_project_id(id: ProjectId, data_transfer: &mut DataTransfer) {
    data_transfer.set_data(PLAIN_TEXT, id.to_string());
    data_transfer.set_effect_allowed(DropEffect::Move);
}

/// Reads a project id from a drag event.
///
/// # Errors
///
/// Returns [`DragPayloadError`] when the event has no payload, no plain text
/// entry, or text that is not a positive decimal integer.
pub fn decode_project_id(event: &DragEvent) -> Result<ProjectId, DragPayloadError> {
    let text = event
        .data_transfer()
        .ok_or(DragPayloadError::MissingDataTransfer)?
        .get_data(PLAIN_TEXT)
        .ok_or(DragPayloadError::MissingText)?;
    if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(DragPayloadError::Malformed(text.to_owned()));
    }
    text.parse::<u64>()
        .ok()
        .and_then(|value| ProjectId::new(value).ok())
        .ok_or_else(|| DragPayloadError::Malformed(text.to_owned()))
}

/// Handlers of a component that can be dragged.
pub trait Draggable {
    /// Fills the drag payload when a drag starts.
    fn drag_start(&self, event: &mut DragEvent);

    /// Observes the end of a drag, whether dropped or cancelled.
    fn drag_end(&self, event: &DragEvent);
}

/// Handlers of a component that accepts drops.
pub trait DragTarget {
    /// Outcome reported by a drop.
    type Outcome;

    /// Permits the drop when the payload is acceptable and shows hover state.
    fn drag_over(&self, event: &mut DragEvent);

    /// Handles a drop.
    ///
    /// # Errors
    ///
    /// Returns a [`super::BoardError`] when the payload is rejected or the
    /// store fails.
    fn drop_project(&self, event: &DragEvent) -> super::BoardResult<Self::Outcome>;

    /// Reverts the hover state.
    fn drag_leave(&self, event: &DragEvent);
}
