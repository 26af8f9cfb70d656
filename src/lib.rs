//! Project board: an observable project store with drag-and-drop columns.
//!
//! Projects are entered through an input form, listed by status in an
//! `Active` and a `Finished` column, and moved between the columns by drag
//! and drop. Every store mutation synchronously notifies the subscribed
//! columns, which pull a fresh snapshot and re-render.
//!
//! # Modules
//!
//! - [`project`]: project records, the store port and the observable store
//! - [`board`]: host document, components, rendering and drag handshake

pub mod board;
pub mod project;
