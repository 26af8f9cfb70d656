//! Observable project store.
//!
//! Projects are created in the `Active` status and moved between `Active`
//! and `Finished`. Every accepted mutation synchronously notifies the
//! registered subscribers, which pull a fresh snapshot themselves. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
