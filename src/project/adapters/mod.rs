//! Adapter implementations for project store ports.

pub mod memory;
