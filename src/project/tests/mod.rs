//! Unit tests for the project store.
