//! Unit tests for the board component layer.

mod column_tests;
mod input_tests;
