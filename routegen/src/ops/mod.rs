//! Core operations.
//!
//! This module contains the business logic for routegen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod process;

pub use check::check;
pub use process::{ProcessOptions, process};
