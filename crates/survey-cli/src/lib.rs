//! Survey repair CLI library.
//!
//! The binary in `main.rs` is a thin shell over these modules so the
//! command paths stay testable.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
