//! Command Layer
//!
//! Async handlers the host shell registers on its IPC boundary.

mod todo_cmd;

pub use todo_cmd::*;
