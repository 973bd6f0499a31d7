//! Persistence for recorded sessions.
mod action_log;

pub use action_log::{ActionLog, ActionRecord};
