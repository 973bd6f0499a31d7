//! Session orchestration for the deterministic heist simulation.
//!
//! This crate wraps [`heist_core::TurnScheduler`] into a stateful [`Session`]
//! that front ends drive one action at a time. Every accepted turn is recorded
//! in an [`ActionLog`] together with the seed it used and the digest of the
//! resulting state, so a run can be exported and later verified with
//! [`replay`].
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session driver and its statistics
//! - [`api`] exposes the error types downstream clients interact with
//! - [`repository`] holds the action log and its JSON persistence
//! - [`replay`] re-runs a log against an initial state
pub mod api;
pub mod replay;
pub mod repository;
pub mod session;

pub use api::{Result, SessionError};
pub use replay::replay;
pub use repository::{ActionLog, ActionRecord};
pub use session::{Session, SessionStats};
