//! Guard behaviour: the per-guard state machine and its path finding.
mod ai;
pub mod pathing;

pub use ai::{GuardContext, update_guard};
pub use pathing::next_step;
