//! Types surfaced to session clients.
mod errors;

pub use errors::{Result, SessionError};
