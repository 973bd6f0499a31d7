//! Commitments over action sequences.

#[cfg(feature = "serde")]
use super::Action;

/// SHA-256 over the bincode encoding of each action, in order.
///
/// Two logs with the same root replay identically from the same initial state
/// and seeds. Requires the `serde` feature.
#[cfg(feature = "serde")]
pub fn compute_actions_root(actions: &[Action]) -> [u8; 32] {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    for action in actions {
        // bincode serialization is deterministic and consistent
        if let Ok(action_bytes) = bincode::serialize(action) {
            hasher.update(&action_bytes);
        }
    }

    hasher.finalize().into()
}
