//! Action log of accepted turns.
//!
//! Each record carries everything needed to re-run its turn (the action and
//! the seed it was resolved with) plus the digest of the state it produced,
//! which [`replay`](crate::replay) compares against. Logs are stored as
//! pretty-printed JSON with digests as hex strings.

use std::fs;
use std::path::Path;

use heist_core::{Action, GameState, compute_actions_root};
use serde::{Deserialize, Serialize};

use crate::api::{Result, SessionError};

/// One accepted turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Turn counter of the state the action was applied to.
    pub turn: u64,
    pub action: Action,
    /// Seed handed to the scheduler for this turn.
    pub seed: u64,
    /// Digest of the resulting state.
    #[serde(with = "hex::serde")]
    pub digest: [u8; 32],
}

/// Ordered record of a level played from a known initial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLog {
    #[serde(with = "hex::serde")]
    initial_digest: [u8; 32],
    records: Vec<ActionRecord>,
}

impl ActionLog {
    /// Starts an empty log rooted at `initial`.
    pub fn new(initial: &GameState) -> Self {
        Self {
            initial_digest: initial.digest(),
            records: Vec::new(),
        }
    }

    pub fn initial_digest(&self) -> [u8; 32] {
        self.initial_digest
    }

    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: ActionRecord) {
        self.records.push(record);
    }

    /// Digest of the last recorded state, or of the initial state if empty.
    pub fn head_digest(&self) -> [u8; 32] {
        self.records
            .last()
            .map_or(self.initial_digest, |record| record.digest)
    }

    /// Commitment to the recorded action sequence.
    pub fn actions_root(&self) -> [u8; 32] {
        let actions: Vec<Action> = self.records.iter().map(|record| record.action).collect();
        compute_actions_root(&actions)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heist_core::{CardinalDirection, LevelDescriptor, Position, ToolId, TurnScheduler};

    fn initial() -> GameState {
        let descriptor =
            LevelDescriptor::from_rows(&["#####", "#..E#", "#####"], Position::new(1, 1), Position::new(3, 1))
                .expect("known glyphs");
        TurnScheduler::default()
            .start_level(descriptor)
            .expect("valid level")
    }

    fn record(turn: u64, action: Action) -> ActionRecord {
        ActionRecord {
            turn,
            action,
            seed: turn * 31,
            digest: [turn as u8; 32],
        }
    }

    #[test]
    fn json_keeps_records_and_hex_digests() {
        let state = initial();
        let mut log = ActionLog::new(&state);
        log.push(record(0, Action::step(CardinalDirection::East)));
        log.push(record(1, Action::tool(ToolId::Decoy)));

        let json = log.to_json().expect("encodes");
        assert!(json.contains(&"01".repeat(32)));

        let decoded = ActionLog::from_json(&json).expect("decodes");
        assert_eq!(decoded, log);
        assert_eq!(decoded.head_digest(), [1; 32]);
    }

    #[test]
    fn empty_log_heads_at_initial_state() {
        let state = initial();
        let log = ActionLog::new(&state);

        assert!(log.is_empty());
        assert_eq!(log.head_digest(), state.digest());
        assert_eq!(log.actions_root(), compute_actions_root(&[]));
    }

    #[test]
    fn actions_root_commits_to_order() {
        let state = initial();
        let mut forward = ActionLog::new(&state);
        forward.push(record(0, Action::Wait));
        forward.push(record(1, Action::tool(ToolId::Smokebomb)));

        let mut reversed = ActionLog::new(&state);
        reversed.push(record(0, Action::tool(ToolId::Smokebomb)));
        reversed.push(record(1, Action::Wait));

        assert_ne!(forward.actions_root(), reversed.actions_root());
    }

    #[test]
    fn truncated_json_is_an_encoding_error() {
        assert!(matches!(
            ActionLog::from_json("{\"initial_digest\":"),
            Err(SessionError::Encoding(_))
        ));
    }
}
