use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, LootId, Position};

/// Reasons a move is rejected; the state is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("destination {destination} is out of bounds")]
    OutOfBounds { destination: Position },

    #[error("destination {destination} is a wall")]
    Wall { destination: Position },

    #[error("destination {destination} is a locked keycard door")]
    LockedDoor { destination: Position },
}

impl MoveError {
    pub fn destination(&self) -> Position {
        match self {
            Self::OutOfBounds { destination }
            | Self::Wall { destination }
            | Self::LockedDoor { destination } => *destination,
        }
    }
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "MOVE_OUT_OF_BOUNDS",
            Self::Wall { .. } => "MOVE_WALL",
            Self::LockedDoor { .. } => "MOVE_LOCKED_DOOR",
        }
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CardinalDirection {
    #[strum(to_string = "north", serialize = "n", serialize = "up")]
    North,
    #[strum(to_string = "south", serialize = "s", serialize = "down")]
    South,
    #[strum(to_string = "east", serialize = "e", serialize = "right")]
    East,
    #[strum(to_string = "west", serialize = "w", serialize = "left")]
    West,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::South,
        CardinalDirection::East,
        CardinalDirection::West,
    ];

    /// Rows grow downwards, so north decreases `y`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, -1),
            CardinalDirection::South => (0, 1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::West => (-1, 0),
        }
    }

    pub fn step(self, origin: Position) -> Position {
        let (dx, dy) = self.delta();
        origin.offset(dx, dy)
    }
}

/// Side effects of an accepted move that later turn steps need.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Loot picked up on the destination cell and its base value.
    pub collected: Option<(LootId, u32)>,
}

/// Moves the player one cell, emitting footsteps and collecting loot.
pub(crate) fn apply_move(
    state: &mut GameState,
    direction: CardinalDirection,
    config: &GameConfig,
) -> Result<MoveOutcome, MoveError> {
    let destination = direction.step(state.player.position);
    let Some(cell) = state.world.cell_at(destination) else {
        return Err(MoveError::OutOfBounds { destination });
    };
    if !cell.is_passable(state.player.has_keycard) {
        return Err(if cell.blocks_sight() {
            MoveError::Wall { destination }
        } else {
            MoveError::LockedDoor { destination }
        });
    }

    // Footsteps land on the destination; smoke there muffles them.
    if !state.smoke.covers(destination) {
        state.noises.emit(
            destination,
            config.footstep_noise_radius,
            config.footstep_noise_turns,
        );
    }
    state.player.position = destination;

    let mut outcome = MoveOutcome::default();
    if let Some(loot) = state
        .loot
        .iter_mut()
        .find(|loot| !loot.collected && loot.position == destination)
    {
        loot.collected = true;
        state.loot_collected += 1;
        outcome.collected = Some((loot.id, loot.value));
    }

    Ok(outcome)
}
