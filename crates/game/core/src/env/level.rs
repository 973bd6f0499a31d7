//! Level descriptors and load-time validation.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::grid::{Cell, GridWorld};
use crate::error::{ErrorSeverity, GameError};
use crate::guard::pathing;
use crate::state::{GuardId, LootId, Position};

/// Errors that prevent a level from starting.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LevelLoadError {
    #[error("level grid is empty ({width}x{height})")]
    EmptyGrid { width: u32, height: u32 },

    #[error("level declares {expected} rows but the grid has {actual}")]
    RowCount { expected: u32, actual: usize },

    #[error("row {row} has {actual} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: u32,
        actual: usize,
    },

    #[error("unknown cell glyph {glyph:?} at row {row}, column {column}")]
    UnknownGlyph {
        glyph: char,
        row: usize,
        column: usize,
    },

    #[error("player start {position} is not a passable cell")]
    InvalidPlayerStart { position: Position },

    #[error("exit {position} is not an exit cell")]
    InvalidExit { position: Position },

    #[error("player start and exit share cell {position}")]
    StartIsExit { position: Position },

    #[error("keycard door {position} does not match a keycard-door cell")]
    KeycardDoorMismatch { position: Position },

    #[error("keycard-door cell {position} is missing from the door list")]
    UnlistedKeycardDoor { position: Position },

    #[error("guard id {id} is declared twice")]
    DuplicateGuard { id: GuardId },

    #[error("{guard} starts on invalid cell {position}")]
    InvalidGuardStart { guard: GuardId, position: Position },

    #[error("{guard} patrol point {position} is out of bounds")]
    PatrolPointOutOfBounds { guard: GuardId, position: Position },

    #[error("{guard} patrol point {position} is not passable")]
    PatrolPointBlocked { guard: GuardId, position: Position },

    #[error("loot id {id} is declared twice")]
    DuplicateLoot { id: LootId },

    #[error("{loot} sits on invalid cell {position}")]
    InvalidLoot { loot: LootId, position: Position },

    #[error("exit {exit} cannot be reached from {start}")]
    UnreachableExit { start: Position, exit: Position },
}

impl GameError for LevelLoadError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyGrid { .. } => "LEVEL_EMPTY_GRID",
            Self::RowCount { .. } | Self::RowWidth { .. } => "LEVEL_DIMENSION_MISMATCH",
            Self::UnknownGlyph { .. } => "LEVEL_UNKNOWN_GLYPH",
            Self::InvalidPlayerStart { .. } => "LEVEL_INVALID_PLAYER_START",
            Self::InvalidExit { .. } => "LEVEL_INVALID_EXIT",
            Self::StartIsExit { .. } => "LEVEL_START_IS_EXIT",
            Self::KeycardDoorMismatch { .. } | Self::UnlistedKeycardDoor { .. } => {
                "LEVEL_KEYCARD_DOOR_MISMATCH"
            }
            Self::DuplicateGuard { .. } => "LEVEL_DUPLICATE_GUARD",
            Self::InvalidGuardStart { .. } => "LEVEL_INVALID_GUARD_START",
            Self::PatrolPointOutOfBounds { .. } => "LEVEL_PATROL_OUT_OF_BOUNDS",
            Self::PatrolPointBlocked { .. } => "LEVEL_PATROL_BLOCKED",
            Self::DuplicateLoot { .. } => "LEVEL_DUPLICATE_LOOT",
            Self::InvalidLoot { .. } => "LEVEL_INVALID_LOOT",
            Self::UnreachableExit { .. } => "LEVEL_UNREACHABLE_EXIT",
        }
    }
}

/// Guard placement as supplied by a level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuardSpec {
    pub id: GuardId,
    pub position: Position,
    pub patrol_path: Vec<Position>,
    pub vision_range: u32,
}

impl GuardSpec {
    pub fn new(id: u32, position: Position, vision_range: u32) -> Self {
        Self {
            id: GuardId(id),
            position,
            patrol_path: Vec::new(),
            vision_range,
        }
    }

    pub fn with_patrol(mut self, patrol_path: Vec<Position>) -> Self {
        self.patrol_path = patrol_path;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootSpec {
    pub id: LootId,
    pub position: Position,
    pub value: u32,
}

impl LootSpec {
    pub fn new(id: u32, position: Position, value: u32) -> Self {
        Self {
            id: LootId(id),
            position,
            value,
        }
    }
}

/// Raw level data handed over by a loader, not yet validated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelDescriptor {
    pub width: u32,
    pub height: u32,
    /// Row-major cells, `grid[y][x]`.
    pub grid: Vec<Vec<Cell>>,
    pub guards: Vec<GuardSpec>,
    pub loot: Vec<LootSpec>,
    pub player_start: Position,
    pub exit: Position,
    pub keycard_doors: Vec<Position>,
    pub difficulty: u32,
}

impl LevelDescriptor {
    /// Builds a descriptor from glyph rows (see [`Cell::from_glyph`]).
    ///
    /// Dimensions are taken from the first row and the row count; keycard doors
    /// are collected from `D` glyphs. Ragged rows are kept as-is so that
    /// [`validate`](Self::validate) reports them.
    pub fn from_rows<S: AsRef<str>>(
        rows: &[S],
        player_start: Position,
        exit: Position,
    ) -> Result<Self, LevelLoadError> {
        let mut grid = Vec::with_capacity(rows.len());
        let mut keycard_doors = Vec::new();

        for (row, text) in rows.iter().enumerate() {
            let mut cells = Vec::new();
            for (column, glyph) in text.as_ref().chars().enumerate() {
                let cell = Cell::from_glyph(glyph).ok_or(LevelLoadError::UnknownGlyph {
                    glyph,
                    row,
                    column,
                })?;
                if cell == Cell::KeycardDoor {
                    keycard_doors.push(Position::new(column as i32, row as i32));
                }
                cells.push(cell);
            }
            grid.push(cells);
        }

        Ok(Self {
            width: grid.first().map_or(0, |row| row.len() as u32),
            height: grid.len() as u32,
            grid,
            guards: Vec::new(),
            loot: Vec::new(),
            player_start,
            exit,
            keycard_doors,
            difficulty: 0,
        })
    }

    pub fn with_guard(mut self, guard: GuardSpec) -> Self {
        self.guards.push(guard);
        self
    }

    pub fn with_loot(mut self, loot: LootSpec) -> Self {
        self.loot.push(loot);
        self
    }

    pub fn with_difficulty(mut self, difficulty: u32) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Checks the descriptor and freezes it into a playable [`Level`].
    pub fn validate(self) -> Result<Level, LevelLoadError> {
        let Self {
            width,
            height,
            grid,
            mut guards,
            loot,
            player_start,
            exit,
            keycard_doors,
            difficulty,
        } = self;

        if width == 0 || height == 0 {
            return Err(LevelLoadError::EmptyGrid { width, height });
        }
        if grid.len() != height as usize {
            return Err(LevelLoadError::RowCount {
                expected: height,
                actual: grid.len(),
            });
        }
        if let Some((row, cells)) = grid
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != width as usize)
        {
            return Err(LevelLoadError::RowWidth {
                row,
                expected: width,
                actual: cells.len(),
            });
        }

        let cells = grid.into_iter().flatten().collect();
        let world = GridWorld::new(
            width,
            height,
            cells,
            player_start,
            exit,
            keycard_doors,
            difficulty,
        );

        if !world.is_passable(player_start, false) {
            return Err(LevelLoadError::InvalidPlayerStart {
                position: player_start,
            });
        }
        if world.cell_at(exit) != Some(Cell::Exit) {
            return Err(LevelLoadError::InvalidExit { position: exit });
        }
        if player_start == exit {
            return Err(LevelLoadError::StartIsExit { position: exit });
        }
        if let Some(&position) = world
            .keycard_doors()
            .iter()
            .find(|door| world.cell_at(**door) != Some(Cell::KeycardDoor))
        {
            return Err(LevelLoadError::KeycardDoorMismatch { position });
        }
        if let Some(position) = world
            .cells_of(Cell::KeycardDoor)
            .find(|door| !world.keycard_doors().contains(door))
        {
            return Err(LevelLoadError::UnlistedKeycardDoor { position });
        }

        let mut seen_guards = BTreeSet::new();
        for guard in &guards {
            if !seen_guards.insert(guard.id) {
                return Err(LevelLoadError::DuplicateGuard { id: guard.id });
            }
            // Guards carry keys, so only walls and the void are off limits.
            if !world.is_passable(guard.position, true) {
                return Err(LevelLoadError::InvalidGuardStart {
                    guard: guard.id,
                    position: guard.position,
                });
            }
            for &point in &guard.patrol_path {
                if !world.in_bounds(point) {
                    return Err(LevelLoadError::PatrolPointOutOfBounds {
                        guard: guard.id,
                        position: point,
                    });
                }
                if !world.is_passable(point, true) {
                    return Err(LevelLoadError::PatrolPointBlocked {
                        guard: guard.id,
                        position: point,
                    });
                }
            }
        }
        guards.sort_by_key(|guard| guard.id);

        let mut seen_loot = BTreeSet::new();
        for item in &loot {
            if !seen_loot.insert(item.id) {
                return Err(LevelLoadError::DuplicateLoot { id: item.id });
            }
            if !world.is_passable(item.position, true) {
                return Err(LevelLoadError::InvalidLoot {
                    loot: item.id,
                    position: item.position,
                });
            }
        }

        if pathing::distance(&world, player_start, exit, true).is_none() {
            return Err(LevelLoadError::UnreachableExit {
                start: player_start,
                exit,
            });
        }

        Ok(Level {
            world: Arc::new(world),
            guards,
            loot,
        })
    }
}

/// A validated level: the frozen grid plus the entities placed on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    world: Arc<GridWorld>,
    guards: Vec<GuardSpec>,
    loot: Vec<LootSpec>,
}

impl Level {
    pub fn world(&self) -> &Arc<GridWorld> {
        &self.world
    }

    /// Guard placements in ascending id order.
    pub fn guards(&self) -> &[GuardSpec] {
        &self.guards
    }

    pub fn loot(&self) -> &[LootSpec] {
        &self.loot
    }
}
