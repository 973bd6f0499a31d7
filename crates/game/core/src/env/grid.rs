use crate::action::CardinalDirection;
use crate::state::Position;

/// Static cell kinds of a level grid.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
#[strum(serialize_all = "kebab-case")]
pub enum Cell {
    #[default]
    Floor,
    Wall,
    Exit,
    Loot,
    KeycardDoor,
}

impl Cell {
    /// Parses the single-character notation used by level files.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Self::Floor),
            '#' => Some(Self::Wall),
            'E' => Some(Self::Exit),
            '$' => Some(Self::Loot),
            'D' => Some(Self::KeycardDoor),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Floor => '.',
            Self::Wall => '#',
            Self::Exit => 'E',
            Self::Loot => '$',
            Self::KeycardDoor => 'D',
        }
    }

    /// Only walls interrupt line of sight.
    pub fn blocks_sight(self) -> bool {
        matches!(self, Self::Wall)
    }

    pub fn is_passable(self, has_keycard: bool) -> bool {
        match self {
            Self::Wall => false,
            Self::KeycardDoor => has_keycard,
            Self::Floor | Self::Exit | Self::Loot => true,
        }
    }
}

/// Immutable per-level spatial data.
///
/// Built once by [`LevelDescriptor::validate`](super::LevelDescriptor::validate)
/// and shared by every state of the level; nothing mutates it afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridWorld {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    player_start: Position,
    exit: Position,
    keycard_doors: Vec<Position>,
    difficulty: u32,
}

impl GridWorld {
    pub(crate) fn new(
        width: u32,
        height: u32,
        cells: Vec<Cell>,
        player_start: Position,
        exit: Position,
        keycard_doors: Vec<Position>,
        difficulty: u32,
    ) -> Self {
        Self {
            width,
            height,
            cells,
            player_start,
            exit,
            keycard_doors,
            difficulty,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn player_start(&self) -> Position {
        self.player_start
    }

    pub fn exit(&self) -> Position {
        self.exit
    }

    pub fn keycard_doors(&self) -> &[Position] {
        &self.keycard_doors
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    pub(crate) fn index(&self, position: Position) -> Option<usize> {
        self.in_bounds(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    pub(crate) fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Positions of every `kind` cell, in row-major order.
    pub fn cells_of(&self, kind: Cell) -> impl Iterator<Item = Position> + '_ {
        let width = self.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| **cell == kind)
            .map(move |(index, _)| Position::new((index % width) as i32, (index / width) as i32))
    }

    /// Returns the cell at `position`, or `None` outside the grid.
    pub fn cell_at(&self, position: Position) -> Option<Cell> {
        self.index(position).map(|index| self.cells[index])
    }

    /// Walls are never passable; keycard doors only with a keycard.
    pub fn is_passable(&self, position: Position, has_keycard: bool) -> bool {
        self.cell_at(position)
            .is_some_and(|cell| cell.is_passable(has_keycard))
    }

    /// Out-of-bounds cells block sight like walls.
    pub fn blocks_sight(&self, position: Position) -> bool {
        self.cell_at(position).is_none_or(Cell::blocks_sight)
    }

    /// In-bounds 4-neighbours of `position` in N, S, E, W order.
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        CardinalDirection::ALL
            .into_iter()
            .map(move |direction| direction.step(position))
            .filter(|candidate| self.in_bounds(*candidate))
    }

    /// Renders the grid back into level-file notation, one string per row.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1) as usize)
            .map(|row| row.iter().map(|cell| cell.glyph()).collect())
            .collect()
    }
}
