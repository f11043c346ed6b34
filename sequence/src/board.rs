mod layout;

use serde::{Deserialize, Serialize};

use crate::{Card, CellSet};
use layout::LAYOUT;

/// Number of rows and of columns.
pub const BOARD_SIZE: i8 = 10;

const NUM_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Length of a sequence.
pub const SEQUENCE_LEN: usize = 5;

pub const CORNERS: [Pos; 4] = [
    Pos::new(0, 0),
    Pos::new(0, BOARD_SIZE - 1),
    Pos::new(BOARD_SIZE - 1, 0),
    Pos::new(BOARD_SIZE - 1, BOARD_SIZE - 1),
];

/// Coordinates of a cell. Row 0 is the top row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: i8,
    pub col: i8,
}

/// What occupies a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chip {
    Empty,
    /// The chip of the first player.
    Blue,
    /// The chip of the second player.
    Green,
    /// Only the four corners are wild, and they stay wild for the whole game.
    Wild,
}

/// One of the four line directions, each given as a (row, col) step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

/// The chips on the board. The printed cards are the same for every board, see [`Board::layout_card()`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    chips: [Chip; NUM_CELLS],
}

impl Pos {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    pub fn is_corner(self) -> bool {
        CORNERS.contains(&self)
    }

    /// The cell `steps` steps away in `dir`. Negative steps go backwards.
    pub fn step(self, dir: Direction, steps: i8) -> Pos {
        let (dr, dc) = dir.delta();
        Pos::new(self.row + dr * steps, self.col + dc * steps)
    }

    /// Row-major index of this cell.
    pub(crate) fn index(self) -> usize {
        debug_assert!(self.in_bounds(), "{:?} is off the board", self);
        (self.row as usize) * (BOARD_SIZE as usize) + self.col as usize
    }

    /// All cells in row-major order.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Pos::new(row, col)))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Chip {
    /// The chip color of a player.
    ///
    /// Panics for a player index that is not 0 or 1.
    pub fn of_player(player_idx: usize) -> Chip {
        match player_idx {
            0 => Chip::Blue,
            1 => Chip::Green,
            _ => panic!("Chip::of_player called with {}", player_idx),
        }
    }

    pub fn owner(self) -> Option<usize> {
        match self {
            Chip::Blue => Some(0),
            Chip::Green => Some(1),
            Chip::Empty | Chip::Wild => None,
        }
    }

    /// Whether this cell counts towards a sequence of `player_chip`.
    pub fn counts_for(self, player_chip: Chip) -> bool {
        self == player_chip || self == Chip::Wild
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }

    /// The five-cell window starting at `start` and going along this direction,
    /// if it fits on the board.
    pub fn window_from(self, start: Pos) -> Option<[Pos; SEQUENCE_LEN]> {
        let end = start.step(self, SEQUENCE_LEN as i8 - 1);
        if !start.in_bounds() || !end.in_bounds() {
            return None;
        }
        Some(std::array::from_fn(|i| start.step(self, i as i8)))
    }

    /// Every on-board window in this direction that contains `pos`,
    /// ordered by the position of `pos` in the window, from last to first.
    pub fn windows_through(self, pos: Pos) -> impl Iterator<Item = [Pos; SEQUENCE_LEN]> {
        (-(SEQUENCE_LEN as i8 - 1)..=0).filter_map(move |offset| self.window_from(pos.step(self, offset)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board without chips, except for the wild corners.
    pub fn new() -> Self {
        let mut chips = [Chip::Empty; NUM_CELLS];
        for corner in CORNERS {
            chips[corner.index()] = Chip::Wild;
        }
        Self { chips }
    }

    /// The card printed on a cell, or `None` for the corners.
    pub fn layout_card(pos: Pos) -> Option<Card> {
        LAYOUT[pos.row as usize][pos.col as usize]
    }

    /// The cells on which `card` is printed. This is empty for jacks.
    pub fn card_positions(card: Card) -> CellSet {
        Pos::all()
            .filter(|&pos| Self::layout_card(pos) == Some(card))
            .collect()
    }

    pub fn chip(&self, pos: Pos) -> Chip {
        self.chips[pos.index()]
    }

    pub(crate) fn set_chip(&mut self, pos: Pos, chip: Chip) {
        debug_assert!(!pos.is_corner(), "The corners are always wild");
        debug_assert_ne!(chip, Chip::Wild);
        self.chips[pos.index()] = chip;
    }

    /// Whether a chip may be put on this cell. The corners never are.
    pub fn is_position_available(&self, pos: Pos) -> bool {
        !pos.is_corner() && self.chip(pos) == Chip::Empty
    }

    /// A card is dead when it's not a jack and both of its cells are taken.
    pub fn is_dead_card(&self, card: Card) -> bool {
        if card.is_jack() {
            return false;
        }
        Self::card_positions(card)
            .into_iter()
            .all(|pos| self.chip(pos) != Chip::Empty)
    }

    /// All cells holding exactly this chip.
    pub fn cells_with(&self, chip: Chip) -> CellSet {
        Pos::all().filter(|&pos| self.chip(pos) == chip).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, Chip)> + '_ {
        Pos::all().map(move |pos| (pos, self.chip(pos)))
    }
}
