use std::str::FromStr;

use crate::{Board, Chip, Pos, BOARD_SIZE};

fn chip_symbol(chip: Chip) -> char {
    match chip {
        Chip::Empty => '.',
        Chip::Blue => 'B',
        Chip::Green => 'G',
        Chip::Wild => '*',
    }
}

/// Renders the chips with row and column indices, e.g.
///
/// ```text
///   0 1 2 3 4 5 6 7 8 9
/// 0 * . . . . . . . . *
/// 1 . B . . . . . . . .
/// ```
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, " ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", col)?;
        }
        for row in 0..BOARD_SIZE {
            write!(f, "\n{}", row)?;
            for col in 0..BOARD_SIZE {
                write!(f, " {}", chip_symbol(self.chip(Pos::new(row, col))))?;
            }
        }
        Ok(())
    }
}

/// The error type for the [`FromStr`] instance of [`Board`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardFromStrErr {
    WrongNumberOfRows { rows: usize },
    WrongNumberOfColumns { row: usize, cols: usize },
    InvalidSymbol { pos: Pos, symbol: char },
    ChipOnCorner { pos: Pos },
    WildOffCorner { pos: Pos },
}

impl std::error::Error for BoardFromStrErr {}

impl std::fmt::Display for BoardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardFromStrErr::WrongNumberOfRows { rows } => {
                write!(f, "Expected {} rows, got {}", BOARD_SIZE, rows)
            }
            BoardFromStrErr::WrongNumberOfColumns { row, cols } => {
                write!(f, "Expected {} cells in row {}, got {}", BOARD_SIZE, row, cols)
            }
            BoardFromStrErr::InvalidSymbol { pos, symbol } => {
                write!(f, "Invalid symbol '{}' at {}", symbol, pos)
            }
            BoardFromStrErr::ChipOnCorner { pos } => {
                write!(f, "The corner {} is always wild", pos)
            }
            BoardFromStrErr::WildOffCorner { pos } => {
                write!(f, "Only corners can be wild, but {} is not a corner", pos)
            }
        }
    }
}

/// Parses a board from the chip symbols of [`Board`]'s `Display` instance,
/// without the indices. Whitespace between symbols and blank lines are ignored.
///
/// ```
/// # use sequence::{Board, Chip, Pos};
/// let board: Board = "
///     * . . . . . . . . *
///     . B . . . . . . . .
///     . . G . . . . . . .
///     . . . . . . . . . .
///     . . . . . . . . . .
///     . . . . . . . . . .
///     . . . . . . . . . .
///     . . . . . . . . . .
///     . . . . . . . . . .
///     * . . . . . . . . .
/// ".parse().unwrap();
/// assert_eq!(board.chip(Pos::new(1, 1)), Chip::Blue);
/// assert_eq!(board.chip(Pos::new(9, 9)), Chip::Wild);
/// ```
impl FromStr for Board {
    type Err = BoardFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|symbols| !symbols.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(BoardFromStrErr::WrongNumberOfRows { rows: rows.len() });
        }

        let mut board = Board::new();
        for (row, symbols) in rows.iter().enumerate() {
            if symbols.len() != BOARD_SIZE as usize {
                return Err(BoardFromStrErr::WrongNumberOfColumns {
                    row,
                    cols: symbols.len(),
                });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                let pos = Pos::new(row as i8, col as i8);
                let chip = match symbol {
                    '.' => Chip::Empty,
                    'B' => Chip::Blue,
                    'G' => Chip::Green,
                    '*' => Chip::Wild,
                    _ => return Err(BoardFromStrErr::InvalidSymbol { pos, symbol }),
                };
                match (pos.is_corner(), chip) {
                    (true, Chip::Empty | Chip::Wild) => {}
                    (true, _) => return Err(BoardFromStrErr::ChipOnCorner { pos }),
                    (false, Chip::Wild) => return Err(BoardFromStrErr::WildOffCorner { pos }),
                    (false, chip) => board.set_chip(pos, chip),
                }
            }
        }
        Ok(board)
    }
}
