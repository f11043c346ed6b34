use serde::{Deserialize, Serialize};

use crate::{Board, CellSet, Chip, Direction, Pos, SEQUENCE_LEN};

/// Two sequences of the same player may share at most this many cells.
pub const MAX_SEQUENCE_OVERLAP: u32 = 1;

/// Five contiguous cells in one direction, all holding the owner's chips or
/// being wild.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence {
    cells: [Pos; SEQUENCE_LEN],
    direction: Direction,
}

impl Sequence {
    pub fn cells(&self) -> &[Pos; SEQUENCE_LEN] {
        &self.cells
    }

    pub fn cell_set(&self) -> CellSet {
        CellSet::from_iter(self.cells)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }

    /// Number of cells shared with `other`.
    pub fn overlap(&self, other: &Sequence) -> u32 {
        (self.cell_set() & other.cell_set()).len()
    }
}

fn is_complete(board: &Board, window: &[Pos; SEQUENCE_LEN], chip: Chip) -> bool {
    window.iter().all(|&pos| board.chip(pos).counts_for(chip))
}

/// Every complete window on the board for `chip`, in scan order: by starting
/// cell in row-major order, then by direction.
pub fn complete_windows(board: &Board, chip: Chip) -> Vec<Sequence> {
    let mut found = Vec::new();
    for start in Pos::all() {
        for direction in Direction::ALL {
            if let Some(cells) = direction.window_from(start) {
                if is_complete(board, &cells, chip) {
                    found.push(Sequence { cells, direction });
                }
            }
        }
    }
    found
}

/// The complete windows for `chip` that contain `pos`, in the same order as
/// [`complete_windows()`].
///
/// Any sequence formed by placing a chip on `pos` must contain `pos`, so
/// after a placement this finds the same new sequences as a full scan.
pub fn complete_windows_through(board: &Board, pos: Pos, chip: Chip) -> Vec<Sequence> {
    let mut found: Vec<Sequence> = Direction::ALL
        .into_iter()
        .flat_map(|direction| {
            direction
                .windows_through(pos)
                .map(move |cells| Sequence { cells, direction })
        })
        .filter(|seq| is_complete(board, &seq.cells, chip))
        .collect();
    found.sort_by_key(|seq| (seq.cells[0], seq.direction));
    found
}

/// Whether `candidate` may be recorded next to the `recorded` sequences of
/// the same player.
pub fn can_record(candidate: &Sequence, recorded: &[Sequence]) -> bool {
    recorded.iter().all(|existing| {
        existing.cell_set() != candidate.cell_set()
            && existing.overlap(candidate) <= MAX_SEQUENCE_OVERLAP
    })
}

/// Records every admissible candidate, in order, checking each one against
/// the sequences recorded so far (including those admitted earlier in this
/// call). Returns the number of newly recorded sequences.
pub(crate) fn record_candidates(candidates: Vec<Sequence>, recorded: &mut Vec<Sequence>) -> usize {
    let before = recorded.len();
    for candidate in candidates {
        if can_record(&candidate, recorded) {
            recorded.push(candidate);
        }
    }
    recorded.len() - before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(chip: Chip, cells: impl IntoIterator<Item = Pos>) -> Board {
        let mut board = Board::new();
        for pos in cells {
            board.set_chip(pos, chip);
        }
        board
    }

    #[test]
    fn corner_counts_for_both_players() {
        let board = board_with(Chip::Blue, (1..5).map(|col| Pos::new(0, col)));
        let found = complete_windows(&board, Chip::Blue);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].cells()[0], Pos::new(0, 0));
        assert_eq!(found[0].direction(), Direction::Horizontal);
        assert!(complete_windows(&board, Chip::Green).is_empty());
    }

    #[test]
    fn opponent_chip_breaks_window() {
        let mut board = board_with(Chip::Blue, (2..7).map(|col| Pos::new(3, col)));
        board.set_chip(Pos::new(3, 4), Chip::Green);
        assert!(complete_windows(&board, Chip::Blue).is_empty());
    }

    #[test]
    fn six_in_a_row_records_one_sequence() {
        let board = board_with(Chip::Green, (1..7).map(|col| Pos::new(5, col)));
        let candidates = complete_windows(&board, Chip::Green);
        assert_eq!(candidates.len(), 2);
        let mut recorded = Vec::new();
        assert_eq!(record_candidates(candidates, &mut recorded), 1);
        assert_eq!(recorded[0].cells()[0], Pos::new(5, 1));
    }

    #[test]
    fn nine_in_a_row_records_two_sequences() {
        let board = board_with(Chip::Blue, (0..9).map(|row| Pos::new(row, 4)));
        let mut recorded = Vec::new();
        assert_eq!(record_candidates(complete_windows(&board, Chip::Blue), &mut recorded), 2);
        assert_eq!(recorded[0].overlap(&recorded[1]), 1);
    }

    #[test]
    fn crossing_sequences_share_one_cell() {
        let cells = (2..7)
            .map(|col| Pos::new(4, col))
            .chain((2..7).map(|row| Pos::new(row, 4)));
        let board = board_with(Chip::Blue, cells);
        let mut recorded = Vec::new();
        assert_eq!(record_candidates(complete_windows(&board, Chip::Blue), &mut recorded), 2);
    }

    #[test]
    fn already_recorded_is_not_recorded_again() {
        let board = board_with(Chip::Blue, (1..5).map(|col| Pos::new(9, col)));
        let mut recorded = Vec::new();
        assert_eq!(record_candidates(complete_windows(&board, Chip::Blue), &mut recorded), 1);
        assert_eq!(record_candidates(complete_windows(&board, Chip::Blue), &mut recorded), 0);
    }

    #[test]
    fn local_scan_matches_full_scan() {
        let board = board_with(Chip::Blue, (0..9).map(|row| Pos::new(row, 4)));
        let pos = Pos::new(4, 4);
        let full: Vec<_> = complete_windows(&board, Chip::Blue)
            .into_iter()
            .filter(|seq| seq.contains(pos))
            .collect();
        assert_eq!(complete_windows_through(&board, pos, Chip::Blue), full);
    }
}
