use crate::{Card, Pos};

/// The error type for [`Game::make_move()`](crate::Game::make_move).
///
/// A move that fails with one of these leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    GameOver,
    CardNotInHand { card: Card },
    CardDoesNotMatchCell { card: Card, pos: Pos },
    CellNotAvailable { pos: Pos },
    OneEyedJackPlaced { card: Card },
    NotARemovalCard { card: Card },
    NoOpponentChip { pos: Pos },
    ChipInCompletedSequence { pos: Pos },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::GameOver => write!(f, "Tried to move after the game ended"),
            IllegalMove::CardNotInHand { card } => {
                write!(f, "Tried to play {}, which is not in the player's hand", card)
            }
            IllegalMove::CardDoesNotMatchCell { card, pos } => {
                write!(f, "Tried to play {} on {}, which shows a different card", card, pos)
            }
            IllegalMove::CellNotAvailable { pos } => {
                write!(f, "Tried to place a chip on {}, which is not empty", pos)
            }
            IllegalMove::OneEyedJackPlaced { card } => {
                write!(f, "Tried to place a chip with {}, which can only remove chips", card)
            }
            IllegalMove::NotARemovalCard { card } => {
                write!(f, "Tried to remove a chip with {}, which is not a one-eyed jack", card)
            }
            IllegalMove::NoOpponentChip { pos } => {
                write!(f, "Tried to remove a chip from {}, which has no opponent chip", pos)
            }
            IllegalMove::ChipInCompletedSequence { pos } => {
                write!(f, "Tried to remove the chip on {}, which is part of a sequence", pos)
            }
        }
    }
}
