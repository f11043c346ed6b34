use serde::{Deserialize, Serialize};

use crate::{Board, Card, GameState, JackKind, Pos};

/// What a move does to its cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Put one of the mover's chips on an empty cell.
    Place,
    /// Take an opponent's chip off the board, with a one-eyed jack.
    Remove,
}

/// Specifies which card to play, and on which cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub card: Card,
    pub pos: Pos,
    pub action: Action,
}

impl Move {
    pub fn place(card: Card, pos: Pos) -> Self {
        Self {
            card,
            pos,
            action: Action::Place,
        }
    }

    pub fn remove(card: Card, pos: Pos) -> Self {
        Self {
            card,
            pos,
            action: Action::Remove,
        }
    }

    pub fn is_removal(&self) -> bool {
        self.action == Action::Remove
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self.action {
            Action::Place => "place",
            Action::Remove => "remove",
        };
        write!(f, "{} {} at {}", verb, self.card, self.pos)
    }
}

impl GameState {
    /// All legal moves of `player_idx` with their current hand.
    ///
    /// Dead cards contribute nothing. A card held twice contributes its moves
    /// only once.
    pub fn valid_moves(&self, player_idx: usize) -> Vec<Move> {
        let hand = &self.hands[player_idx];
        let mut moves = Vec::new();
        for (card_idx, &card) in hand.iter().enumerate() {
            if hand[..card_idx].contains(&card) {
                continue;
            }
            match card.jack_kind() {
                Some(JackKind::TwoEyed) => {
                    moves.extend(
                        Pos::all()
                            .filter(|&pos| self.board.is_position_available(pos))
                            .map(|pos| Move::place(card, pos)),
                    );
                }
                Some(JackKind::OneEyed) => {
                    for opponent in self.opponents(player_idx) {
                        moves.extend(
                            self.chips[opponent]
                                .into_iter()
                                .filter(|&pos| !self.is_chip_in_completed_sequence(pos, opponent))
                                .map(|pos| Move::remove(card, pos)),
                        );
                    }
                }
                None => {
                    moves.extend(
                        Board::card_positions(card)
                            .into_iter()
                            .filter(|&pos| self.board.is_position_available(pos))
                            .map(|pos| Move::place(card, pos)),
                    );
                }
            }
        }
        moves
    }

    /// Whether `player_idx` has at least one legal move.
    pub fn has_valid_move(&self, player_idx: usize) -> bool {
        !self.valid_moves(player_idx).is_empty()
    }
}
