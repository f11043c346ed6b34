use rand::rngs::StdRng;

use crate::{Action, Board, GameState, IllegalMove, Move, NUM_PLAYERS, SEQUENCES_TO_WIN};

/// Where a game is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { player_idx: usize },
    /// Nobody won and nobody can move anymore.
    Drawn,
}

/// Summarizes the outcome of playing a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Normal { sequences_formed: usize },
    /// The mover reached the winning number of sequences with this move.
    Won { player_idx: usize },
}

/// A move as it was applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlayedMove {
    pub player_idx: usize,
    pub mv: Move,
    pub turn_number: u32,
}

/// The turn controller. It owns the [`GameState`] and is the only thing that changes it.
#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
    history: Vec<PlayedMove>,
}

impl Game {
    /// Starts a new game with freshly shuffled decks.
    pub fn new(rng: &mut StdRng) -> Self {
        Self::from_state(GameState::new(rng))
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    pub fn current_player(&self) -> usize {
        self.state.current_player
    }

    pub fn valid_moves(&self, player_idx: usize) -> Vec<Move> {
        self.state.valid_moves(player_idx)
    }

    pub fn winner(&self) -> Option<usize> {
        self.state.winner
    }

    pub fn status(&self) -> GameStatus {
        if let Some(player_idx) = self.state.winner {
            GameStatus::Won { player_idx }
        } else if (0..NUM_PLAYERS).any(|p| self.state.has_valid_move(p)) {
            GameStatus::InProgress
        } else {
            GameStatus::Drawn
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    /// The board as text, see [`Board`]'s `Display` instance.
    pub fn board_display(&self) -> String {
        self.state.board.to_string()
    }

    /// Plays a move for the current player.
    ///
    /// On success the played card is discarded, a replacement is drawn if the
    /// deck isn't empty, new sequences are recorded, and the turn passes on.
    /// On error, nothing changes.
    pub fn make_move(&mut self, mv: Move) -> Result<TurnOutcome, IllegalMove> {
        let player_idx = self.state.current_player;
        let card_idx = self.validate(player_idx, mv)?;

        match mv.action {
            Action::Place => self.state.place_chip(mv.pos, player_idx),
            Action::Remove => {
                // validate() made sure the chip exists
                if let Some(owner) = self.state.chip_owner(mv.pos) {
                    self.state.remove_chip(mv.pos, owner);
                }
            }
        }

        let card = self.state.hands[player_idx].remove(card_idx);
        self.state.discard_pile.push(card);
        if let Some(next_card) = self.state.deck.pop() {
            self.state.hands[player_idx].push(next_card);
        }

        self.history.push(PlayedMove {
            player_idx,
            mv,
            turn_number: self.state.turn_number,
        });

        let sequences_formed = match mv.action {
            Action::Place => self.state.record_sequences_through(mv.pos, player_idx),
            Action::Remove => 0,
        };
        let won = self.state.sequences[player_idx].len() >= SEQUENCES_TO_WIN;
        if won {
            self.state.winner = Some(player_idx);
        }

        self.state.turn_number += 1;
        self.state.current_player = (player_idx + 1) % NUM_PLAYERS;

        Ok(if won {
            TurnOutcome::Won { player_idx }
        } else {
            TurnOutcome::Normal { sequences_formed }
        })
    }

    /// Checks a move without applying it. Returns the index of the card in the hand.
    fn validate(&self, player_idx: usize, mv: Move) -> Result<usize, IllegalMove> {
        if self.state.winner.is_some() {
            return Err(IllegalMove::GameOver);
        }
        let Move { card, pos, action } = mv;
        let card_idx = self.state.hands[player_idx]
            .iter()
            .position(|&c| c == card)
            .ok_or(IllegalMove::CardNotInHand { card })?;

        match action {
            Action::Place => {
                if card.is_one_eyed_jack() {
                    return Err(IllegalMove::OneEyedJackPlaced { card });
                }
                if !self.state.board.is_position_available(pos) {
                    return Err(IllegalMove::CellNotAvailable { pos });
                }
                if !card.is_two_eyed_jack() && Board::layout_card(pos) != Some(card) {
                    return Err(IllegalMove::CardDoesNotMatchCell { card, pos });
                }
            }
            Action::Remove => {
                if !card.is_one_eyed_jack() {
                    return Err(IllegalMove::NotARemovalCard { card });
                }
                let owner = self
                    .state
                    .chip_owner(pos)
                    .filter(|&owner| owner != player_idx)
                    .ok_or(IllegalMove::NoOpponentChip { pos })?;
                if self.state.is_chip_in_completed_sequence(pos, owner) {
                    return Err(IllegalMove::ChipInCompletedSequence { pos });
                }
            }
        }
        Ok(card_idx)
    }
}
