use rand::rngs::StdRng;

use crate::sequences::{complete_windows, complete_windows_through, record_candidates};
use crate::{shuffled_deck, Board, Card, CellSet, Chip, Pos, Sequence};

pub const NUM_PLAYERS: usize = 2;

/// Cards per hand in a two-player game.
pub const HAND_SIZE: usize = 7;

/// Recorded sequences needed to win a two-player game.
pub const SEQUENCES_TO_WIN: usize = 2;

/// Everything about one game in progress.
///
/// Only the [`Game`](crate::Game) controller mutates it; everybody else reads
/// it through the accessors.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) hands: [Vec<Card>; NUM_PLAYERS],
    /// Cards are drawn from the end.
    pub(crate) deck: Vec<Card>,
    pub(crate) discard_pile: Vec<Card>,
    /// Always equal to the cells of the board holding that player's chip.
    pub(crate) chips: [CellSet; NUM_PLAYERS],
    pub(crate) sequences: [Vec<Sequence>; NUM_PLAYERS],
    pub(crate) current_player: usize,
    pub(crate) turn_number: u32,
    pub(crate) winner: Option<usize>,
}

impl GameState {
    /// Shuffles both decks and deals a hand to every player.
    pub fn new(rng: &mut StdRng) -> Self {
        let mut deck = shuffled_deck(rng);
        let hands = std::array::from_fn(|_| deck.split_off(deck.len() - HAND_SIZE));
        Self {
            board: Board::new(),
            hands,
            deck,
            discard_pile: Vec::new(),
            chips: [CellSet::new(); NUM_PLAYERS],
            sequences: std::array::from_fn(|_| Vec::new()),
            current_player: 0,
            turn_number: 0,
            winner: None,
        }
    }

    /// Sets up a game in an arbitrary position, e.g. to analyze it.
    ///
    /// The chip sets are derived from the board, and every sequence already on
    /// the board is recorded in scan order. A player who already has enough
    /// sequences is the winner.
    pub fn from_position(
        board: Board,
        hands: [Vec<Card>; NUM_PLAYERS],
        deck: Vec<Card>,
        current_player: usize,
    ) -> Self {
        assert!(current_player < NUM_PLAYERS);
        let chips = std::array::from_fn(|player| board.cells_with(Chip::of_player(player)));
        let sequences = std::array::from_fn(|player| {
            let mut recorded = Vec::new();
            record_candidates(complete_windows(&board, Chip::of_player(player)), &mut recorded);
            recorded
        });
        let mut state = Self {
            board,
            hands,
            deck,
            discard_pile: Vec::new(),
            chips,
            sequences,
            current_player,
            turn_number: 0,
            winner: None,
        };
        state.winner = (0..NUM_PLAYERS).find(|&p| state.sequences[p].len() >= SEQUENCES_TO_WIN);
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hand(&self, player_idx: usize) -> &[Card] {
        &self.hands[player_idx]
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    pub fn chips(&self, player_idx: usize) -> CellSet {
        self.chips[player_idx]
    }

    pub fn sequences(&self, player_idx: usize) -> &[Sequence] {
        &self.sequences[player_idx]
    }

    pub fn current_player(&self) -> usize {
        self.current_player
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Everybody except `player_idx`.
    pub fn opponents(&self, player_idx: usize) -> impl Iterator<Item = usize> {
        (0..NUM_PLAYERS).filter(move |&p| p != player_idx)
    }

    /// The player whose chip is on `pos`, if any.
    pub fn chip_owner(&self, pos: Pos) -> Option<usize> {
        (0..NUM_PLAYERS).find(|&p| self.chips[p].contains(pos))
    }

    /// Chips that are part of a recorded sequence cannot be removed.
    pub fn is_chip_in_completed_sequence(&self, pos: Pos, player_idx: usize) -> bool {
        self.sequences[player_idx].iter().any(|seq| seq.contains(pos))
    }

    pub(crate) fn place_chip(&mut self, pos: Pos, player_idx: usize) {
        self.board.set_chip(pos, Chip::of_player(player_idx));
        self.chips[player_idx] = self.chips[player_idx].insert(pos);
    }

    pub(crate) fn remove_chip(&mut self, pos: Pos, player_idx: usize) {
        self.board.set_chip(pos, Chip::Empty);
        self.chips[player_idx] = self.chips[player_idx].remove(pos);
    }

    /// Records the sequences of `player_idx` formed by a chip just placed on `pos`.
    /// Returns how many were recorded.
    pub(crate) fn record_sequences_through(&mut self, pos: Pos, player_idx: usize) -> usize {
        let candidates =
            complete_windows_through(&self.board, pos, Chip::of_player(player_idx));
        record_candidates(candidates, &mut self.sequences[player_idx])
    }
}
