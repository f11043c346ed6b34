use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::{Card, Rank, BOARD_RANKS, SUITS};

/// Two physical decks are combined for one game.
pub const NUM_DECKS: usize = 2;

/// Total number of cards in play, jacks included.
pub const DECK_SIZE: usize = NUM_DECKS * 52;

/// Both decks in a fixed order, before shuffling.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for _ in 0..NUM_DECKS {
        for suit in SUITS {
            for rank in BOARD_RANKS {
                deck.push(Card::new(rank, suit));
            }
            deck.push(Card::new(Rank::Jack, suit));
        }
    }
    deck
}

/// A uniformly shuffled draw pile. Cards are drawn from the end.
pub fn shuffled_deck(rng: &mut StdRng) -> Vec<Card> {
    let mut deck = full_deck();
    deck.shuffle(rng);
    deck
}
