use crate::Rank::*;
use crate::{Card, Rank, Suit, BOARD_SIZE};

const S: Suit = Suit::Spade;
const H: Suit = Suit::Heart;
const D: Suit = Suit::Diamond;
const C: Suit = Suit::Club;
/// A corner cell, which has no card.
const XX: Option<Card> = None;

const fn c(rank: Rank, suit: Suit) -> Option<Card> {
    Some(Card::new(rank, suit))
}

/// The printed card of every cell of the standard board.
///
/// Every card except the jacks appears exactly twice.
#[rustfmt::skip]
pub(super) static LAYOUT: [[Option<Card>; BOARD_SIZE as usize]; BOARD_SIZE as usize] = [
    [XX, c(Two, S), c(Three, S), c(Four, S), c(Five, S), c(Six, S), c(Seven, S), c(Eight, S), c(Nine, S), XX],
    [c(Six, C), c(Five, C), c(Four, C), c(Three, C), c(Two, C), c(Ace, H), c(King, H), c(Queen, H), c(Ten, H), c(Ten, S)],
    [c(Seven, C), c(Ace, S), c(Two, D), c(Three, D), c(Four, D), c(Five, D), c(Six, D), c(Seven, D), c(Nine, H), c(Queen, S)],
    [c(Eight, C), c(King, S), c(Six, C), c(Five, C), c(Four, C), c(Three, C), c(Two, C), c(Eight, D), c(Eight, H), c(King, S)],
    [c(Nine, C), c(Queen, S), c(Seven, C), c(Six, H), c(Five, H), c(Four, H), c(Ace, H), c(Nine, D), c(Seven, H), c(Ace, S)],
    [c(Ten, C), c(Ten, S), c(Eight, C), c(Seven, H), c(Two, H), c(Three, H), c(King, H), c(Ten, D), c(Six, H), c(Two, D)],
    [c(Queen, C), c(Nine, S), c(Nine, C), c(Eight, H), c(Nine, H), c(Ten, H), c(Queen, H), c(Queen, D), c(Five, H), c(Three, D)],
    [c(King, C), c(Eight, S), c(Ten, C), c(Queen, C), c(King, C), c(Ace, C), c(Ace, D), c(King, D), c(Four, H), c(Four, D)],
    [c(Ace, C), c(Seven, S), c(Six, S), c(Five, S), c(Four, S), c(Three, S), c(Two, S), c(Two, H), c(Three, H), c(Five, D)],
    [XX, c(Ace, D), c(King, D), c(Queen, D), c(Ten, D), c(Nine, D), c(Eight, D), c(Seven, D), c(Six, D), XX],
];

