use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A playing card from one of the two standard 52-card decks used in a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

/// The suit of a [card](Card).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    #[serde(rename = "S")]
    Spade,
    #[serde(rename = "H")]
    Heart,
    #[serde(rename = "D")]
    Diamond,
    #[serde(rename = "C")]
    Club,
}

/// The rank of a [card](Card).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

/// The two kinds of jacks, which have no cell on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JackKind {
    /// J♦ and J♣: place a chip on any open cell.
    TwoEyed,
    /// J♠ and J♥: remove an opponent's chip.
    OneEyed,
}

pub const SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

/// All ranks that have cells on the board, i.e. everything but the jack.
pub const BOARD_RANKS: [Rank; 12] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Queen,
    Rank::King,
];

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn is_jack(&self) -> bool {
        self.rank == Rank::Jack
    }

    pub fn jack_kind(&self) -> Option<JackKind> {
        match (self.rank, self.suit) {
            (Rank::Jack, Suit::Diamond | Suit::Club) => Some(JackKind::TwoEyed),
            (Rank::Jack, Suit::Spade | Suit::Heart) => Some(JackKind::OneEyed),
            _ => None,
        }
    }

    pub fn is_two_eyed_jack(&self) -> bool {
        self.jack_kind() == Some(JackKind::TwoEyed)
    }

    pub fn is_one_eyed_jack(&self) -> bool {
        self.jack_kind() == Some(JackKind::OneEyed)
    }
}

impl Rank {
    pub fn as_str(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl Suit {
    pub fn as_char(self) -> char {
        match self {
            Suit::Spade => 'S',
            Suit::Heart => 'H',
            Suit::Diamond => 'D',
            Suit::Club => 'C',
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.as_str(), self.suit.as_char())
    }
}

/// The error type for the [`FromStr`] instance of [`Card`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFromStrErr {
    Empty,
    InvalidRank,
    InvalidSuit,
}

impl std::error::Error for CardFromStrErr {}

impl std::fmt::Display for CardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardFromStrErr::Empty => write!(f, "Card code is empty"),
            CardFromStrErr::InvalidRank => write!(f, "Card code has an invalid rank"),
            CardFromStrErr::InvalidSuit => write!(f, "Card code has an invalid suit"),
        }
    }
}

impl FromStr for Card {
    type Err = CardFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit_char = s.chars().last().ok_or(CardFromStrErr::Empty)?;
        let suit = match suit_char {
            'S' | '♠' => Suit::Spade,
            'H' | '♥' => Suit::Heart,
            'D' | '♦' => Suit::Diamond,
            'C' | '♣' => Suit::Club,
            _ => return Err(CardFromStrErr::InvalidSuit),
        };
        let rank = match &s[..s.len() - suit_char.len_utf8()] {
            "A" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return Err(CardFromStrErr::InvalidRank),
        };
        Ok(Card { rank, suit })
    }
}

/// Shorthand for creating cards from their board notation.
///
/// The rank comes first (`A`, `2`..`10`, `J`, `Q`, `K`), then the suit letter
/// (`S`, `H`, `D` or `C`).
/// ```
/// # use sequence::{card, Card, Rank, Suit};
/// assert_eq!(card!("10H"), Card { rank: Rank::Ten, suit: Suit::Heart });
/// ```
#[macro_export]
macro_rules! card {
    ($rs:literal) => {
        <$crate::Card as std::str::FromStr>::from_str($rs)
            .expect("Invalid card code given to card! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use card;
