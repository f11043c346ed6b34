use quickcheck::{Arbitrary, Gen};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::{Card, Game, Rank, Suit, BOARD_RANKS, SUITS};

/// A game after a random number of uniformly random legal moves.
#[derive(Clone, Debug)]
pub struct RandomGame {
    pub game: Game,
}

impl RandomGame {
    /// Plays up to `max_moves` random moves, all randomness coming from `seed`.
    pub fn play(seed: u64, max_moves: usize) -> Game {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new(&mut rng);
        for _ in 0..max_moves {
            if game.winner().is_some() {
                break;
            }
            let moves = game.valid_moves(game.current_player());
            match moves.choose(&mut rng) {
                Some(&mv) => {
                    game.make_move(mv).expect("Generated move was rejected");
                }
                None => break,
            }
        }
        game
    }
}

impl Arbitrary for RandomGame {
    fn arbitrary(g: &mut Gen) -> Self {
        let seed = u64::arbitrary(g);
        let max_moves = usize::from(u8::arbitrary(g));
        RandomGame {
            game: RandomGame::play(seed, max_moves),
        }
    }
}

impl Arbitrary for Suit {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&SUITS).unwrap()
    }
}

impl Arbitrary for Rank {
    fn arbitrary(g: &mut Gen) -> Self {
        if u8::arbitrary(g) % 13 == 0 {
            Rank::Jack
        } else {
            *g.choose(&BOARD_RANKS).unwrap()
        }
    }
}

impl Arbitrary for Card {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            rank: Rank::arbitrary(g),
            suit: Suit::arbitrary(g),
        }
    }
}
