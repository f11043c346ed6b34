use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use sequence::Game;

use crate::{Bot, MoveEvaluation};

/// Plays a uniformly random legal move.
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Bot for RandomBot {
    fn name(&self) -> String {
        "random".to_string()
    }

    fn new_game(&mut self, _player_idx: usize) {}

    fn play_turn(&mut self, game: &Game) -> Option<MoveEvaluation> {
        let moves = game.valid_moves(game.current_player());
        moves.choose(&mut self.rng).copied().map(MoveEvaluation::unscored)
    }
}
