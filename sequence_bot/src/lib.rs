mod evaluator;
mod hand;
mod heuristic_bot;
mod random_bot;
mod strategy;

pub use evaluator::*;
pub use hand::*;
pub use heuristic_bot::*;
pub use random_bot::*;
pub use strategy::*;

use sequence::Game;

/// A player that picks moves for one seat of a [`Game`].
pub trait Bot {
    /// A short label, e.g. for summaries.
    fn name(&self) -> String;

    /// Called before the first turn of every game.
    fn new_game(&mut self, player_idx: usize);

    /// Picks a move for the player whose turn it is. `None` means there is no legal move.
    fn play_turn(&mut self, game: &Game) -> Option<MoveEvaluation>;
}
