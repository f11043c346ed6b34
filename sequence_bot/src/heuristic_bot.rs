use rand::rngs::StdRng;
use rand::Rng;
use sequence::{Game, GameState};
use tracing::{debug, trace};

use crate::{evaluate_move, Bot, MoveEvaluation, Strategy, Weights};

/// Moves scoring at most this much below the best are considered equally good.
pub const TIE_TOLERANCE: f64 = 0.5;

/// Scores every legal move and picks one of the best.
pub struct HeuristicBot {
    strategy: Strategy,
    weights: Weights,
    rng: StdRng,
    player_idx: Option<usize>,
}

impl HeuristicBot {
    pub fn new(strategy: Strategy, rng: StdRng) -> Self {
        Self::with_weights(strategy, strategy.weights(), rng)
    }

    /// A bot with custom weights. The strategy only serves as its name.
    pub fn with_weights(strategy: Strategy, weights: Weights, rng: StdRng) -> Self {
        Self {
            strategy,
            weights,
            rng,
            player_idx: None,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Evaluations of all legal moves of `player_idx`, best first.
    /// Equal scores keep the order of [`GameState::valid_moves()`].
    pub fn evaluate_all(&self, state: &GameState, player_idx: usize) -> Vec<MoveEvaluation> {
        let mut evals: Vec<MoveEvaluation> = state
            .valid_moves(player_idx)
            .into_iter()
            .map(|mv| evaluate_move(state, player_idx, mv, &self.weights))
            .collect();
        evals.sort_by(|a, b| b.score.total_cmp(&a.score));
        evals
    }

    /// The top-scoring move for the player to move, without randomness.
    pub fn best_evaluation(&self, game: &Game) -> Option<MoveEvaluation> {
        self.evaluate_all(game.state(), game.current_player())
            .into_iter()
            .next()
    }

    /// Picks uniformly among the moves within [`TIE_TOLERANCE`] of the best score.
    pub fn choose_move(&mut self, game: &Game) -> Option<MoveEvaluation> {
        let player_idx = game.current_player();
        let evals = self.evaluate_all(game.state(), player_idx);
        let top_score = evals.first()?.score;
        let num_top_choices = evals
            .iter()
            .take_while(|eval| eval.score >= top_score - TIE_TOLERANCE)
            .count();
        for eval in &evals[..num_top_choices] {
            trace!(player_idx, mv = %eval.mv, score = eval.score, reasons = %eval.reasoning(), "Top choice");
        }
        let chosen = self.rng.gen_range(0..num_top_choices);
        let eval = evals.into_iter().nth(chosen)?;
        debug!(
            player_idx,
            strategy = %self.strategy,
            mv = %eval.mv,
            score = eval.score,
            num_top_choices,
            "Chose move"
        );
        Some(eval)
    }
}

impl Bot for HeuristicBot {
    fn name(&self) -> String {
        self.strategy.to_string()
    }

    fn new_game(&mut self, player_idx: usize) {
        self.player_idx = Some(player_idx);
    }

    fn play_turn(&mut self, game: &Game) -> Option<MoveEvaluation> {
        if let Some(player_idx) = self.player_idx {
            debug_assert_eq!(player_idx, game.current_player(), "Asked to move out of turn");
        }
        self.choose_move(game)
    }
}
