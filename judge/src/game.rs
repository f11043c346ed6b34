use anyhow::Context;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use sequence::{Direction, Game, GameStatus, NUM_PLAYERS};
use sequence_bot::Bot;
use tracing::{debug, trace};

use crate::PlayerSpec;

/// The harness's safety cap on the number of turns in one game.
pub const DEFAULT_MAX_TURNS: u32 = 500;

/// How a game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Won { player_idx: usize },
    /// Nobody can move anymore.
    Drawn,
    /// The player to move had no legal move, although the other one had.
    Stalled { player_idx: usize },
    /// The turn cap was reached.
    TurnLimit,
}

/// The first sequence recorded in a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FirstSequence {
    pub turn_number: u32,
    pub player_idx: usize,
    pub direction: Direction,
}

/// What happened in one game, per player where it applies.
#[derive(Clone, Debug, PartialEq)]
pub struct GameRecord {
    pub game_idx: usize,
    pub seed: u64,
    pub outcome: GameOutcome,
    pub total_turns: u32,
    pub sequences: [usize; NUM_PLAYERS],
    pub chips_placed: [usize; NUM_PLAYERS],
    pub jacks_used: [usize; NUM_PLAYERS],
    pub blocking_moves: [usize; NUM_PLAYERS],
    pub first_sequence: Option<FirstSequence>,
}

impl GameRecord {
    pub fn winner(&self) -> Option<usize> {
        match self.outcome {
            GameOutcome::Won { player_idx } => Some(player_idx),
            _ => None,
        }
    }
}

/// Plays one game between freshly created bots.
///
/// The deck order and all choices of the bots are derived from `seed`, so
/// the same seed gives the same game. Returns an error only if a bot picks
/// a move the engine rejects.
pub fn play_game(
    game_idx: usize,
    seed: u64,
    players: &[PlayerSpec; NUM_PLAYERS],
    max_turns: u32,
) -> anyhow::Result<GameRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let game = Game::new(&mut rng);
    let bots = players
        .iter()
        .map(|spec| spec.create_bot(StdRng::seed_from_u64(rng.gen())))
        .collect();
    play_out(game_idx, seed, game, bots, max_turns)
}

/// Lets `bots` play `game` to its end, or until the turn cap.
fn play_out(
    game_idx: usize,
    seed: u64,
    mut game: Game,
    mut bots: Vec<Box<dyn Bot>>,
    max_turns: u32,
) -> anyhow::Result<GameRecord> {
    for (player_idx, bot) in bots.iter_mut().enumerate() {
        bot.new_game(player_idx);
    }

    let mut chips_placed = [0; NUM_PLAYERS];
    let mut jacks_used = [0; NUM_PLAYERS];
    let mut blocking_moves = [0; NUM_PLAYERS];
    let mut first_sequence = None;

    let outcome = loop {
        match game.status() {
            GameStatus::Won { player_idx } => break GameOutcome::Won { player_idx },
            GameStatus::Drawn => break GameOutcome::Drawn,
            GameStatus::InProgress => {}
        }
        if game.state().turn_number() >= max_turns {
            break GameOutcome::TurnLimit;
        }

        let player_idx = game.current_player();
        let Some(eval) = bots[player_idx].play_turn(&game) else {
            break GameOutcome::Stalled { player_idx };
        };
        trace!(game_idx, player_idx, mv = %eval.mv, score = eval.score);

        if eval.mv.card.is_jack() {
            jacks_used[player_idx] += 1;
        }
        if eval.blocks_opponent {
            blocking_moves[player_idx] += 1;
        }
        if !eval.mv.is_removal() {
            chips_placed[player_idx] += 1;
        }

        let turn_number = game.state().turn_number();
        game.make_move(eval.mv).with_context(|| {
            format!(
                "{} bot in seat {} played the illegal move {}",
                bots[player_idx].name(),
                player_idx,
                eval.mv
            )
        })?;

        if first_sequence.is_none() {
            if let Some(seq) = game.state().sequences(player_idx).first() {
                first_sequence = Some(FirstSequence {
                    turn_number,
                    player_idx,
                    direction: seq.direction(),
                });
            }
        }
    };

    let state = game.state();
    let record = GameRecord {
        game_idx,
        seed,
        outcome,
        total_turns: state.turn_number(),
        sequences: std::array::from_fn(|p| state.sequences(p).len()),
        chips_placed,
        jacks_used,
        blocking_moves,
        first_sequence,
    };
    debug!(
        game_idx,
        outcome = ?record.outcome,
        turns = record.total_turns,
        "Game finished"
    );
    Ok(record)
}

/// How to run a batch of games.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub players: [PlayerSpec; NUM_PLAYERS],
    pub num_games: usize,
    /// Game `k` is played with `seed.wrapping_add(k)`.
    pub seed: u64,
    pub max_turns: u32,
    /// Games are played on a thread pool if this is more than 1.
    pub threads: usize,
}

/// Plays all games of a run. The records are in game order, however many
/// threads are used.
pub fn run_games(config: &RunConfig) -> anyhow::Result<Vec<GameRecord>> {
    let play = |game_idx: usize| {
        play_game(
            game_idx,
            config.seed.wrapping_add(game_idx as u64),
            &config.players,
            config.max_turns,
        )
    };
    if config.threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()?;
        pool.install(|| (0..config.num_games).into_par_iter().map(play).collect())
    } else {
        (0..config.num_games).map(play).collect()
    }
}
