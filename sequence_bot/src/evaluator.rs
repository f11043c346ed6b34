use sequence::{Action, Board, Chip, Direction, GameState, Move, Pos, CORNERS, SEQUENCE_LEN};
use serde::Serialize;

use crate::Weights;

/// Deck size above which spending a jack is penalized.
pub const JACK_SAVE_THRESHOLD: usize = 50;

/// Potential at which the flexibility bonus kicks in.
const FLEXIBILITY_THRESHOLD: u32 = 3;

/// Manhattan distance from the center below which the center bonus applies.
const CENTER_RADIUS: f64 = 3.0;

/// Something the evaluator noticed about a move.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    CompletesSequence(Direction),
    ExtendsThree(Direction),
    ExtendsTwo(Direction),
    StartsLine(Direction),
    NearCorner,
    CenterControl,
    Flexibility { potential: u32 },
    BlocksWin(Direction),
    BlocksThree(Direction),
    BlocksTwo(Direction),
    BreaksFour(Direction),
    BreaksThree(Direction),
    BreaksTwo(Direction),
    SpendsJackEarly,
}

fn direction_name(dir: Direction) -> &'static str {
    match dir {
        Direction::Horizontal => "horizontal",
        Direction::Vertical => "vertical",
        Direction::DiagonalDownRight => "diagonal down-right",
        Direction::DiagonalDownLeft => "diagonal down-left",
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reason::CompletesSequence(dir) => write!(f, "completes a {} sequence", direction_name(*dir)),
            Reason::ExtendsThree(dir) => write!(f, "makes four in a {} line", direction_name(*dir)),
            Reason::ExtendsTwo(dir) => write!(f, "makes three in a {} line", direction_name(*dir)),
            Reason::StartsLine(dir) => write!(f, "starts a {} line", direction_name(*dir)),
            Reason::NearCorner => write!(f, "uses a corner"),
            Reason::CenterControl => write!(f, "controls the center"),
            Reason::Flexibility { potential } => write!(f, "keeps {} lines open", potential),
            Reason::BlocksWin(dir) => write!(f, "blocks a {} sequence", direction_name(*dir)),
            Reason::BlocksThree(dir) => write!(f, "blocks three in a {} line", direction_name(*dir)),
            Reason::BlocksTwo(dir) => write!(f, "blocks two in a {} line", direction_name(*dir)),
            Reason::BreaksFour(dir) => write!(f, "breaks four in a {} line", direction_name(*dir)),
            Reason::BreaksThree(dir) => write!(f, "breaks three in a {} line", direction_name(*dir)),
            Reason::BreaksTwo(dir) => write!(f, "breaks two in a {} line", direction_name(*dir)),
            Reason::SpendsJackEarly => write!(f, "spends a jack early"),
        }
    }
}

/// The score of one candidate move, and how it came about.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MoveEvaluation {
    pub mv: Move,
    /// Offensive plus defensive score, minus the jack penalty.
    pub score: f64,
    pub offensive_score: f64,
    pub defensive_score: f64,
    /// Number of windows this placement extends without completing them.
    pub sequence_potential: u32,
    pub blocks_opponent: bool,
    pub creates_sequence: bool,
    pub reasons: Vec<Reason>,
}

impl MoveEvaluation {
    /// An evaluation that carries a move and nothing else.
    pub fn unscored(mv: Move) -> Self {
        Self {
            mv,
            score: 0.0,
            offensive_score: 0.0,
            defensive_score: 0.0,
            sequence_potential: 0,
            blocks_opponent: false,
            creates_sequence: false,
            reasons: Vec::new(),
        }
    }

    /// The reasons as one line of text.
    pub fn reasoning(&self) -> String {
        if self.reasons.is_empty() {
            return match self.mv.action {
                Action::Place => "basic move".to_string(),
                Action::Remove => "basic removal".to_string(),
            };
        }
        self.reasons
            .iter()
            .map(Reason::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Chips in a window, not counting the cell the move targets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct WindowCount {
    /// Chips of the color the window is counted for, plus wild corners.
    friendly: u8,
    /// Chips of any other color.
    hostile: u8,
}

fn count_window(board: &Board, window: &[Pos; SEQUENCE_LEN], target: Pos, chip: Chip) -> WindowCount {
    let mut count = WindowCount::default();
    for &pos in window.iter().filter(|&&pos| pos != target) {
        match board.chip(pos) {
            Chip::Empty => {}
            c if c.counts_for(chip) => count.friendly += 1,
            _ => count.hostile += 1,
        }
    }
    count
}

/// For each window through `target` in direction `dir` that holds nothing
/// hostile to `chip`, how many friendly chips it holds besides `target`.
fn open_lines(board: &Board, target: Pos, dir: Direction, chip: Chip) -> impl Iterator<Item = u8> + '_ {
    dir.windows_through(target).filter_map(move |window| {
        let count = count_window(board, &window, target, chip);
        (count.hostile == 0).then_some(count.friendly)
    })
}

/// Adjacent to a corner, orthogonally or diagonally.
fn is_next_to_corner(pos: Pos) -> bool {
    CORNERS.iter().any(|&corner| {
        corner != pos && (corner.row - pos.row).abs() <= 1 && (corner.col - pos.col).abs() <= 1
    })
}

/// How much closer than [`CENTER_RADIUS`] the cell is to the center.
fn centrality(pos: Pos) -> f64 {
    let center = f64::from(sequence::BOARD_SIZE - 1) / 2.0;
    let dist = (f64::from(pos.row) - center).abs() + (f64::from(pos.col) - center).abs();
    (CENTER_RADIUS - dist).max(0.0)
}

/// Scores a single legal move of `player_idx`.
///
/// The move is assumed to be legal, i.e. to come from [`GameState::valid_moves()`].
pub fn evaluate_move(state: &GameState, player_idx: usize, mv: Move, weights: &Weights) -> MoveEvaluation {
    let mut eval = MoveEvaluation::unscored(mv);
    match mv.action {
        Action::Place => {
            score_offense(state.board(), player_idx, &mut eval, weights);
            for opponent in state.opponents(player_idx) {
                score_blocks(state.board(), opponent, &mut eval, weights);
            }
        }
        Action::Remove => {
            if let Some(owner) = state.chip_owner(mv.pos) {
                score_removal(state.board(), owner, &mut eval, weights);
            }
        }
    }
    if mv.card.is_jack() && state.deck_len() > JACK_SAVE_THRESHOLD {
        eval.score -= weights.jack_save;
        eval.reasons.push(Reason::SpendsJackEarly);
    }
    eval.score += eval.offensive_score + eval.defensive_score;
    eval
}

fn score_offense(board: &Board, player_idx: usize, eval: &mut MoveEvaluation, weights: &Weights) {
    let pos = eval.mv.pos;
    let chip = Chip::of_player(player_idx);
    for dir in Direction::ALL {
        for friendly in open_lines(board, pos, dir, chip) {
            let (points, reason) = match friendly {
                4 => {
                    eval.creates_sequence = true;
                    (weights.win_sequence + weights.extend_4, Reason::CompletesSequence(dir))
                }
                3 => (weights.extend_3, Reason::ExtendsThree(dir)),
                2 => (weights.extend_2, Reason::ExtendsTwo(dir)),
                1 => (weights.new_potential, Reason::StartsLine(dir)),
                _ => continue,
            };
            if friendly < 4 {
                eval.sequence_potential += 1;
            }
            eval.offensive_score += points;
            eval.reasons.push(reason);
        }
    }

    if is_next_to_corner(pos) {
        eval.offensive_score += weights.corner_use;
        eval.reasons.push(Reason::NearCorner);
    }
    let centrality = centrality(pos);
    if centrality > 0.0 {
        eval.offensive_score += weights.center_bonus * centrality;
        eval.reasons.push(Reason::CenterControl);
    }
    if eval.sequence_potential >= FLEXIBILITY_THRESHOLD {
        eval.offensive_score += weights.flexibility * f64::from(eval.sequence_potential);
        eval.reasons.push(Reason::Flexibility {
            potential: eval.sequence_potential,
        });
    }
}

/// Scores taking a cell that the `opponent`'s lines need.
fn score_blocks(board: &Board, opponent: usize, eval: &mut MoveEvaluation, weights: &Weights) {
    let pos = eval.mv.pos;
    let chip = Chip::of_player(opponent);
    for dir in Direction::ALL {
        for friendly in open_lines(board, pos, dir, chip) {
            let (points, reason) = match friendly {
                4 => {
                    eval.blocks_opponent = true;
                    (weights.block_win, Reason::BlocksWin(dir))
                }
                3 => (weights.block_3, Reason::BlocksThree(dir)),
                2 => (weights.block_2, Reason::BlocksTwo(dir)),
                _ => continue,
            };
            eval.defensive_score += points;
            eval.reasons.push(reason);
        }
    }
}

/// Scores removing the chip of `owner` from the target cell. Each direction
/// counts once, with its most dangerous window.
fn score_removal(board: &Board, owner: usize, eval: &mut MoveEvaluation, weights: &Weights) {
    let pos = eval.mv.pos;
    let chip = Chip::of_player(owner);
    eval.blocks_opponent = true;
    for dir in Direction::ALL {
        let Some(chain) = dir
            .windows_through(pos)
            .map(|window| 1 + count_window(board, &window, pos, chip).friendly)
            .max()
        else {
            continue;
        };
        let (points, reason) = match chain {
            0 | 1 => continue,
            2 => (weights.block_3, Reason::BreaksTwo(dir)),
            3 => (weights.block_4, Reason::BreaksThree(dir)),
            _ => (weights.block_win, Reason::BreaksFour(dir)),
        };
        eval.defensive_score += points;
        eval.reasons.push(reason);
    }
}

#[cfg(test)]
mod tests {
    use sequence::{card, Card, Game};

    use super::*;
    use crate::Strategy;

    fn state_with(board: &str, hand: &[Card], deck_len: usize) -> GameState {
        let board: Board = board.parse().unwrap();
        let hands = [hand.to_vec(), vec![card!("2S")]];
        GameState::from_position(board, hands, vec![card!("3S"); deck_len], 0)
    }

    fn evaluation_at(state: &GameState, card: Card, pos: Pos) -> MoveEvaluation {
        let weights = Strategy::Balanced.weights();
        let mv = state
            .valid_moves(0)
            .into_iter()
            .find(|mv| mv.card == card && mv.pos == pos)
            .expect("Move should be legal");
        evaluate_move(state, 0, mv, &weights)
    }

    const FOUR_BLUE_IN_ROW_6: &str = "
        * . . . . . . . . *
        . . . . . . . . . .
        . . . . . . . . . .
        . . . . . . . . . .
        . . . . . . . . . .
        . . . . . . . . . .
        . B B B B . . . . .
        . . . . . . . . . .
        . . . . . . . . . .
        * . . . . . . . . *
    ";

    #[test]
    fn closing_a_line_wins_and_records_one_sequence() {
        // (6,5) is the ten of hearts
        let state = state_with(FOUR_BLUE_IN_ROW_6, &[card!("10H")], 10);
        let weights = Strategy::Balanced.weights();
        let eval = evaluation_at(&state, card!("10H"), Pos::new(6, 5));
        assert!(eval.creates_sequence);
        assert!(eval.offensive_score >= weights.win_sequence);
        assert!(eval.reasons.contains(&Reason::CompletesSequence(Direction::Horizontal)));

        let mut game = Game::from_state(state);
        assert!(game.make_move(eval.mv).is_ok());
        let sequences = game.state().sequences(0);
        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences[0].cells().len(), SEQUENCE_LEN);
    }

    #[test]
    fn opponent_four_in_a_row_is_blocked_with_a_wild_jack() {
        let board = "
            * . . . . . . . . *
            . . . . . . . . . .
            . . . . . . . . . .
            . . . G G G G . . .
            . . . . . . . . . .
            . . . . . . . . . .
            . . . . . . . . . .
            . . . . . . . . . .
            . . . . . . . . . .
            * . . . . . . . . *
        ";
        let state = state_with(board, &[card!("JD")], 0);
        let weights = Strategy::Balanced.weights();
        for pos in [Pos::new(3, 2), Pos::new(3, 7)] {
            let eval = evaluation_at(&state, card!("JD"), pos);
            assert!(eval.blocks_opponent);
            assert!(eval.defensive_score >= weights.block_win);
            assert!(eval.reasons.contains(&Reason::BlocksWin(Direction::Horizontal)));
        }
        // Away from the line there's nothing to block
        let eval = evaluation_at(&state, card!("JD"), Pos::new(7, 7));
        assert!(!eval.blocks_opponent);
        assert_eq!(eval.defensive_score, 0.0);
    }

    #[test]
    fn removal_breaking_four_uses_block_win() {
        let board = "
            * . . . . . . . . *
            . . . . . . . . . .
            . . . . . . . . . .
            . . . G G G G . . .
            . . . . . . . . . .
            . . . . . . . . . .
            . . . . . . . . . .
            . . . . . . . . . .
            . . . . . G . . . .
            * . . . . . . . . *
        ";
        let state = state_with(board, &[card!("JS")], 0);
        let weights = Strategy::Balanced.weights();

        let eval = evaluation_at(&state, card!("JS"), Pos::new(3, 4));
        assert!(eval.mv.is_removal());
        assert!(eval.blocks_opponent);
        assert!(!eval.creates_sequence);
        assert_eq!(eval.offensive_score, 0.0);
        assert_eq!(eval.defensive_score, weights.block_win);
        assert_eq!(eval.reasons, vec![Reason::BreaksFour(Direction::Horizontal)]);

        // A lone chip is not worth much
        let eval = evaluation_at(&state, card!("JS"), Pos::new(8, 5));
        assert_eq!(eval.defensive_score, 0.0);
        assert!(eval.blocks_opponent);
    }

    #[test]
    fn windows_with_opponent_chips_are_ignored() {
        let board = "
            * . . . . . . . . *
            . . . . . . . . . .
            . . . . . . . . . .
            . . . . . . . . . .
            . . . . . . . . . .
            . . . . . . . . . .
            . B B B B . G . . .
            . . . . . . . . . .
            . . . . . . . . . .
            * . . . . . . . . *
        ";
        let state = state_with(board, &[card!("10H")], 10);
        let eval = evaluation_at(&state, card!("10H"), Pos::new(6, 5));
        // Only the window starting at (6,1) is free of green
        assert!(eval.creates_sequence);
        let horizontal: Vec<_> = eval
            .reasons
            .iter()
            .filter(|reason| {
                matches!(
                    reason,
                    Reason::CompletesSequence(Direction::Horizontal)
                        | Reason::ExtendsThree(Direction::Horizontal)
                        | Reason::ExtendsTwo(Direction::Horizontal)
                        | Reason::StartsLine(Direction::Horizontal)
                )
            })
            .collect();
        assert_eq!(horizontal, vec![&Reason::CompletesSequence(Direction::Horizontal)]);
    }

    const EMPTY: &str = "
        * . . . . . . . . *
        . . . . . . . . . .
        . . . . . . . . . .
        . . . . . . . . . .
        . . . . . . . . . .
        . . . . . . . . . .
        . . . . . . . . . .
        . . . . . . . . . .
        . . . . . . . . . .
        * . . . . . . . . *
    ";

    /// A board with the given green chips and nothing else.
    fn green_at(cells: &[Pos]) -> String {
        let mut rows: Vec<Vec<char>> = EMPTY
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        for pos in cells {
            rows[pos.row as usize][pos.col as usize] = 'G';
        }
        rows.into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn many_open_lines_earn_flexibility() {
        let board = "
            * . . . . . . . . *
            . . . . . . . . . .
            . . . . . . . . . .
            . . . . . . . . . .
            . . . . . B . . . .
            . . . . . . . . . .
            . . . . . . . . . .
            . . . . . . . . . .
            . . . . . . . . . .
            * . . . . . . . . *
        ";
        let weights = Strategy::Balanced.weights();
        let state = state_with(board, &[card!("JD")], 0);
        let eval = evaluation_at(&state, card!("JD"), Pos::new(4, 4));
        // Four horizontal windows share (4,5), one diagonal reaches the corner
        assert_eq!(eval.sequence_potential, 5);
        assert!(eval.reasons.contains(&Reason::Flexibility { potential: 5 }));
        assert_eq!(
            eval.offensive_score,
            5.0 * weights.new_potential + 2.0 * weights.center_bonus + 5.0 * weights.flexibility
        );
    }

    #[test]
    fn few_open_lines_earn_no_flexibility() {
        let board = "
            * . . . . . . . . *
            . . . . . . . . . .
            . . . B . . . . . .
            . . . . . . . . . .
            . . . . . . . . . .
            . . . . . . . . . .
            . . . . . . . . . .
            . . . . . . . . . .
            . . . . . . . . . .
            * . . . . . . . . *
        ";
        let weights = Strategy::Balanced.weights();
        let state = state_with(board, &[card!("JD")], 0);
        let eval = evaluation_at(&state, card!("JD"), Pos::new(2, 7));
        // One window reaches (2,3), one reaches the corner (0,9)
        assert_eq!(eval.sequence_potential, 2);
        assert!(!eval
            .reasons
            .iter()
            .any(|reason| matches!(reason, Reason::Flexibility { .. })));
        assert_eq!(eval.offensive_score, 2.0 * weights.new_potential);
    }

    #[test]
    fn removal_tiers_follow_chain_length() {
        let weights = Strategy::Balanced.weights();
        let three = green_at(&[Pos::new(3, 3), Pos::new(3, 4), Pos::new(3, 5)]);
        let state = state_with(&three, &[card!("JH")], 0);
        let eval = evaluation_at(&state, card!("JH"), Pos::new(3, 4));
        assert_eq!(eval.defensive_score, weights.block_4);
        assert_eq!(eval.reasons, vec![Reason::BreaksThree(Direction::Horizontal)]);

        let two = green_at(&[Pos::new(3, 3), Pos::new(3, 4)]);
        let state = state_with(&two, &[card!("JH")], 0);
        let eval = evaluation_at(&state, card!("JH"), Pos::new(3, 4));
        assert_eq!(eval.defensive_score, weights.block_3);
        assert_eq!(eval.reasons, vec![Reason::BreaksTwo(Direction::Horizontal)]);
    }

    #[test]
    fn blocking_tiers_follow_line_length() {
        let weights = Strategy::Balanced.weights();
        let count = |eval: &MoveEvaluation, wanted: Reason| {
            eval.reasons.iter().filter(|&&reason| reason == wanted).count()
        };

        // Windows starting at (3,2) and (3,3) hold three, the one at (3,4) two
        let three = green_at(&[Pos::new(3, 3), Pos::new(3, 4), Pos::new(3, 5)]);
        let state = state_with(&three, &[card!("JD")], 0);
        let eval = evaluation_at(&state, card!("JD"), Pos::new(3, 6));
        assert!(!eval.blocks_opponent);
        assert_eq!(count(&eval, Reason::BlocksThree(Direction::Horizontal)), 2);
        assert_eq!(count(&eval, Reason::BlocksTwo(Direction::Horizontal)), 1);
        assert_eq!(eval.defensive_score, 2.0 * weights.block_3 + weights.block_2);

        // Windows starting at (3,1), (3,2) and (3,3) hold both chips
        let two = green_at(&[Pos::new(3, 3), Pos::new(3, 4)]);
        let state = state_with(&two, &[card!("JD")], 0);
        let eval = evaluation_at(&state, card!("JD"), Pos::new(3, 5));
        assert!(!eval.blocks_opponent);
        assert_eq!(count(&eval, Reason::BlocksTwo(Direction::Horizontal)), 3);
        assert_eq!(eval.defensive_score, 3.0 * weights.block_2);
    }

    #[test]
    fn early_jacks_are_penalized() {
        let weights = Strategy::Balanced.weights();
        let pos = Pos::new(2, 7);
        let early = evaluation_at(&state_with(EMPTY, &[card!("JC")], 51), card!("JC"), pos);
        let late = evaluation_at(&state_with(EMPTY, &[card!("JC")], 50), card!("JC"), pos);
        assert!(early.reasons.contains(&Reason::SpendsJackEarly));
        assert!(!late.reasons.contains(&Reason::SpendsJackEarly));
        assert_eq!(late.score - early.score, weights.jack_save);
        assert_eq!(early.offensive_score, late.offensive_score);
    }

    #[test]
    fn positional_bonuses() {
        assert!(is_next_to_corner(Pos::new(0, 1)));
        assert!(is_next_to_corner(Pos::new(1, 1)));
        assert!(is_next_to_corner(Pos::new(8, 9)));
        assert!(!is_next_to_corner(Pos::new(0, 0)));
        assert!(!is_next_to_corner(Pos::new(0, 2)));

        assert_eq!(centrality(Pos::new(4, 4)), 2.0);
        assert_eq!(centrality(Pos::new(5, 4)), 2.0);
        assert_eq!(centrality(Pos::new(3, 4)), 1.0);
        assert_eq!(centrality(Pos::new(2, 4)), 0.0);
        assert_eq!(centrality(Pos::new(0, 0)), 0.0);
    }

    #[test]
    fn score_is_the_sum_of_its_parts() {
        let state = state_with(FOUR_BLUE_IN_ROW_6, &[card!("JD"), card!("10H")], 60);
        let weights = Strategy::Aggressive.weights();
        for mv in state.valid_moves(0) {
            let eval = evaluate_move(&state, 0, mv, &weights);
            let penalty = if mv.card.is_jack() { weights.jack_save } else { 0.0 };
            let expected = eval.offensive_score + eval.defensive_score - penalty;
            assert!((eval.score - expected).abs() < 1e-9, "{:?}", eval);
        }
    }

    #[test]
    fn reasoning_text() {
        let mv = Move::place(card!("2S"), Pos::new(0, 1));
        let mut eval = MoveEvaluation::unscored(mv);
        assert_eq!(eval.reasoning(), "basic move");
        eval.reasons = vec![Reason::NearCorner, Reason::BlocksTwo(Direction::Vertical)];
        assert_eq!(eval.reasoning(), "uses a corner, blocks two in a vertical line");
    }
}
