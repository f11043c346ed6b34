use sequence::{Board, GameState};
use serde::Serialize;

/// What a hand is worth at a glance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HandAnalysis {
    pub total_cards: usize,
    pub two_eyed_jacks: usize,
    pub one_eyed_jacks: usize,
    /// Cards whose cells are both taken.
    pub dead_cards: usize,
    /// Non-jacks whose cells are both still open.
    pub high_value_cards: usize,
}

pub fn analyze_hand(state: &GameState, player_idx: usize) -> HandAnalysis {
    let board = state.board();
    let mut analysis = HandAnalysis {
        total_cards: state.hand(player_idx).len(),
        ..HandAnalysis::default()
    };
    for &card in state.hand(player_idx) {
        if card.is_two_eyed_jack() {
            analysis.two_eyed_jacks += 1;
        } else if card.is_one_eyed_jack() {
            analysis.one_eyed_jacks += 1;
        } else if board.is_dead_card(card) {
            analysis.dead_cards += 1;
        } else if Board::card_positions(card)
            .into_iter()
            .all(|pos| board.is_position_available(pos))
        {
            analysis.high_value_cards += 1;
        }
    }
    analysis
}
