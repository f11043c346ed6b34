use sequence::NUM_PLAYERS;

use crate::{GameOutcome, GameRecord};

/// Totals over the games of one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchScore {
    pub wins: [usize; NUM_PLAYERS],
    /// Games where nobody, or only one player, could move anymore.
    pub draws: usize,
    /// Games stopped by the turn cap.
    pub capped: usize,
    pub total_turns: u64,
    pub jacks_used: [usize; NUM_PLAYERS],
    /// Moves that blocked or broke an opponent line.
    pub blocking_moves: [usize; NUM_PLAYERS],
}

impl MatchScore {
    pub fn add(&mut self, record: &GameRecord) {
        match record.outcome {
            GameOutcome::Won { player_idx } => self.wins[player_idx] += 1,
            GameOutcome::Drawn | GameOutcome::Stalled { .. } => self.draws += 1,
            GameOutcome::TurnLimit => self.capped += 1,
        }
        self.total_turns += u64::from(record.total_turns);
        for player_idx in 0..NUM_PLAYERS {
            self.jacks_used[player_idx] += record.jacks_used[player_idx];
            self.blocking_moves[player_idx] += record.blocking_moves[player_idx];
        }
    }

    pub fn num_games(&self) -> usize {
        self.wins.iter().sum::<usize>() + self.draws + self.capped
    }

    pub fn average_turns(&self) -> f64 {
        match self.num_games() {
            0 => 0.0,
            n => self.total_turns as f64 / n as f64,
        }
    }
}

impl<'a> FromIterator<&'a GameRecord> for MatchScore {
    fn from_iter<I: IntoIterator<Item = &'a GameRecord>>(iter: I) -> Self {
        let mut score = MatchScore::default();
        for record in iter {
            score.add(record);
        }
        score
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Summary lines with win rates, given the names of the two players.
pub fn format_summary(score: &MatchScore, names: &[String; NUM_PLAYERS]) -> String {
    let num_games = score.num_games();
    let mut summary = format!("Results of {} games:", num_games);
    for (player_idx, name) in names.iter().enumerate() {
        summary += &format!(
            "\n- {} wins by player {} ({}), {:.1}%",
            score.wins[player_idx],
            player_idx + 1,
            name,
            percentage(score.wins[player_idx], num_games)
        );
        summary += &format!(
            ", {} jacks used, {} blocking moves",
            score.jacks_used[player_idx], score.blocking_moves[player_idx]
        );
    }
    summary += &format!(
        "\n- {} draws, {:.1}%\n- {} games stopped at the turn cap\n- {:.1} turns per game",
        score.draws,
        percentage(score.draws, num_games),
        score.capped,
        score.average_turns()
    );
    summary
}
