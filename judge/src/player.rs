use std::str::FromStr;

use rand::rngs::StdRng;
use sequence_bot::{Bot, HeuristicBot, RandomBot, Strategy, UnknownStrategy};

/// Which kind of bot sits in a seat, as given on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayerSpec {
    Heuristic(Strategy),
    Random,
}

impl PlayerSpec {
    /// Creates a fresh bot. All of its randomness comes from `rng`.
    pub fn create_bot(self, rng: StdRng) -> Box<dyn Bot> {
        match self {
            PlayerSpec::Heuristic(strategy) => Box::new(HeuristicBot::new(strategy, rng)),
            PlayerSpec::Random => Box::new(RandomBot::new(rng)),
        }
    }
}

impl std::fmt::Display for PlayerSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerSpec::Heuristic(strategy) => write!(f, "{}", strategy),
            PlayerSpec::Random => write!(f, "random"),
        }
    }
}

impl FromStr for PlayerSpec {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("random") {
            Ok(PlayerSpec::Random)
        } else {
            s.parse().map(PlayerSpec::Heuristic)
        }
    }
}
