use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named weight profile for the [`HeuristicBot`](crate::HeuristicBot).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Balanced,
    Aggressive,
    Defensive,
}

/// How much each kind of event found by the evaluator is worth.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    /// Completing five in a line.
    pub win_sequence: f64,
    pub extend_4: f64,
    pub extend_3: f64,
    pub extend_2: f64,
    /// A line with a single friendly cell besides the target.
    pub new_potential: f64,
    /// Being next to a corner.
    pub corner_use: f64,
    /// Taking the last open cell of an opponent line of four.
    pub block_win: f64,
    pub block_4: f64,
    pub block_3: f64,
    pub block_2: f64,
    /// Subtracted when a jack is spent early.
    pub jack_save: f64,
    /// Multiplied by the closeness to the center.
    pub center_bonus: f64,
    /// Multiplied by the sequence potential, when that is high.
    pub flexibility: f64,
}

pub const STRATEGIES: [Strategy; 3] = [Strategy::Balanced, Strategy::Aggressive, Strategy::Defensive];

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Balanced => "balanced",
            Strategy::Aggressive => "aggressive",
            Strategy::Defensive => "defensive",
        }
    }

    pub fn weights(self) -> Weights {
        match self {
            Strategy::Aggressive => Weights {
                win_sequence: 10000.0,
                extend_4: 500.0,
                extend_3: 100.0,
                extend_2: 30.0,
                new_potential: 15.0,
                corner_use: 25.0,
                block_win: 5000.0,
                block_4: 300.0,
                block_3: 60.0,
                block_2: 15.0,
                jack_save: 10.0,
                center_bonus: 5.0,
                flexibility: 8.0,
            },
            Strategy::Defensive => Weights {
                win_sequence: 10000.0,
                extend_4: 400.0,
                extend_3: 80.0,
                extend_2: 25.0,
                new_potential: 10.0,
                corner_use: 20.0,
                block_win: 8000.0,
                block_4: 500.0,
                block_3: 100.0,
                block_2: 30.0,
                jack_save: 15.0,
                center_bonus: 3.0,
                flexibility: 5.0,
            },
            Strategy::Balanced => Weights {
                win_sequence: 10000.0,
                extend_4: 450.0,
                extend_3: 90.0,
                extend_2: 28.0,
                new_potential: 12.0,
                corner_use: 22.0,
                block_win: 6000.0,
                block_4: 400.0,
                block_3: 80.0,
                block_2: 20.0,
                jack_save: 12.0,
                center_bonus: 4.0,
                flexibility: 7.0,
            },
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error type for the [`FromStr`] instance of [`Strategy`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl std::error::Error for UnknownStrategy {}

impl std::fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown strategy '{}', expected one of balanced, aggressive, defensive",
            self.0
        )
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STRATEGIES
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}
