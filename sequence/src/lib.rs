pub use board::*;
pub use cards::*;
pub use cell_set::*;
pub use deck::*;
pub use errors::*;
pub use game::*;
pub use moves::*;
pub use sequences::*;
pub use state::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod cards;
mod cell_set;
mod deck;
mod errors;
mod game;
mod moves;
mod sequences;
mod state;
mod visualization;
