mod game;
mod player;
mod score;
pub use game::*;
pub use player::*;
pub use score::*;
