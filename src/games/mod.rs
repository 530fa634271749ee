pub mod blackjack;
pub mod dice;
pub mod mines;
pub mod plinko;
pub mod registry;
pub mod render;
pub mod roulette;
pub mod types;

pub use blackjack::{BlackjackOptions, Card};
pub use mines::MinesOptions;
pub use plinko::PlinkoOptions;
pub use registry::GameRequest;
pub use render::render;
pub use types::*;
