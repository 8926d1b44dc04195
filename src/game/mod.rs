//! Game orchestration
//!
//! Configuration, roles, the codebreaker and display seams, and the turn state
//! machine tying them to the core.

mod codebreaker;
mod config;
mod display;
mod players;
mod session;

pub use codebreaker::{AiCodebreaker, Codebreaker};
pub use config::{DEFAULT_LENGTH, DEFAULT_MAX_GUESSES, GameConfig};
pub use display::{GameDisplay, NullDisplay};
pub use players::{AI_NAME, Player, PlayerKind, Players};
pub use session::{GameResult, GameSession, GameState, Outcome, Phase, Round, RoundReport, Turn};
