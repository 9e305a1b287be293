pub mod board;
pub mod bot_controller;
pub mod config;
pub mod error;
pub mod game_state;
pub mod logger;
pub mod session_rng;
pub mod types;
pub mod win_detector;

pub use board::Board;
pub use bot_controller::{calculate_move, choose_move};
pub use error::{IllegalMove, InvariantViolation, MatchError};
pub use game_state::{Match, MatchPhase, Tally};
pub use session_rng::SessionRng;
pub use types::{Difficulty, Mark, Outcome};
pub use win_detector::{evaluate, evaluate_with_line, WinningLine};
