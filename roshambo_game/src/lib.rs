//! ## Game
//! The outcome engine for Roshambo: moves, round outcomes and score keeping.
//! ### Modules
//! - Moves (the three hands and the relation between them)
//! - Outcome (deciding who won a round)
//! - Score (accumulating outcomes over a session)
//! - Session (a caller-owned play session with its own randomness source)
//!
//! ### Example
//! ```
//! use roshambo_game::{Move, Outcome, Session};
//!
//! let mut session = Session::seeded(7);
//! let (round, score) = session.play_round(Move::Rock);
//! assert_eq!(round.player, Move::Rock);
//! assert_eq!(score.rounds(), 1);
//! if round.outcome == Outcome::Tie {
//!     assert_eq!(score.player_score() + score.computer_score(), 0);
//! }
//! ```
mod error;
mod moves;
mod outcome;
mod score;
mod session;

pub use error::Error;
pub use moves::{random_move, Move, MOVES};
pub use outcome::{decide_outcome, Outcome};
pub use score::{apply_outcome, ScoreState};
pub use session::{Round, Session};
