//! Towers of Hanoi solver and ASCII visualizer.

pub mod board;
pub mod config;
pub mod error;
pub mod peg;
pub mod prompt;
pub mod render;
pub mod session;
pub mod solver;
pub mod transcript;

pub use board::{Board, PegId};
pub use config::SessionConfig;
pub use error::{Error, PegError, Result};
pub use peg::Peg;
pub use session::{Session, State};
pub use solver::{move_count, moves, Move, Moves};
pub use transcript::write_solution;
