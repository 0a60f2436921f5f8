//! Word search generation.
//!
//! Words are placed longest first along any of eight directions, crossing
//! where their letters agree, with backtracking when a word no longer fits.
//! Remaining cells are then filled with random letters.

pub mod config;
pub mod direction;
pub mod error;
pub mod fill;
pub mod finder;
pub mod grid;
pub mod placement;
pub mod puzzle;
pub mod scheduler;
pub mod word;

pub use config::{GeneratorConfig, Seed};
pub use direction::Direction;
pub use error::{Error, Result};
pub use grid::Grid;
pub use placement::Placement;
pub use puzzle::{Puzzle, WordKey, WordLocation};
pub use scheduler::{BacktrackStrategy, SearchLimits, SearchStats, Solution};
pub use word::{Word, WordList};
