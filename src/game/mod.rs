//! Bar Hopper game.
//!
//! A real-time dodging game: the player hops across a horizontal bar to
//! avoid obstacles sliding in from the screen edge. Every few points the
//! obstacles speed up, and every 25 points they reverse direction.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
