//! A two player, hot-seat game of 'Connect 4'
//!
//! The game logic is split between a [`grid::Grid`], which stores the pieces
//! and answers questions about them, and a [`controller::Controller`], which
//! alternates the players and decides when the game is over. Anything that
//! wants to show the game implements [`controller::Renderer`].
//!
//! # Basic Usage
//!
//! ```
//! use connect4::controller::{Controller, Notification};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut game = Controller::new(Vec::<Notification>::new());
//! game.play_moves("1122334")?;
//!
//! assert_eq!(
//!     game.renderer().last(),
//!     Some(&Notification::GameEnded("Player 1 won!".to_string()))
//! );
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod grid;

pub mod controller;


pub use controller::{Controller, GameState, Notification, Outcome, Renderer};
pub use grid::{Cell, Grid, Player};

/// The default width of the game board in tiles
pub const WIDTH: usize = 7;

/// The default height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win
pub const RUN_LENGTH: usize = 4;

// the default board must allow a run in at least one direction
const_assert!(WIDTH >= RUN_LENGTH || HEIGHT >= RUN_LENGTH);
// columns are entered as single digits
const_assert!(WIDTH >= 1 && WIDTH <= 9);
