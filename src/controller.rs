//! Turn order and game termination

use anyhow::{anyhow, Result};
use log::{debug, info, warn};

use crate::grid::{Grid, Player};

/// How a finished game ended
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    WinBy(Player),
    Tie,
}

impl Outcome {
    /// The announcement shown to the players
    pub fn message(&self) -> String {
        match self {
            Outcome::WinBy(player) => format!("Player {} won!", player),
            Outcome::Tie => "It's a tie!".to_string(),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    InProgress(Player),
    Ended(Outcome),
}

/// Receives the changes a game makes, in the order they happen
pub trait Renderer {
    /// A piece of `player` now occupies (`row`, `column`)
    fn piece_dropped(&mut self, row: usize, column: usize, player: Player);

    /// It is now `player`'s turn
    fn player_changed(&mut self, player: Player);

    /// The game is over, `message` announces the result
    fn game_ended(&mut self, message: &str);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn piece_dropped(&mut self, row: usize, column: usize, player: Player) {
        (**self).piece_dropped(row, column, player)
    }
    fn player_changed(&mut self, player: Player) {
        (**self).player_changed(player)
    }
    fn game_ended(&mut self, message: &str) {
        (**self).game_ended(message)
    }
}

/// A recorded [`Renderer`] call
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Notification {
    PieceDropped {
        row: usize,
        column: usize,
        player: Player,
    },
    PlayerChanged(Player),
    GameEnded(String),
}

/// Records every notification, for hosts that poll instead of drawing directly
impl Renderer for Vec<Notification> {
    fn piece_dropped(&mut self, row: usize, column: usize, player: Player) {
        self.push(Notification::PieceDropped {
            row,
            column,
            player,
        });
    }
    fn player_changed(&mut self, player: Player) {
        self.push(Notification::PlayerChanged(player));
    }
    fn game_ended(&mut self, message: &str) {
        self.push(Notification::GameEnded(message.to_string()));
    }
}

/// Runs one game from the first move to a win or a tie
///
/// # Notes
/// Player 1 always moves first. Once the game has ended the grid is frozen and
/// any further input is ignored without notifying the renderer.
pub struct Controller<R: Renderer> {
    grid: Grid,
    state: GameState,
    renderer: R,
    history: Vec<usize>,
}

impl<R: Renderer> Controller<R> {
    /// A new game on a default sized grid
    pub fn new(renderer: R) -> Self {
        Self::with_grid(Grid::new(), renderer)
    }

    /// A new game played on `grid`
    ///
    /// The grid must not have any pieces on it yet.
    pub fn with_grid(grid: Grid, renderer: R) -> Self {
        debug_assert!(grid.is_empty(), "a new game needs an empty grid");
        Self {
            grid,
            state: GameState::InProgress(Player::One),
            renderer,
            history: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The columns of every piece played so far, in order
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// The player to move, or `None` once the game is over
    pub fn active_player(&self) -> Option<Player> {
        match self.state {
            GameState::InProgress(player) => Some(player),
            GameState::Ended(_) => None,
        }
    }

    pub fn is_ended(&self) -> bool {
        match self.state {
            GameState::Ended(_) => true,
            _ => false,
        }
    }

    /// Drop the active player's piece into `column` (0-indexed)
    ///
    /// Returns whether a piece was placed. Input after the end of the game
    /// and drops into a full column are ignored.
    pub fn on_column_chosen(&mut self, column: usize) -> bool {
        let player = match self.state {
            GameState::InProgress(player) => player,
            GameState::Ended(outcome) => {
                debug!("ignoring column {}, game already over ({:?})", column, outcome);
                return false;
            }
        };

        let row = match self.grid.find_landing_row(column) {
            Some(row) => row,
            None => {
                if column >= self.grid.width() {
                    warn!("ignoring column {}, board is {} wide", column, self.grid.width());
                } else {
                    debug!("ignoring column {}, column full", column);
                }
                return false;
            }
        };

        self.grid.place(row, column, player);
        self.history.push(column);
        debug!("player {} dropped into ({}, {})", player, row, column);
        self.renderer.piece_dropped(row, column, player);

        // a move filling the last cell can also win, so wins are checked first
        if self.grid.check_win(player) {
            self.finish(Outcome::WinBy(player));
        } else if self.grid.is_full() {
            self.finish(Outcome::Tie);
        } else {
            let next = player.other();
            self.state = GameState::InProgress(next);
            self.renderer.player_changed(next);
        }
        true
    }

    /// Play a string of 1-indexed column digits, e.g. `"4453"`
    ///
    /// Moves that the game ignores are skipped; only characters that do not
    /// name a column are errors.
    pub fn play_moves<S: AsRef<str>>(&mut self, moves: S) -> Result<()> {
        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column) if column >= 1 && column <= self.grid.width() => {
                    self.on_column_chosen(column - 1);
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome) {
        self.state = GameState::Ended(outcome);
        let message = outcome.message();
        info!("game over after {} moves: {}", self.history.len(), message);
        self.renderer.game_ended(&message);
    }
}
