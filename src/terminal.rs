use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};
use log::error;

use std::io::{stdout, Write};
use std::thread;
use std::time::Duration;

use connect4::{Player, Renderer};

// pause between the last piece appearing and the result being announced
const END_DELAY: Duration = Duration::from_millis(100);

/// Draws the game to the terminal from the notifications it receives
pub struct TerminalRenderer {
    width: usize,
    cells: Vec<Option<Player>>, // cells are stored left-to-right, top-to-bottom
    current: Player,
}

impl TerminalRenderer {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            width,
            cells: vec![None; height * width],
            current: Player::One,
        }
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=self.width).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;

        for row in self.cells.chunks(self.width) {
            for cell in row {
                stdout.queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match cell {
                            Some(Player::One) => Color::Red,
                            Some(Player::Two) => Color::Yellow,
                            None => Color::DarkBlue,
                        }),
                ))?;
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;
        Ok(())
    }

    pub fn prompt(&self) -> Result<()> {
        let mut stdout = stdout();
        println!("Current player: {}", self.current);
        print!("Move input > ");
        stdout.flush()?;
        Ok(())
    }

    fn redraw(&self) {
        if let Err(err) = self.display() {
            error!("failed to draw board: {}", err);
        }
    }
}

impl Renderer for TerminalRenderer {
    fn piece_dropped(&mut self, row: usize, column: usize, player: Player) {
        self.cells[row * self.width + column] = Some(player);
    }

    fn player_changed(&mut self, player: Player) {
        self.current = player;
        self.redraw();
    }

    fn game_ended(&mut self, message: &str) {
        self.redraw();
        thread::sleep(END_DELAY);
        println!("{}", message);
    }
}
