use anyhow::Result;

use std::io::stdin;

use connect4::*;

mod terminal;
use terminal::*;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let grid = Grid::new();
    let renderer = TerminalRenderer::new(grid.height(), grid.width());
    let mut game = Controller::with_grid(grid, renderer);

    let stdin = stdin();

    println!("Welcome to Connect 4\n");
    println!("Enter a column between 1 and {} to drop a piece, or 'q' to quit\n", WIDTH);
    game.renderer().display()?;

    // game loop
    while !game.is_ended() {
        game.renderer().prompt()?;

        let mut input_str = String::new();
        if stdin.read_line(&mut input_str)? == 0 {
            // stdin closed
            break;
        }
        let input = input_str.trim();
        if input.eq_ignore_ascii_case("q") {
            break;
        }

        let column = match input.parse::<usize>() {
            Ok(column @ 1..=WIDTH) => column - 1,
            Ok(column) => {
                println!(
                    "Invalid move, column {} out of range. Columns must be between 1 and {}",
                    column, WIDTH
                );
                continue;
            }
            Err(_) => {
                println!("Invalid number: {}", input);
                continue;
            }
        };

        if !game.on_column_chosen(column) {
            println!("Invalid move, column {} full", column + 1);
        }
    }
    Ok(())
}
