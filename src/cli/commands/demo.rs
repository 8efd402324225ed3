//! Demo command - the scripted walkthrough of the board API: two pieces,
//! a couple of moves, boards printed before and after.

use minichess::board::color::Color;
use minichess::board::error::BoardError;
use minichess::board::piece::Piece;
use minichess::board::position::Position;
use minichess::board::Board;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct DemoArgs {}

impl Command for DemoArgs {
    fn execute(self) {
        if let Err(error) = run_demo() {
            println!("demo error: {}", error);
        }
    }
}

fn run_demo() -> Result<(), BoardError> {
    let mut board = Board::new();

    let white_pawn = Piece::pawn(Color::White, Position::new(0, 1));
    let black_knight = Piece::knight(Color::Black, Position::new(1, 7));

    board.place(white_pawn)?;
    board.place(black_knight)?;

    println!("Initial board:");
    println!("{}", board);

    // Opening double step for the pawn, an L-hop for the knight.
    board.move_piece(Position::new(0, 1), Position::new(0, 3))?;
    board.move_piece(Position::new(1, 7), Position::new(2, 5))?;

    println!("After moves:");
    println!("{}", board);

    Ok(())
}
