//! Play command - an interactive sandbox for placing and moving pieces.

use std::io;
use std::process;
use std::str::FromStr;

use minichess::board::color::Color;
use minichess::board::piece::{Piece, PieceKind};
use minichess::board::position::Position;
use minichess::board::{Board, MoveOutcome};
use regex::Regex;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {}

impl Command for PlayArgs {
    fn execute(self) {
        run_sandbox();
    }
}

fn run_sandbox() {
    let mut board = Board::new();

    println!("{}", board);

    loop {
        let mut input = String::new();

        let parsed = match io::stdin().read_line(&mut input) {
            Ok(_n) => ReplCommand::parse(input.trim_start().trim_end()),
            Err(error) => {
                println!("error: {}", error);
                continue;
            }
        };

        let command = match parsed {
            Ok(cmd) => cmd,
            Err(error) => {
                println!("failed to parse command `{}`: {}", input.trim_end(), error);
                continue;
            }
        };

        match command {
            ReplCommand::Place {
                kind,
                color,
                position,
            } => {
                let piece = Piece::new(kind, color, position);
                match board.place(piece) {
                    Ok(()) => println!("{}", board),
                    Err(error) => println!("place error: {}", error),
                }
            }
            ReplCommand::Move { from, to } => match board.move_piece(from, to) {
                Ok(MoveOutcome::Moved { captured }) => {
                    if let Some(captured) = captured {
                        println!("captured {}", captured);
                    }
                    println!("{}", board);
                }
                Ok(MoveOutcome::Illegal) => println!("invalid move"),
                Err(error) => println!("move error: {}", error),
            },
            ReplCommand::Show => println!("{}", board),
            ReplCommand::Quit => process::exit(0),
        }
    }
}

enum ReplCommand {
    Place {
        kind: PieceKind,
        color: Color,
        position: Position,
    },
    Move {
        from: Position,
        to: Position,
    },
    Show,
    Quit,
}

impl ReplCommand {
    fn parse(command: &str) -> Result<ReplCommand, &'static str> {
        // handle commands with no args
        match command {
            "show" => return Ok(ReplCommand::Show),
            "quit" => return Ok(ReplCommand::Quit),
            _ => (),
        };

        // handle commands with args
        if command.starts_with("place") {
            let re = Regex::new(r"^place (\w+) (\w+) (-?\d+) (-?\d+)$").unwrap();
            let caps = match re.captures(command) {
                Some(captures) => captures,
                None => return Err("usage: place <pawn|knight> <white|black|random> <col> <row>"),
            };
            let kind = PieceKind::from_str(&caps[1])?;
            let color = Color::from_str(&caps[2])?;
            let position = Position::new(parse_coordinate(&caps[3])?, parse_coordinate(&caps[4])?);
            return Ok(ReplCommand::Place {
                kind,
                color,
                position,
            });
        }

        if command.starts_with("move") {
            let re = Regex::new(r"^move (-?\d+) (-?\d+) (-?\d+) (-?\d+)$").unwrap();
            let caps = match re.captures(command) {
                Some(captures) => captures,
                None => return Err("usage: move <col> <row> <col> <row>"),
            };
            let from = Position::new(parse_coordinate(&caps[1])?, parse_coordinate(&caps[2])?);
            let to = Position::new(parse_coordinate(&caps[3])?, parse_coordinate(&caps[4])?);
            return Ok(ReplCommand::Move { from, to });
        }

        Err("invalid command; options are: place, move, show, quit")
    }
}

fn parse_coordinate(raw: &str) -> Result<i8, &'static str> {
    raw.parse::<i8>().map_err(|_| "coordinates must fit in i8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_place() {
        let command = ReplCommand::parse("place pawn white 0 1").unwrap();
        match command {
            ReplCommand::Place {
                kind,
                color,
                position,
            } => {
                assert_eq!(kind, PieceKind::Pawn { has_moved: false });
                assert_eq!(color, Color::White);
                assert_eq!(position, Position::new(0, 1));
            }
            _ => panic!("expected a place command"),
        }
    }

    #[test]
    fn test_parse_move() {
        let command = ReplCommand::parse("move 1 7 2 5").unwrap();
        match command {
            ReplCommand::Move { from, to } => {
                assert_eq!(from, Position::new(1, 7));
                assert_eq!(to, Position::new(2, 5));
            }
            _ => panic!("expected a move command"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        assert!(ReplCommand::parse("place queen white 0 0").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ReplCommand::parse("mvoe 1 7 2 5").is_err());
        assert!(ReplCommand::parse("").is_err());
    }
}
