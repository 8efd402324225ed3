//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{demo::DemoArgs, play::PlayArgs};

#[derive(StructOpt)]
#[structopt(
    name = "minichess",
    about = "A minimal chess-like board model: pieces, move rules, captures ♟"
)]
pub enum Minichess {
    #[structopt(
        name = "demo",
        about = "Run the scripted demonstration: place a white pawn and a black knight, then walk them through a few moves, printing the board as it changes."
    )]
    Demo(DemoArgs),
    #[structopt(
        name = "play",
        about = "Open an interactive sandbox. Place pieces with `place <pawn|knight> <white|black|random> <col> <row>`, move them with `move <col> <row> <col> <row>`, print the board with `show`, and leave with `quit`."
    )]
    Play(PlayArgs),
}

impl crate::cli::commands::Command for Minichess {
    fn execute(self) {
        match self {
            Self::Demo(cmd) => cmd.execute(),
            Self::Play(cmd) => cmd.execute(),
        }
    }
}
