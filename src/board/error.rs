use thiserror::Error;

use super::position::Position;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cannot place a piece on {position}, the position is already occupied")]
    PositionOccupied { position: Position },
    #[error("Cannot move from {position}, no piece is recorded there")]
    EmptyFromPosition { position: Position },
}
