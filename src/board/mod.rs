pub mod color;
pub mod error;
pub mod piece;
pub mod position;

mod display;


use log::{info, warn};
use rustc_hash::FxHashMap;

use error::BoardError;
use piece::Piece;
use position::Position;

/// A minimal chess-like board: an owned mapping from position to occupying
/// piece, at most one piece per key. The board delegates move legality to
/// the piece and handles placement, relocation, and capture bookkeeping
/// itself. A stored piece's recorded position always equals the key it is
/// stored under.
#[derive(Clone, Debug, Default)]
pub struct Board {
    pieces: FxHashMap<Position, Piece>,
}

/// The outcome of a move request that passed precondition checks. An illegal
/// destination is a normal outcome, not an error.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    /// The piece relocated; `captured` holds any occupant that was removed
    /// from the destination.
    Moved { captured: Option<Piece> },
    /// The piece's rule rejected the destination; nothing changed.
    Illegal,
}

impl MoveOutcome {
    pub fn is_legal(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    /// Places a piece at its own recorded position. Positions are never
    /// bounds-checked; placing a second piece on an occupied position fails
    /// and leaves the board unchanged.
    pub fn place(&mut self, piece: Piece) -> Result<(), BoardError> {
        let position = piece.position();
        if self.pieces.contains_key(&position) {
            return Err(BoardError::PositionOccupied { position });
        }
        self.pieces.insert(position, piece);
        Ok(())
    }

    pub fn get(&self, position: Position) -> Option<&Piece> {
        self.pieces.get(&position)
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.pieces.contains_key(&position)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Moves the piece recorded at `from` to `to`.
    ///
    /// Asks the piece whether the destination is legal under its rule. If it
    /// is not, nothing changes and the outcome is `Illegal`. If it is, any
    /// occupant of `to` is captured (removed outright, regardless of color),
    /// the mover is relocated, and its recorded position is updated — the
    /// whole mutation is all-or-nothing from the caller's point of view.
    ///
    /// Requesting a move from a position with no recorded piece is an error,
    /// not an outcome.
    #[must_use = "move requests can fail or be rejected as illegal"]
    pub fn move_piece(&mut self, from: Position, to: Position) -> Result<MoveOutcome, BoardError> {
        let piece = *self
            .pieces
            .get(&from)
            .ok_or(BoardError::EmptyFromPosition { position: from })?;

        if !piece.is_valid_move(to) {
            warn!("invalid move: {} cannot reach {}", piece, to);
            return Ok(MoveOutcome::Illegal);
        }

        let captured = self.pieces.remove(&to);
        if let Some(occupant) = captured.as_ref() {
            info!("capturing {}", occupant);
        }

        self.pieces.remove(&from);
        let mut piece = piece;
        piece.record_move(to);
        self.pieces.insert(to, piece);
        info!("moved {} to {}", piece, to);

        Ok(MoveOutcome::Moved { captured })
    }
}
