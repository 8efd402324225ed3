use std::fmt;
use std::str::FromStr;

use super::color::Color;
use super::position::Position;

/// The closed set of piece variants. Per-variant move state lives on the
/// variant itself: only pawns care whether they have moved.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PieceKind {
    Pawn { has_moved: bool },
    Knight,
}

impl PieceKind {
    pub fn name(&self) -> &'static str {
        match self {
            PieceKind::Pawn { .. } => "Pawn",
            PieceKind::Knight => "Knight",
        }
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for PieceKind {
    type Err = ParseError;
    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "pawn" => Ok(PieceKind::Pawn { has_moved: false }),
            "knight" => Ok(PieceKind::Knight),
            _ => Err("invalid piece kind; options are: pawn, knight"),
        }
    }
}

/// A piece on (or destined for) the board. The color never changes after
/// construction; the position is updated by the board when a move commits.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    position: Position,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, position: Position) -> Self {
        Self {
            kind,
            color,
            position,
        }
    }

    pub fn pawn(color: Color, position: Position) -> Self {
        Self::new(PieceKind::Pawn { has_moved: false }, color, position)
    }

    pub fn knight(color: Color, position: Position) -> Self {
        Self::new(PieceKind::Knight, color, position)
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether `destination` is a legal move from the current position under
    /// this piece's rule. This is a pure query: probing a move never changes
    /// piece state. Destination occupancy, blocking pieces, and board bounds
    /// are not this predicate's concern.
    pub fn is_valid_move(&self, destination: Position) -> bool {
        let dx = destination.col - self.position.col;
        let dy = destination.row - self.position.row;

        match self.kind {
            PieceKind::Pawn { has_moved } => {
                // White pawns advance up the board, black pawns down.
                let direction = match self.color {
                    Color::White => 1,
                    Color::Black => -1,
                };

                if dx != 0 {
                    return false;
                }

                // Single step forward, or a double step before the first move.
                dy == direction || (!has_moved && dy == 2 * direction)
            }
            PieceKind::Knight => {
                let (dx, dy) = (dx.abs(), dy.abs());
                (dx == 2 && dy == 1) || (dx == 1 && dy == 2)
            }
        }
    }

    /// Commits a move: updates the recorded position and, for pawns, marks
    /// the piece as having moved. Only the board calls this, and only after
    /// the legality check has passed.
    pub(crate) fn record_move(&mut self, destination: Position) {
        self.position = destination;
        if let PieceKind::Pawn { ref mut has_moved } = self.kind {
            *has_moved = true;
        }
    }

    /// Single-character cell symbol: the first character of the display
    /// form, i.e. the color initial.
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} at {}",
            self.color.capitalized(),
            self.kind.name(),
            self.position
        )
    }
}
