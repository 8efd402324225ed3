use super::position::Position;
use super::Board;
use std::fmt;

/// Renders the 8x8 text grid: row 7 prints first (so the top of the board is
/// the top of the output), columns 0 through 7 left to right. Occupied cells
/// show the piece's symbol, empty cells a dot. Diagnostic view only; pieces
/// parked outside the 0..=7 range simply do not appear.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            for col in 0..8 {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.get(Position::new(col, row)) {
                    Some(piece) => write!(f, "{}", piece.symbol())?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
