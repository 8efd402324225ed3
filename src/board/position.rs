use std::fmt;

/// A board cell identified by (column, row). Coordinates are conceptually
/// in 0..=7 but are never range-checked; the board happily stores pieces at
/// any coordinate pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Position {
    pub col: i8,
    pub row: i8,
}

impl Position {
    pub fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }
}

impl From<(i8, i8)> for Position {
    fn from((col, row): (i8, i8)) -> Self {
        Self::new(col, row)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
