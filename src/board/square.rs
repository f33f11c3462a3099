use std::fmt;
use std::str::FromStr;

/// Number of squares on a side of the playable board.
pub const SIDE: u8 = 7;

/// Length of a side plus the artificial 2-deep blocked border region.
/// Keeping two layers of border squares means a 5x5 neighborhood scan
/// around any playable square never leaves the grid.
pub const EXTENDED_SIDE: u8 = SIDE + 4;

/// Total number of cells in the extended grid.
pub const EXTENDED_CELLS: usize = (EXTENDED_SIDE as usize) * (EXTENDED_SIDE as usize);

/// A playable square, addressed by column 'a'..='g' and row '1'..='7'.
///
/// Squares in the border region are not representable; they only exist as
/// linearized indices inside the board's grid.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Square {
    col: char,
    row: char,
}

impl Square {
    pub fn new(col: char, row: char) -> Option<Self> {
        if ('a'..='g').contains(&col) && ('1'..='7').contains(&row) {
            Some(Self { col, row })
        } else {
            None
        }
    }

    pub fn col(&self) -> char {
        self.col
    }

    pub fn row(&self) -> char {
        self.row
    }

    /// The linearized index of this square in the extended grid, counting
    /// in row-major order from the bottom-left border corner.
    pub fn index(&self) -> usize {
        let col_offset = (self.col as u8 - b'a') as usize + 2;
        let row_offset = (self.row as u8 - b'1') as usize + 2;
        row_offset * EXTENDED_SIDE as usize + col_offset
    }

    /// Inverse of `index`. Returns `None` for border cells.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= EXTENDED_CELLS {
            return None;
        }
        let col_offset = index % EXTENDED_SIDE as usize;
        let row_offset = index / EXTENDED_SIDE as usize;
        if !(2..(SIDE as usize + 2)).contains(&col_offset)
            || !(2..(SIDE as usize + 2)).contains(&row_offset)
        {
            return None;
        }
        Some(Self {
            col: (b'a' + (col_offset - 2) as u8) as char,
            row: (b'1' + (row_offset - 2) as u8) as char,
        })
    }

    /// The largest of the column and row distances to `other`.
    pub fn chebyshev_distance(&self, other: Square) -> u8 {
        let dc = (self.col as i8 - other.col as i8).abs() as u8;
        let dr = (self.row as i8 - other.row as i8).abs() as u8;
        dc.max(dr)
    }

    /// Reflection across the vertical center column (a<->g, b<->f, ...).
    pub fn mirrored_col(&self) -> Square {
        Square {
            col: (b'a' + (b'g' - self.col as u8)) as char,
            row: self.row,
        }
    }

    /// Reflection across the horizontal center row (1<->7, 2<->6, ...).
    pub fn mirrored_row(&self) -> Square {
        Square {
            col: self.col,
            row: (b'1' + (b'7' - self.row as u8)) as char,
        }
    }

    /// Point reflection through the center square d4.
    pub fn mirrored(&self) -> Square {
        self.mirrored_col().mirrored_row()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col, self.row)
    }
}

// used for parsing move input
type ParseError = &'static str;
impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(col), Some(row), None) => {
                Square::new(col, row).ok_or("square out of range; expected a1 through g7")
            }
            _ => Err("invalid square; expected a column letter and a row digit"),
        }
    }
}
