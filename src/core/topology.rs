//! Fixed geometry of the waffle grid
//!
//! The 5×5 grid has 21 active cells, numbered in reading order and skipping
//! the four permanent holes:
//!
//! ```text
//!  0  1  2  3  4
//!  5  .  6  .  7
//!  8  9 10 11 12
//! 13  . 14  . 15
//! 16 17 18 19 20
//! ```
//!
//! Slots are listed in the order the builder fills them: column 2, row 2,
//! row 0, column 4, row 4, column 0. Each slot after the first crosses at
//! least one earlier slot.

use super::word::WORD_LEN;

/// Width and height of the grid
pub const GRID_SIZE: usize = 5;

/// Number of active (non-blank) cells
pub const CELL_COUNT: usize = 21;

/// Number of word slots
pub const SLOT_COUNT: usize = 6;

/// Row/column position inside the 5×5 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Row,
    Column,
}

/// Where a cell sits inside one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub slot: usize,
    pub offset: usize,
}

/// Slots covering a cell: a row slot, a column slot, or both at intersections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coverage {
    pub row: Option<Placement>,
    pub column: Option<Placement>,
}

impl Coverage {
    /// Covering placements, row first
    pub fn iter(self) -> impl Iterator<Item = Placement> {
        self.row.into_iter().chain(self.column)
    }

    #[must_use]
    pub const fn is_intersection(self) -> bool {
        self.row.is_some() && self.column.is_some()
    }
}

/// Cell indices of every slot, in word order
pub const SLOTS: [[usize; WORD_LEN]; SLOT_COUNT] = [
    [2, 6, 10, 14, 18],
    [8, 9, 10, 11, 12],
    [0, 1, 2, 3, 4],
    [4, 7, 12, 15, 20],
    [16, 17, 18, 19, 20],
    [0, 5, 8, 13, 16],
];

/// Orientation of every slot
pub const SLOT_ORIENTATION: [Orientation; SLOT_COUNT] = [
    Orientation::Column,
    Orientation::Row,
    Orientation::Row,
    Orientation::Column,
    Orientation::Row,
    Orientation::Column,
];

/// Cells that may take part in a shuffle or a player swap
pub const SWAPPABLE: [usize; 16] = [1, 2, 3, 5, 6, 7, 8, 9, 11, 12, 13, 14, 15, 17, 18, 19];

// Slot covering grid row 0, 2, 4 and grid column 0, 2, 4
const ROW_SLOTS: [usize; 3] = [2, 1, 4];
const COLUMN_SLOTS: [usize; 3] = [5, 0, 3];

// First cell index of each grid row
const ROW_START: [usize; GRID_SIZE] = [0, 5, 8, 13, 16];

/// Cell indices of a slot
///
/// # Panics
/// Panics if `slot >= SLOT_COUNT`
#[inline]
#[must_use]
pub const fn slot_cells(slot: usize) -> &'static [usize; WORD_LEN] {
    &SLOTS[slot]
}

/// Grid coordinates of a slot, in word order
#[must_use]
pub fn slot_coords(slot: usize) -> [Coord; WORD_LEN] {
    SLOTS[slot].map(cell_coord)
}

/// Coordinate of an active cell
///
/// # Panics
/// Panics if `cell >= CELL_COUNT`
#[must_use]
pub const fn cell_coord(cell: usize) -> Coord {
    assert!(cell < CELL_COUNT, "cell index out of range");
    let mut row = GRID_SIZE - 1;
    while ROW_START[row] > cell {
        row -= 1;
    }
    let within = cell - ROW_START[row];
    let col = if row % 2 == 0 { within } else { within * 2 };
    Coord { row, col }
}

/// Cell index at a coordinate, or `None` for holes and out-of-range positions
#[must_use]
pub const fn cell_at(coord: Coord) -> Option<usize> {
    if coord.row >= GRID_SIZE || coord.col >= GRID_SIZE {
        return None;
    }
    if coord.row % 2 == 0 {
        Some(ROW_START[coord.row] + coord.col)
    } else if coord.col % 2 == 0 {
        Some(ROW_START[coord.row] + coord.col / 2)
    } else {
        None
    }
}

/// True for the four permanently blank holes
#[must_use]
pub const fn is_blank(coord: Coord) -> bool {
    coord.row % 2 == 1 && coord.col % 2 == 1
}

/// Row and column slots covering a cell
#[must_use]
pub const fn placements(cell: usize) -> Coverage {
    let Coord { row, col } = cell_coord(cell);
    let row_placement = if row % 2 == 0 {
        Some(Placement {
            slot: ROW_SLOTS[row / 2],
            offset: col,
        })
    } else {
        None
    };
    let column_placement = if col % 2 == 0 {
        Some(Placement {
            slot: COLUMN_SLOTS[col / 2],
            offset: row,
        })
    } else {
        None
    };
    Coverage {
        row: row_placement,
        column: column_placement,
    }
}

/// Every cell on the line(s) through `cell`, including the cell itself
///
/// Intersections may appear twice when a cell lies on both lines.
pub fn line_cells(cell: usize) -> impl Iterator<Item = usize> {
    placements(cell)
        .iter()
        .flat_map(|placement| SLOTS[placement.slot])
}

#[inline]
#[must_use]
pub fn is_swappable(cell: usize) -> bool {
    SWAPPABLE.contains(&cell)
}
