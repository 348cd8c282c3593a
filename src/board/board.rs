//! Immutable board snapshot

use super::{Cell, Player, Pos, BOARD_SIZE, TOTAL_CELLS};

/// 3x3 board in row-major order.
///
/// Boards are plain values: `with_mark` returns a new snapshot, so every
/// history entry keeps the board exactly as it was when the move was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Build a board directly from cells (row-major)
    pub fn from_cells(cells: [Cell; TOTAL_CELLS]) -> Self {
        Self { cells }
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Get cell by raw index, `None` if out of range
    #[inline]
    pub fn get_index(&self, idx: usize) -> Option<Cell> {
        self.cells.get(idx).copied()
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Copy of this board with `player`'s mark at `pos`
    #[inline]
    pub fn with_mark(&self, pos: Pos, player: Player) -> Board {
        let mut cells = self.cells;
        cells[pos.to_index()] = Cell::from(player);
        Board { cells }
    }

    /// Number of marks on the board
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// True when no cell is empty
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let symbol = match self.cells[row * BOARD_SIZE + col] {
                    Cell::Empty => ".",
                    Cell::X => "X",
                    Cell::O => "O",
                };
                f.write_str(symbol)?;
            }
            if row + 1 < BOARD_SIZE {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
