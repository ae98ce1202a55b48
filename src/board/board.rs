//! 3x3 grid of cells

use super::{Cell, Player, Pos, TOTAL_CELLS};

/// Game board, row-major.
///
/// Cells only ever go from `Empty` to a mark; the only way back is
/// [`Board::clear`], used on reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Mark a cell for a player.
    /// Callers must have checked the cell is empty; game moves go through
    /// `GameState::attempt_move`.
    #[inline]
    pub(crate) fn place(&mut self, pos: Pos, player: Player) {
        debug_assert!(self.is_empty(pos));
        self.cells[pos.to_index()] = player.into();
    }

    /// Empty every cell
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.cells = [Cell::Empty; TOTAL_CELLS];
    }

    /// Iterate over `(pos, cell)` pairs in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (Pos::from_index(idx), cell))
    }

    /// Number of marked cells
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Check if every cell is marked
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == Cell::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
