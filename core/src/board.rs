use crate::types::Mark;

pub const CELL_COUNT: usize = 9;

/// 3x3 grid, row-major indices 0-8. Cells only ever go from Empty to a mark
/// through `place`; `clear` exists for the search engine's place/undo loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    #[cfg(test)]
    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied()
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn place(&mut self, cell: usize, mark: Mark) {
        self.cells[cell] = mark;
    }

    pub fn clear(&mut self, cell: usize) {
        self.cells[cell] = Mark::Empty;
    }

    pub fn is_empty_cell(&self, cell: usize) -> bool {
        self.cells.get(cell) == Some(&Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &mark)| mark == Mark::Empty)
            .map(|(cell, _)| cell)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_has_nine_available_moves() {
        let board = Board::new();
        assert_eq!(board.available_moves(), (0..CELL_COUNT).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_removes_cell_from_available_moves() {
        let mut board = Board::new();
        board.place(4, Mark::X);
        assert!(!board.is_empty_cell(4));
        assert!(!board.available_moves().contains(&4));
        assert_eq!(board.available_moves().len(), 8);
    }

    #[test]
    fn test_clear_restores_cell() {
        let mut board = Board::new();
        board.place(7, Mark::O);
        board.clear(7);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let board = Board::new();
        assert_eq!(board.get(9), None);
        assert!(!board.is_empty_cell(9));
    }

    #[test]
    fn test_full_board_detection() {
        let board = Board::from_cells([
            Mark::X, Mark::O, Mark::X,
            Mark::X, Mark::O, Mark::O,
            Mark::O, Mark::X, Mark::X,
        ]);
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }
}
