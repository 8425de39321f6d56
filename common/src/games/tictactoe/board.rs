use super::types::{CELL_COUNT, Mark, WinningLine};
use super::win_detector::{check_win_with_line, has_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, position: usize) -> Option<Mark> {
        self.cells.get(position).copied()
    }

    pub fn is_empty_at(&self, position: usize) -> bool {
        self.get(position) == Some(Mark::Empty)
    }

    pub(crate) fn set(&mut self, position: usize, mark: Mark) {
        self.cells[position] = mark;
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn has_line(&self, mark: Mark) -> bool {
        has_line(&self.cells, mark)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board.available_moves()
}
