use super::types::{BOARD_SIZE, CELL_COUNT, Mark, WinningLine};

pub const WINNING_LINES: [[usize; BOARD_SIZE]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn has_line(cells: &[Mark; CELL_COUNT], mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&i| cells[i] == mark))
}

pub fn check_win_with_line(cells: &[Mark; CELL_COUNT]) -> Option<WinningLine> {
    for line in WINNING_LINES {
        let mark = cells[line[0]];
        if mark == Mark::Empty {
            continue;
        }
        if line.iter().all(|&i| cells[i] == mark) {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}
