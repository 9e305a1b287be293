use crate::board::Board;
use crate::types::{Mark, Outcome};

/// The 8 winning lines of the 3x3 board: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

/// Derives the outcome from cell contents alone. Short-circuits on the first
/// complete line; under strict turn alternation at most one line can be
/// complete on a reachable board.
pub fn evaluate(board: &Board) -> Outcome {
    match find_winning_line(board) {
        Some(line) => Outcome::Win(line.mark),
        None if board.is_full() => Outcome::Draw,
        None => Outcome::Ongoing,
    }
}

pub fn evaluate_with_line(board: &Board) -> (Outcome, Option<WinningLine>) {
    match find_winning_line(board) {
        Some(line) => (Outcome::Win(line.mark), Some(line)),
        None if board.is_full() => (Outcome::Draw, None),
        None => (Outcome::Ongoing, None),
    }
}

fn find_winning_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    for line in WINNING_LINES {
        let mark = cells[line[0]];
        if mark != Mark::Empty && cells[line[1]] == mark && cells[line[2]] == mark {
            return Some(WinningLine { mark, cells: line });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CELL_COUNT;

    fn board_with_line(line: [usize; 3], mark: Mark) -> Board {
        let mut cells = [Mark::Empty; CELL_COUNT];
        for cell in line {
            cells[cell] = mark;
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_all_winning_lines_detected_for_both_marks() {
        for line in WINNING_LINES {
            for mark in [Mark::X, Mark::O] {
                let board = board_with_line(line, mark);
                assert_eq!(evaluate(&board), Outcome::Win(mark), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_cells([
            Mark::X, Mark::O, Mark::X,
            Mark::X, Mark::O, Mark::O,
            Mark::O, Mark::X, Mark::X,
        ]);
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_board_with_empty_cell_and_no_line_is_ongoing() {
        let mut board = Board::new();
        assert_eq!(evaluate(&board), Outcome::Ongoing);

        board.place(0, Mark::X);
        board.place(4, Mark::O);
        assert_eq!(evaluate(&board), Outcome::Ongoing);
    }

    #[test]
    fn test_winning_line_cells_reported() {
        let board = board_with_line([2, 4, 6], Mark::O);
        let (outcome, line) = evaluate_with_line(&board);
        assert_eq!(outcome, Outcome::Win(Mark::O));
        assert_eq!(
            line,
            Some(WinningLine {
                mark: Mark::O,
                cells: [2, 4, 6]
            })
        );
    }

    #[test]
    fn test_no_line_reported_for_draw() {
        let board = Board::from_cells([
            Mark::O, Mark::X, Mark::O,
            Mark::X, Mark::X, Mark::O,
            Mark::X, Mark::O, Mark::X,
        ]);
        let (outcome, line) = evaluate_with_line(&board);
        assert_eq!(outcome, Outcome::Draw);
        assert_eq!(line, None);
    }
}
