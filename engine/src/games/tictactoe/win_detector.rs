use super::board::Board;
use super::types::{Mark, WinningLine};

/// 3 rows, 3 columns, 2 diagonals. The scan order is fixed: when more than
/// one line is complete, the earliest entry in this table is the one
/// reported.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();

    for line in WIN_LINES {
        let mark = cells[line[0]];
        if mark == Mark::Empty {
            continue;
        }
        if cells[line[1]] == mark && cells[line[2]] == mark {
            return Some(WinningLine::new(mark, line));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(check_win(&Board::new()), None);
    }

    #[test]
    fn test_detects_top_row() {
        let board = Board::from_cells([
            X, X, X,
            O, O, E,
            E, E, E,
        ]);
        assert_eq!(check_win(&board), Some(WinningLine::new(X, [0, 1, 2])));
    }

    #[test]
    fn test_detects_middle_column() {
        let board = Board::from_cells([
            X, O, E,
            X, O, E,
            E, O, X,
        ]);
        assert_eq!(check_win(&board), Some(WinningLine::new(O, [1, 4, 7])));
    }

    #[test]
    fn test_detects_main_diagonal() {
        let board = Board::from_cells([
            X, O, E,
            O, X, E,
            E, E, X,
        ]);
        assert_eq!(check_win(&board), Some(WinningLine::new(X, [0, 4, 8])));
    }

    #[test]
    fn test_detects_anti_diagonal() {
        let board = Board::from_cells([
            X, X, O,
            E, O, E,
            O, E, X,
        ]);
        assert_eq!(check_win(&board), Some(WinningLine::new(O, [2, 4, 6])));
    }

    #[test]
    fn test_full_draw_board_has_no_winner() {
        let board = Board::from_cells([
            X, O, X,
            X, O, O,
            O, X, X,
        ]);
        assert_eq!(check_win(&board), None);
    }

    // Unreachable through alternating play, but the scan must still resolve
    // to the earliest table entry.
    #[test]
    fn test_two_complete_lines_report_the_earliest() {
        let board = Board::from_cells([
            X, X, X,
            X, X, X,
            E, E, E,
        ]);
        assert_eq!(check_win(&board), Some(WinningLine::new(X, [0, 1, 2])));
    }
}
