use super::Mark;
use super::Outcome;
use ttr_core::CELLS;
use ttr_core::SIDE;

/// The 8 winning triples in scan order: rows, then columns, then diagonals.
/// Scan order is the tie-break if multiple triples complete at once.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// One participant's view of the grid. Each side of a match owns its own
/// Board; convergence happens only through identical move application,
/// never shared memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Option<Mark>; CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }
    /// Places a mark if the index is in range and the cell is empty.
    /// Returns false without mutating otherwise; an occupied cell is
    /// never overwritten.
    pub fn place(&mut self, index: usize, mark: Mark) -> bool {
        match self.cells.get(index) {
            Some(None) => {
                self.cells[index] = Some(mark);
                true
            }
            _ => false,
        }
    }
    /// The mark at a cell, if any.
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }
    /// True if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
    /// Clears every cell.
    pub fn clear(&mut self) {
        self.cells = [None; CELLS];
    }
    /// Classifies the board: first equal non-empty triple in line scan
    /// order wins; a full board with no winner is a draw.
    pub fn outcome(&self) -> Outcome {
        for line in LINES {
            if let [Some(a), Some(b), Some(c)] = line.map(|i| self.cells[i]) {
                if a == b && b == c {
                    return Outcome::Won(a);
                }
            }
        }
        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = self
            .cells
            .chunks(SIDE)
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Some(mark) => mark.to_string(),
                        None => ".".to_string(),
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/");
        write!(f, "{}", rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: [&str; CELLS]) -> Board {
        let mut board = Board::new();
        for (i, s) in cells.iter().enumerate() {
            if let Ok(mark) = Mark::try_from(*s) {
                assert!(board.place(i, mark));
            }
        }
        board
    }

    #[test]
    fn empty_board_is_ongoing() {
        assert_eq!(Board::new().outcome(), Outcome::Ongoing);
    }
    #[test]
    fn place_rejects_occupied() {
        let mut board = Board::new();
        assert!(board.place(4, Mark::X));
        assert!(!board.place(4, Mark::O));
        assert_eq!(board.get(4), Some(Mark::X));
    }
    #[test]
    fn place_rejects_out_of_range() {
        let mut board = Board::new();
        assert!(!board.place(CELLS, Mark::X));
        assert_eq!(board, Board::new());
    }
    #[test]
    fn top_row_wins() {
        let board = board(["X", "X", "X", "O", "O", "", "", "", ""]);
        assert_eq!(board.outcome(), Outcome::Won(Mark::X));
    }
    #[test]
    fn column_wins() {
        let board = board(["O", "X", "", "O", "X", "", "", "X", ""]);
        assert_eq!(board.outcome(), Outcome::Won(Mark::X));
    }
    #[test]
    fn diagonal_wins() {
        let board = board(["O", "", "X", "", "X", "", "X", "", "O"]);
        assert_eq!(board.outcome(), Outcome::Won(Mark::X));
    }
    #[test]
    fn full_board_without_line_draws() {
        let board = board(["X", "O", "X", "X", "O", "O", "O", "X", "X"]);
        assert!(board.is_full());
        assert_eq!(board.outcome(), Outcome::Draw);
    }
    #[test]
    fn outcome_never_reverts() {
        let mut board = Board::new();
        let plays = [(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O)];
        for (i, mark) in plays {
            assert!(board.place(i, mark));
            assert_eq!(board.outcome(), Outcome::Ongoing);
        }
        assert!(board.place(2, Mark::X));
        assert_eq!(board.outcome(), Outcome::Won(Mark::X));
        // terminal boards stay terminal under any further placement
        assert!(board.place(5, Mark::O));
        assert_eq!(board.outcome(), Outcome::Won(Mark::X));
    }
    #[test]
    fn clear_empties_board() {
        let mut board = board(["X", "O", "", "", "", "", "", "", ""]);
        board.clear();
        assert_eq!(board, Board::new());
        assert_eq!(board.outcome(), Outcome::Ongoing);
    }
    #[test]
    fn display_rows() {
        let board = board(["X", "", "O", "", "X", "", "", "", ""]);
        assert_eq!(board.to_string(), "X.O/.X./...");
    }
}
