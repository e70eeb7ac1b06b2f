use serde::Serialize;
use std::fmt;

use super::error::GameError;

pub const SIZE: usize = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A cell position, `(row, col)` counted from the top left.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }
}

const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Player>; SIZE]; SIZE],
}

impl Board {
    /// The empty starting board.
    pub fn initial() -> Self {
        Board::default()
    }

    /// Builds a board from rows like `"XO."`; anything but `X`/`O` is empty.
    pub fn from_rows(rows: [&str; SIZE]) -> Self {
        let mut board = Board::default();
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().take(SIZE).enumerate() {
                board.cells[r][c] = match ch {
                    'X' | 'x' => Some(Player::X),
                    'O' | 'o' => Some(Player::O),
                    _ => None,
                };
            }
        }
        board
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[row][col]
    }

    fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(player))
            .count()
    }

    /// Whose turn it is. X always opens.
    pub fn player(&self) -> Player {
        if self.count(Player::X) == self.count(Player::O) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Empty cells in row-major order.
    pub fn actions(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.cells[row][col].is_none() {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    /// The board after the current player takes `mv`. `self` is untouched.
    pub fn result(&self, mv: Move) -> Result<Board, GameError> {
        if mv.row >= SIZE || mv.col >= SIZE {
            return Err(GameError::OutOfBounds { row: mv.row, col: mv.col });
        }
        if self.cells[mv.row][mv.col].is_some() {
            return Err(GameError::MoveTaken { row: mv.row, col: mv.col });
        }
        Ok(self.place(mv))
    }

    /// `result` without the legality checks; `mv` must come from `actions`.
    pub(crate) fn place(&self, mv: Move) -> Board {
        let mut next = *self;
        next.cells[mv.row][mv.col] = Some(self.player());
        next
    }

    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|line| {
            let [a, b, c] = line.map(|(r, col)| self.cells[r][col]);
            match a {
                Some(player) if b == a && c == a => Some(player),
                _ => None,
            }
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// True once someone has won or no cell is left.
    pub fn terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// 1 if X has won, -1 if O has won, 0 otherwise.
    pub fn utility(&self) -> i8 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f, "---+---+---")?;
            }
            let cells: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(player) => format!(" {} ", player),
                    None => "   ".to_string(),
                })
                .collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board() {
        let board = Board::initial();
        assert_eq!(board.player(), Player::X);
        assert_eq!(board.actions().len(), 9);
        assert!(!board.terminal());
        assert_eq!(board.utility(), 0);
    }

    #[test]
    fn test_players_alternate() {
        let board = Board::initial().result(Move::new(1, 1)).unwrap();
        assert_eq!(board.cell(1, 1), Some(Player::X));
        assert_eq!(board.player(), Player::O);
        let board = board.result(Move::new(0, 0)).unwrap();
        assert_eq!(board.cell(0, 0), Some(Player::O));
        assert_eq!(board.player(), Player::X);
    }

    #[test]
    fn test_result_leaves_original_untouched() {
        let board = Board::initial();
        let _ = board.result(Move::new(0, 0)).unwrap();
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn test_illegal_moves() {
        let board = Board::from_rows(["X..", "...", "..."]);
        assert_eq!(
            board.result(Move::new(0, 0)),
            Err(GameError::MoveTaken { row: 0, col: 0 })
        );
        assert_eq!(
            board.result(Move::new(3, 1)),
            Err(GameError::OutOfBounds { row: 3, col: 1 })
        );
    }

    #[test]
    fn test_winner_lines() {
        assert_eq!(Board::from_rows(["XXX", "OO.", "..."]).winner(), Some(Player::X));
        assert_eq!(Board::from_rows(["XO.", "XO.", ".OX"]).winner(), Some(Player::O));
        assert_eq!(Board::from_rows(["X.O", ".XO", "..X"]).winner(), Some(Player::X));
        assert_eq!(Board::from_rows(["X.O", "XO.", "O.X"]).winner(), Some(Player::O));
        assert_eq!(Board::from_rows(["XO.", "...", "..."]).winner(), None);
    }

    #[test]
    fn test_draw_is_terminal() {
        let board = Board::from_rows(["XOX", "XOO", "OXX"]);
        assert_eq!(board.winner(), None);
        assert!(board.terminal());
        assert_eq!(board.utility(), 0);
        assert!(board.actions().is_empty());
    }

    #[test]
    fn test_utility() {
        assert_eq!(Board::from_rows(["XXX", "OO.", "..."]).utility(), 1);
        assert_eq!(Board::from_rows(["OOO", "XX.", "X.."]).utility(), -1);
    }

    #[test]
    fn test_display() {
        let board = Board::from_rows(["X..", ".O.", "..."]);
        assert_eq!(
            board.to_string(),
            " X |   |   \n---+---+---\n   | O |   \n---+---+---\n   |   |   \n"
        );
    }
}
