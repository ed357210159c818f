//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines;

/// A cell on the 3x3 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player symbol.
///
/// "The engine's side" is always whichever `Player` a search is run for,
/// never a globally fixed symbol: either side may move first and either
/// side may be the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

/// A 3x3 game position, cells indexed 0..9 row-major.
///
/// This type implements `Copy` since it's only 9 bytes. The searchers pass
/// per-node snapshots by value instead of mutating one shared array under
/// an apply/undo discipline, so a caller's board is never observably
/// changed by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain exactly 9 non-whitespace characters, each a
    /// valid cell representation (`.` or space for empty, `X`/`x`, `O`/`o`).
    ///
    /// # Errors
    ///
    /// Returns an error if the length is wrong or any character is invalid.
    pub fn from_string(s: &str) -> crate::Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Check if no empty cells remain
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Get all empty positions in ascending index order.
    ///
    /// The ordering is load-bearing: it fixes the move order during search
    /// and therefore which of several equally-optimal moves is chosen (the
    /// first strictly-better value wins, so the lowest-index optimal move
    /// is kept).
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Place `player`'s symbol at `pos` and return the new board state
    ///
    /// # Errors
    ///
    /// Returns an error if the position is out of bounds or occupied.
    #[must_use = "place returns a new board state; the original is unchanged"]
    pub fn place(&self, pos: usize, player: Player) -> crate::Result<Board> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        let mut next = *self;
        next.cells[pos] = player.to_cell();
        Ok(next)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        lines::winner(self)
    }

    /// Check if the game is over (completed line or full board)
    pub fn is_terminal(&self) -> bool {
        lines::is_terminal(self)
    }

    /// Check that the position is reachable in some game.
    ///
    /// Either side may have moved first, so the piece counts may differ by
    /// at most 1 in either direction, and at most one player may have a
    /// completed line.
    ///
    /// # Errors
    ///
    /// Returns an error describing the violated constraint.
    pub fn validate(&self) -> crate::Result<()> {
        let (x_count, o_count) = self.piece_counts();
        if x_count.abs_diff(o_count) > 1 {
            return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
        }

        if lines::has_won(self, Player::X) && lines::has_won(self, Player::O) {
            return Err(crate::Error::ConflictingWinners);
        }

        Ok(())
    }

    fn piece_counts(&self) -> (usize, usize) {
        let mut x = 0;
        let mut o = 0;
        for cell in &self.cells {
            match cell {
                Cell::X => x += 1,
                Cell::O => o += 1,
                Cell::Empty => {}
            }
        }
        (x, o)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        for i in 0..9 {
            assert_eq!(board.cells[i], Cell::Empty);
        }
        assert_eq!(board.available_moves().len(), 9);
    }

    #[test]
    fn test_place() {
        let board = Board::new();

        // Valid move
        let next = board.place(4, Player::X).unwrap();
        assert_eq!(next.cells[4], Cell::X);
        // Original untouched
        assert_eq!(board.cells[4], Cell::Empty);

        // Move on occupied cell
        let result = next.place(4, Player::O);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("occupied"));

        // Out of bounds
        assert!(board.place(9, Player::X).is_err());
    }

    #[test]
    fn test_available_moves_ascending() {
        let board = Board::from_string(".X..O....").unwrap();
        assert_eq!(board.available_moves(), vec![0, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[1], Cell::O);
        assert_eq!(board.cells[2], Cell::X);

        // Invalid string length
        assert!(Board::from_string("XO").is_err());

        // Invalid character
        assert!(Board::from_string("XOZ......").is_err());
    }

    #[test]
    fn test_validate_piece_counts() {
        // X ahead by one (X opened)
        assert!(Board::from_string("X........").unwrap().validate().is_ok());
        // O ahead by one (O opened)
        assert!(Board::from_string("O........").unwrap().validate().is_ok());
        // X ahead by two is unreachable
        let result = Board::from_string("XX.......").unwrap().validate();
        assert!(matches!(
            result,
            Err(crate::Error::InvalidPieceCounts { x_count: 2, o_count: 0 })
        ));
    }

    #[test]
    fn test_validate_conflicting_winners() {
        let result = Board::from_string("XXXOOO...").unwrap().validate();
        assert!(matches!(result, Err(crate::Error::ConflictingWinners)));
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        let display = format!("{board}");
        assert!(display.contains("XOX"));
        assert!(display.contains(".O."));
        assert!(display.contains("X.."));
    }
}
