//! Win condition checking
//!
//! A player wins by owning all three cells of a row, a column or a
//! diagonal. Only the player who just moved can have completed a line,
//! so every check here is for one given player.

use crate::board::{Board, Cell, Player, Pos};

/// The 8 winning lines as `(row, col)` triples
pub const LINES: [[(u8, u8); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Find the first line fully owned by `player`
pub fn find_winning_line(board: &Board, player: Player) -> Option<[Pos; 3]> {
    let mark = Cell::from(player);

    LINES.into_iter().find_map(|line| {
        let positions = line.map(|(row, col)| Pos::new(row, col));
        positions
            .iter()
            .all(|&pos| board.get(pos) == mark)
            .then_some(positions)
    })
}

/// Check if `player` owns a complete line
#[inline]
pub fn is_winner(board: &Board, player: Player) -> bool {
    find_winning_line(board, player).is_some()
}

/// A board with every cell marked and no line for `last_mover`.
///
/// Win takes precedence: a full board where the mover completed a line is
/// not a draw.
#[inline]
pub fn is_draw(board: &Board, last_mover: Player) -> bool {
    board.is_full() && !is_winner(board, last_mover)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[((u8, u8), Player)]) -> Board {
        let mut board = Board::new();
        for &((row, col), player) in marks {
            board.place(Pos::new(row, col), player);
        }
        board
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let marks: Vec<_> = line.iter().map(|&rc| (rc, Player::O)).collect();
            let board = board_with(&marks);
            assert!(is_winner(&board, Player::O), "line {:?}", line);
            assert!(!is_winner(&board, Player::X));
        }
    }

    #[test]
    fn test_two_in_row_not_win() {
        let board = board_with(&[((0, 0), Player::X), ((0, 1), Player::X)]);
        assert!(!is_winner(&board, Player::X));
    }

    #[test]
    fn test_mixed_line_not_win() {
        let board = board_with(&[
            ((1, 0), Player::X),
            ((1, 1), Player::O),
            ((1, 2), Player::X),
        ]);
        assert!(!is_winner(&board, Player::X));
        assert!(!is_winner(&board, Player::O));
    }

    #[test]
    fn test_winning_line_positions() {
        let board = board_with(&[
            ((0, 2), Player::X),
            ((1, 1), Player::X),
            ((2, 0), Player::X),
        ]);
        assert_eq!(
            find_winning_line(&board, Player::X),
            Some([Pos::new(0, 2), Pos::new(1, 1), Pos::new(2, 0)])
        );
    }

    #[test]
    fn test_check_is_for_given_player_only() {
        // O owns column 1; asking about X must not report it
        let board = board_with(&[
            ((0, 1), Player::O),
            ((1, 1), Player::O),
            ((2, 1), Player::O),
            ((0, 0), Player::X),
            ((2, 2), Player::X),
        ]);
        assert!(!is_winner(&board, Player::X));
        assert!(is_winner(&board, Player::O));
    }

    #[test]
    fn test_full_board_draw() {
        // X O X
        // X O O
        // O X X
        let board = board_with(&[
            ((0, 0), Player::X),
            ((0, 1), Player::O),
            ((0, 2), Player::X),
            ((1, 0), Player::X),
            ((1, 1), Player::O),
            ((1, 2), Player::O),
            ((2, 0), Player::O),
            ((2, 1), Player::X),
            ((2, 2), Player::X),
        ]);
        assert!(is_draw(&board, Player::X));
        assert!(is_draw(&board, Player::O));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        // X O X
        // O O X
        // O X X
        let board = board_with(&[
            ((0, 0), Player::X),
            ((0, 1), Player::O),
            ((0, 2), Player::X),
            ((1, 0), Player::O),
            ((1, 1), Player::O),
            ((1, 2), Player::X),
            ((2, 0), Player::O),
            ((2, 1), Player::X),
            ((2, 2), Player::X),
        ]);
        assert!(board.is_full());
        assert!(!is_draw(&board, Player::X));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board = board_with(&[((1, 1), Player::X)]);
        assert!(!is_draw(&board, Player::X));
    }
}
