use log::trace;

use super::board::{Board, Move, Player};

/// Game value of `board` under perfect play and the move that achieves it.
///
/// X maximises utility and O minimises it. Ties go to the first move in
/// row-major order.
pub fn search(board: &Board) -> (Option<Move>, i8) {
    if board.terminal() {
        return (None, board.utility());
    }

    let maximizing = board.player() == Player::X;
    let mut best: Option<(Move, i8)> = None;
    for mv in board.actions() {
        let (_, value) = search(&board.place(mv));
        let improves = match best {
            None => true,
            Some((_, current)) if maximizing => value > current,
            Some((_, current)) => value < current,
        };
        if improves {
            best = Some((mv, value));
            // No utility beats an outright win.
            if (maximizing && value == 1) || (!maximizing && value == -1) {
                break;
            }
        }
    }

    match best {
        Some((mv, value)) => (Some(mv), value),
        None => (None, board.utility()),
    }
}

/// Optimal move for whoever is to play, or `None` once the game is over.
pub fn minimax(board: &Board) -> Option<Move> {
    let (mv, value) = search(board);
    trace!("minimax picked {:?} with value {}", mv, value);
    mv
}
