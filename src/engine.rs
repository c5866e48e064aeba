// =============================================================================
// Renju Rule Engine
//
// Validates and applies moves against a Board following a fixed-order
// check pipeline (spec.md §4.4): first-move constraints, turn alternation,
// bounds, occupancy, the black-only overline ban, the black-only fork ban,
// commit, then win check. Earliest failing check is reported; a move either
// is rejected with a `RuleError` or is accepted and committed, optionally
// ending the game.
//
// Logging follows the original Go server's practice of logging only at
// request-handling boundaries, not inside pure computation: a rejected move
// logs a warning with its reason, an accepted terminal move logs the winner
// at debug level. LineScanner/WinDetector/ForkClassifier themselves never log.
// =============================================================================

use log::{debug, warn};

use crate::board::{Board, Color, Move, CENTER};
use crate::error::{MoveOutcome, MoveResult, RuleError};
use crate::fork;
use crate::win;

/// Validate and, if legal, apply `mv` to `board`. See module docs for the
/// check ordering; it is part of the contract, not an implementation detail.
pub fn apply_move(board: &mut Board, mv: Move) -> MoveResult {
    if let Err(err) = check_first_move(board, mv) {
        warn!("move rejected: {err}");
        return Err(err);
    }
    if board.last_move_color != Color::Empty && mv.color == board.last_move_color {
        warn!("move rejected: {}", RuleError::InvalidTurn);
        return Err(RuleError::InvalidTurn);
    }
    if !Board::in_bounds(mv.x, mv.y) {
        warn!("move rejected: {}", RuleError::OutOfBounds);
        return Err(RuleError::OutOfBounds);
    }
    if board.get(mv.x, mv.y) != Some(Color::Empty) {
        warn!("move rejected: {}", RuleError::CellOccupied);
        return Err(RuleError::CellOccupied);
    }

    let run_length = win::max_run_through(board, mv.x, mv.y, mv.color);
    if mv.color == Color::Black && run_length > 5 {
        warn!("move rejected: {}", RuleError::OverlineForbidden);
        return Err(RuleError::OverlineForbidden);
    }

    if mv.color == Color::Black {
        let threats = fork::classify_move(board, mv);
        if !fork::is_legal_fork(mv.color, &threats) {
            warn!("move rejected: {}", RuleError::IllegalFork);
            return Err(RuleError::IllegalFork);
        }
    }

    board
        .set(mv.x, mv.y, mv.color)
        .expect("bounds already validated above");
    board.last_move_color = mv.color;

    if run_length >= 5 {
        debug!("move accepted: {:?} wins", mv.color);
        Ok(MoveOutcome::Winner(mv.color))
    } else {
        Ok(MoveOutcome::Ongoing)
    }
}

/// Checks 1a/1b of `spec.md` §4.4: only meaningful while the board is empty.
fn check_first_move(board: &Board, mv: Move) -> Result<(), RuleError> {
    if board.last_move_color != Color::Empty {
        return Ok(());
    }
    if mv.color != Color::Black {
        return Err(RuleError::FirstMoveNotBlack);
    }
    if (mv.x, mv.y) != (CENTER.0 as i32, CENTER.1 as i32) {
        return Err(RuleError::FirstMoveNotCenter);
    }
    Ok(())
}

/// A fresh, empty board ready for black's opening move at the center cell.
pub fn new_game() -> Board {
    Board::new()
}
