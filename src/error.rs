//! Internal error and outcome types for `RuleEngine::apply_move`.
//!
//! `RuleError` is the tagged-variant error type; it never crosses the crate
//! boundary directly (`wire::ErrorCode` is the serializable projection, see
//! `wire.rs`). Modeled on the `thiserror` + `anyhow` split used throughout
//! `examples/toanth-motors/gears` — a typed enum for the errors a single
//! module can produce, kept internal, with no blanket `From<io::Error>` or
//! similar noise since this crate never touches I/O.

use crate::board::Color;
use thiserror::Error;

/// One rejection kind per `spec.md` §7. Ordering here is just declaration
/// order; the checks that produce these are ordered by `RuleEngine::apply_move`.
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RuleError {
    #[error("first move must be played by black")]
    FirstMoveNotBlack,
    #[error("first move must be played at the center cell")]
    FirstMoveNotCenter,
    #[error("coordinates are outside the board")]
    OutOfBounds,
    #[error("cell is already occupied")]
    CellOccupied,
    #[error("move color does not match the expected turn")]
    InvalidTurn,
    #[error("black may not form a run longer than five")]
    OverlineForbidden,
    #[error("black move creates an illegal fork")]
    IllegalFork,
}

/// The successful result of an accepted move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    Ongoing,
    Winner(Color),
}

/// `RuleEngine::apply_move`'s full return type: either an accepted outcome
/// or a rejection naming the failing check.
pub type MoveResult = Result<MoveOutcome, RuleError>;
