//! The serializable boundary between this crate and the surrounding lobby
//! (transport, persistence, matchmaking — all out of scope, see `spec.md`
//! §1). Mirrors the shape of the teacher crate's `wasm_api.rs` JSON bridge
//! (`MoveJson`, `MoveResult`, `BoardState`) and the original Go source's
//! JSON-tagged `model.Move` / RPC request-and-event structs, but carries
//! Renju semantics and the numeric error codes fixed by `spec.md` §6.

use serde::{Deserialize, Serialize};

use crate::board::{Color, Move};
use crate::error::{MoveOutcome, RuleError};

/// A move as it arrives from the wire: plain coordinates plus a color tag,
/// with no engine-internal types leaking in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MoveRequest {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl From<MoveRequest> for Move {
    fn from(req: MoveRequest) -> Self {
        Move::new(req.x, req.y, req.color)
    }
}

/// Numeric rejection codes, fixed contiguously per `spec.md` §6: 423–427 are
/// specified exactly; 428/429 are the spec's "assign contiguous values from
/// 428" instruction for the two rule-specific rejections.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[repr(u16)]
pub enum ErrorCode {
    FirstMoveNotBlack = 423,
    FirstMoveNotCenter = 424,
    OutOfBounds = 425,
    CellOccupied = 426,
    InvalidTurn = 427,
    OverlineForbidden = 428,
    IllegalFork = 429,
}

impl From<&RuleError> for ErrorCode {
    fn from(err: &RuleError) -> Self {
        match err {
            RuleError::FirstMoveNotBlack => ErrorCode::FirstMoveNotBlack,
            RuleError::FirstMoveNotCenter => ErrorCode::FirstMoveNotCenter,
            RuleError::OutOfBounds => ErrorCode::OutOfBounds,
            RuleError::CellOccupied => ErrorCode::CellOccupied,
            RuleError::InvalidTurn => ErrorCode::InvalidTurn,
            RuleError::OverlineForbidden => ErrorCode::OverlineForbidden,
            RuleError::IllegalFork => ErrorCode::IllegalFork,
        }
    }
}

/// The wire-facing verdict for one `apply_move` call: either acceptance
/// (with an optional winner) or a coded, human-readable rejection.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MoveVerdict {
    Accepted { winner: Option<Color> },
    Rejected { code: ErrorCode, message: &'static str },
}

impl From<Result<MoveOutcome, RuleError>> for MoveVerdict {
    fn from(result: Result<MoveOutcome, RuleError>) -> Self {
        match result {
            Ok(MoveOutcome::Ongoing) => MoveVerdict::Accepted { winner: None },
            Ok(MoveOutcome::Winner(color)) => MoveVerdict::Accepted {
                winner: Some(color),
            },
            Err(err) => MoveVerdict::Rejected {
                code: ErrorCode::from(&err),
                message: err.message(),
            },
        }
    }
}

impl RuleError {
    /// A static human-readable message, independent of the `thiserror`
    /// `Display` impl so the wire message text can evolve without touching
    /// internal error formatting (and vice versa).
    fn message(self) -> &'static str {
        match self {
            RuleError::FirstMoveNotBlack => "the first move of a game must be played by black",
            RuleError::FirstMoveNotCenter => "the first move of a game must be played at the center cell",
            RuleError::OutOfBounds => "coordinates are outside the board",
            RuleError::CellOccupied => "the target cell is already occupied",
            RuleError::InvalidTurn => "it is not this color's turn",
            RuleError::OverlineForbidden => "black may not win by forming a run longer than five",
            RuleError::IllegalFork => "this move creates more than one simultaneous winning threat for black",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_contiguous_from_423() {
        let codes = [
            ErrorCode::FirstMoveNotBlack,
            ErrorCode::FirstMoveNotCenter,
            ErrorCode::OutOfBounds,
            ErrorCode::CellOccupied,
            ErrorCode::InvalidTurn,
            ErrorCode::OverlineForbidden,
            ErrorCode::IllegalFork,
        ];
        for (i, code) in codes.iter().enumerate() {
            assert_eq!(*code as u16, 423 + i as u16);
        }
    }

    #[test]
    fn rule_error_maps_to_its_matching_code() {
        assert_eq!(ErrorCode::from(&RuleError::IllegalFork), ErrorCode::IllegalFork);
    }
}
