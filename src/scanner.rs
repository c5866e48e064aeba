//! Per-axis line scanning: the heart of both win detection and fork
//! classification. Given a board, a prospective move, and an axis, walks
//! outward in both signed directions, classifying contiguous runs of the
//! moving color and the single-empty "gap bridge" between two runs.
//!
//! The scan never reads the origin cell itself — `center_len` always starts
//! at 1 and grows from neighbors only. This lets the same scan be used both
//! before a move is committed (origin still empty on the real board) and
//! after (origin physically occupied), with identical results either way.

use crate::axis::Axis;
use crate::board::{Board, Color};

/// The result of scanning one axis through a prospective move's cell.
///
/// `side_lens`, `gap_indices`, and `end_indices` are parallel in the sense
/// that `gap_indices[i]` is the bridge cell that produced `side_lens[i]`, but
/// `end_indices` is independent — it records, per side, the empty cell that
/// would extend the run further (whether or not that side ever bridged a
/// gap), and a blocked side contributes no entry.
#[derive(Clone, Debug, Default)]
pub struct LineSegment {
    pub center_len: u32,
    pub side_lens: Vec<u32>,
    pub gap_indices: Vec<i32>,
    pub end_indices: Vec<i32>,
}

/// One signed direction's worth of scanning, shared by both directions of
/// `scan`.
struct SideScan {
    run: u32,
    gap_index: Option<i32>,
    side_len: Option<u32>,
    end_index: Option<i32>,
}

enum SideState {
    Run,
    Gap { entered_at: i32 },
    PostBridgeRun,
}

/// Walk one signed direction `(dx, dy)` from `(x, y)`, applying the
/// Run/Gap transition table from `spec.md` §4.2. `sign` is `1` for the
/// positive direction and `-1` for the negative one; it's folded into every
/// recorded index so gap/end positions are signed offsets from the origin,
/// independent of which side produced them.
fn scan_side(board: &Board, x: i32, y: i32, dx: i32, dy: i32, sign: i32, color: Color) -> SideScan {
    let opponent = color.opposite();
    let mut state = SideState::Run;
    let mut run = 0u32;
    let mut gap_index = None;
    let mut side_len = None;
    let mut end_index = None;

    let mut i: i32 = 1;
    loop {
        let px = x + dx * i;
        let py = y + dy * i;
        let cell = board.get(px, py);
        let signed_i = sign * i;

        match state {
            SideState::Run => match cell {
                Some(c) if c == color => run += 1,
                Some(c) if c == opponent => break,
                None => break,
                _ => state = SideState::Gap { entered_at: signed_i },
            },
            SideState::Gap { entered_at } => match cell {
                Some(c) if c == color => {
                    gap_index = Some(entered_at);
                    side_len = Some(1);
                    state = SideState::PostBridgeRun;
                }
                _ => {
                    end_index = Some(entered_at);
                    break;
                }
            },
            SideState::PostBridgeRun => match cell {
                Some(c) if c == color => side_len = side_len.map(|s| s + 1),
                Some(c) if c == opponent => break,
                None => break,
                _ => {
                    end_index = Some(signed_i);
                    break;
                }
            },
        }
        i += 1;
    }

    SideScan {
        run,
        gap_index,
        side_len,
        end_index,
    }
}

/// Scan both directions of `axis` through `(x, y)` for `color`, as if `color`
/// were (or is) placed there.
pub fn scan(board: &Board, x: i32, y: i32, axis: Axis, color: Color) -> LineSegment {
    let (dx, dy) = axis.step();
    let pos = scan_side(board, x, y, dx, dy, 1, color);
    let neg = scan_side(board, x, y, -dx, -dy, -1, color);

    let mut segment = LineSegment {
        center_len: 1 + pos.run + neg.run,
        ..Default::default()
    };

    for side in [&pos, &neg] {
        if let (Some(gap), Some(len)) = (side.gap_index, side.side_len) {
            segment.gap_indices.push(gap);
            segment.side_lens.push(len);
        }
        if let Some(end) = side.end_index {
            segment.end_indices.push(end);
        }
    }

    segment
}

/// Translate a signed axis offset back into absolute board coordinates.
pub fn offset_to_coords(x: i32, y: i32, axis: Axis, offset: i32) -> (i32, i32) {
    let (dx, dy) = axis.step();
    (x + dx * offset, y + dy * offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn consecutive_three_has_two_end_indices() {
        let mut board = Board::new();
        board.set(7, 6, Color::Black).unwrap();
        board.set(7, 8, Color::Black).unwrap();
        // origin at (7,7) is the prospective move, not yet placed. Stones
        // share x=7 and vary y, so this run lies along the vertical axis.
        let seg = scan(&board, 7, 7, Axis::Vertical, Color::Black);
        assert_eq!(seg.center_len, 3);
        assert!(seg.side_lens.is_empty());
        assert_eq!(seg.end_indices.len(), 2);
    }

    #[test]
    fn gap_bridge_is_recorded_once_per_side() {
        let mut board = Board::new();
        board.set(7, 6, Color::Black).unwrap();
        board.set(7, 9, Color::Black).unwrap();
        // Vertical at origin (7,7): neighbor (7,6)=Black (run), then (7,8) empty (gap),
        // then (7,9)=Black (bridge).
        let seg = scan(&board, 7, 7, Axis::Vertical, Color::Black);
        assert_eq!(seg.center_len, 2); // origin + (7,6)
        assert_eq!(seg.side_lens, vec![1]);
        assert_eq!(seg.gap_indices, vec![2]);
    }

    #[test]
    fn blocked_side_has_no_end_index() {
        let mut board = Board::new();
        board.set(7, 6, Color::White).unwrap();
        let seg = scan(&board, 7, 7, Axis::Vertical, Color::Black);
        assert_eq!(seg.center_len, 1);
        assert_eq!(seg.end_indices.len(), 1); // only the open (7,8) side
    }

    #[test]
    fn off_board_side_is_blocked() {
        let board = Board::new();
        let seg = scan(&board, 0, 0, Axis::Horizontal, Color::Black);
        // one side runs off the left edge at x=-1 immediately (blocked),
        // the other extends into the board (open end at x=1).
        assert_eq!(seg.end_indices.len(), 1);
    }
}
