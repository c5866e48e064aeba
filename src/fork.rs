//! `ForkClassifier`: per-axis threat classification (three / four / open
//! four) and the black-only fork-legality rule built on top of it.
//!
//! Grounded stylistically in `examples/keonwoo98-Gomoku/engine/src/rules/forbidden.rs`'s
//! line-pattern scanning (the closest available code analog for this shape
//! of threat detection) — the original Go source this crate's spec was
//! distilled from has no fork detection at all, only the overline ban in
//! `pkg/game/game.go`'s `maxRowAfterMove`, so this module follows the
//! transition rules spelled out in the specification text directly.

use crate::axis::Axis;
use crate::board::{Board, Color, Move};
use crate::scanner;
use crate::win;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FourKind {
    Closed,
    Open,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AxisThreat {
    Three,
    Four(FourKind),
}

/// Threats `mv` would create, one `(Axis, AxisThreat)` entry per threat. Most
/// axes contribute at most one entry, but a single line can hold a
/// three-section double-four (spec.md §4.5: "if both gaps qualify,
/// contribute two `four` threats") — those two entries share the same axis.
/// At most four axes and at most two entries per axis.
pub type ThreatSet = Vec<(Axis, AxisThreat)>;

/// Classify the threats `mv` would create across all four axes. Temporarily
/// commits `mv` to `board` and reverts it before returning, per spec.md
/// §4.5's recursion note.
pub fn classify_move(board: &mut Board, mv: Move) -> ThreatSet {
    classify_move_probe(board, mv, false)
}

fn classify_move_probe(board: &mut Board, mv: Move, probe: bool) -> ThreatSet {
    let prior = board.get(mv.x, mv.y);
    board
        .set(mv.x, mv.y, mv.color)
        .expect("fork probe coordinates must be in bounds");

    let mut threats = Vec::new();
    for &axis in Axis::ALL.iter() {
        for t in classify_axis(board, mv, axis, probe) {
            threats.push((axis, t));
        }
    }

    if let Some(prior_color) = prior {
        board
            .set(mv.x, mv.y, prior_color)
            .expect("revert coordinates must be in bounds");
    }

    threats
}

/// Classify a single axis's threat(s) for `mv`, which must already be
/// committed to `board` (the caller owns the commit/revert pair). Returns
/// zero, one, or (for a qualifying three-section double-four) two entries.
fn classify_axis(board: &mut Board, mv: Move, axis: Axis, probe: bool) -> Vec<AxisThreat> {
    let segment = scanner::scan(board, mv.x, mv.y, axis, mv.color);

    if segment.end_indices.is_empty() {
        return Vec::new();
    }

    if segment.side_lens.len() == 2 {
        let first_closes = segment.center_len + segment.side_lens[0] == 4
            && makes_exact_five(board, mv, axis, segment.gap_indices[0]);
        let second_closes = segment.center_len + segment.side_lens[1] == 4
            && makes_exact_five(board, mv, axis, segment.gap_indices[1]);
        return if first_closes && second_closes {
            vec![
                AxisThreat::Four(FourKind::Closed),
                AxisThreat::Four(FourKind::Closed),
            ]
        } else {
            Vec::new()
        };
    }

    let total = segment.center_len + segment.side_lens.iter().sum::<u32>();

    match total {
        3 => classify_three(board, mv, axis, &segment, probe)
            .into_iter()
            .collect(),
        4 => classify_four(board, mv, axis, &segment).into_iter().collect(),
        _ => Vec::new(),
    }
}

fn classify_three(
    board: &mut Board,
    mv: Move,
    axis: Axis,
    segment: &scanner::LineSegment,
    probe: bool,
) -> Option<AxisThreat> {
    if probe {
        // Recursion is single-level: a nested entry never classifies a three.
        return None;
    }

    let candidates: Vec<i32> = if segment.side_lens.len() == 1 {
        vec![segment.gap_indices[0]]
    } else {
        segment.end_indices.clone()
    };

    for offset in candidates {
        let (cx, cy) = scanner::offset_to_coords(mv.x, mv.y, axis, offset);
        let candidate_move = Move::new(cx, cy, mv.color);
        let candidate_threats = classify_move_probe(board, candidate_move, true);

        let legal = is_legal_fork(mv.color, &candidate_threats);
        let produces_open_four = candidate_threats
            .iter()
            .any(|&(a, t)| a == axis && t == AxisThreat::Four(FourKind::Open));

        if legal && produces_open_four {
            return Some(AxisThreat::Three);
        }
    }
    None
}

fn classify_four(
    board: &mut Board,
    mv: Move,
    axis: Axis,
    segment: &scanner::LineSegment,
) -> Option<AxisThreat> {
    if segment.side_lens.len() == 1 {
        let gap = segment.gap_indices[0];
        if makes_exact_five(board, mv, axis, gap) {
            return Some(AxisThreat::Four(FourKind::Closed));
        }
        return None;
    }

    let open_ends = segment
        .end_indices
        .iter()
        .filter(|&&offset| makes_exact_five(board, mv, axis, offset))
        .count();

    if open_ends == 2 {
        Some(AxisThreat::Four(FourKind::Open))
    } else {
        None
    }
}

/// Would placing `mv.color` at the cell `offset` away from `mv` (along
/// `axis`) create a run of exactly five (not six or more)? `mv` itself must
/// already be committed to `board`.
fn makes_exact_five(board: &Board, mv: Move, axis: Axis, offset: i32) -> bool {
    let (cx, cy) = scanner::offset_to_coords(mv.x, mv.y, axis, offset);
    win::run_length_along_axis(board, cx, cy, axis, mv.color) == 5
}

/// spec.md §4.5: at most two threats, and if exactly two, one `Three` and one
/// `Four` (the only multi-threat combination permitted for black — the 3x4
/// fork). White is unrestricted.
pub fn is_legal_fork(color: Color, threats: &ThreatSet) -> bool {
    if color != Color::Black {
        return true;
    }
    match threats.len() {
        0 | 1 => true,
        2 => {
            let class = |t: AxisThreat| match t {
                AxisThreat::Three => 3,
                AxisThreat::Four(_) => 4,
            };
            class(threats[0].1) * class(threats[1].1) == 12
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn place(board: &mut Board, x: i32, y: i32, color: Color) {
        board.set(x, y, color).unwrap();
    }

    #[test]
    fn simple_three_is_detected() {
        let mut board = Board::new();
        place(&mut board, 7, 6, Color::Black);
        place(&mut board, 7, 8, Color::Black);
        // stones share x=7 and vary y, so the run lies along the vertical axis.
        let threats = classify_move(&mut board, Move::new(7, 7, Color::Black));
        assert!(threats
            .iter()
            .any(|&(a, t)| a == Axis::Vertical && t == AxisThreat::Three));
    }

    #[test]
    fn closed_four_from_a_single_gap() {
        let mut board = Board::new();
        place(&mut board, 4, 0, Color::Black);
        place(&mut board, 5, 0, Color::Black);
        place(&mut board, 7, 0, Color::Black);
        // gap at (6,0); origin (3,0) closes a run of 4+gap+1 totalling four.
        let threats = classify_move(&mut board, Move::new(3, 0, Color::Black));
        assert!(threats
            .iter()
            .any(|&(a, t)| a == Axis::Horizontal && t == AxisThreat::Four(FourKind::Closed)));
    }

    #[test]
    fn board_is_reverted_after_classification() {
        let mut board = Board::new();
        place(&mut board, 7, 6, Color::Black);
        let before = board.get(7, 7);
        classify_move(&mut board, Move::new(7, 7, Color::Black));
        assert_eq!(board.get(7, 7), before);
    }

    #[test]
    fn white_fork_is_always_legal() {
        let threats: ThreatSet = vec![
            (Axis::Horizontal, AxisThreat::Three),
            (Axis::Vertical, AxisThreat::Three),
        ];
        assert!(is_legal_fork(Color::White, &threats));
    }

    #[test]
    fn double_three_is_illegal_for_black() {
        let threats: ThreatSet = vec![
            (Axis::Horizontal, AxisThreat::Three),
            (Axis::Vertical, AxisThreat::Three),
        ];
        assert!(!is_legal_fork(Color::Black, &threats));
    }

    /// `spec.md` §8 scenario 4, checked directly against `classify_move`
    /// (which always reverts its hypothetical commit) so the fork rule is
    /// also verified independent of `RuleEngine::apply_move`.
    #[test]
    fn scenario_4_is_illegal_without_committing() {
        let mut board = Board::new();
        for &(x, y, color) in &[
            (2, 11, Color::White),
            (3, 10, Color::White),
            (2, 9, Color::White),
            (3, 8, Color::White),
            (8, 13, Color::White),
            (8, 11, Color::Black),
            (8, 10, Color::Black),
            (7, 7, Color::Black),
            (5, 5, Color::Black),
            (8, 5, Color::Black),
        ] {
            place(&mut board, x, y, color);
        }
        let probe = Move::new(8, 8, Color::Black);
        let threats = classify_move(&mut board, probe);
        assert!(!is_legal_fork(Color::Black, &threats));
        assert_eq!(board.get(8, 8), Some(Color::Empty));
    }

    #[test]
    fn scenario_5_is_legal_without_committing() {
        let mut board = Board::new();
        for &(x, y, color) in &[
            (6, 8, Color::Black),
            (8, 8, Color::Black),
            (9, 8, Color::White),
            (7, 7, Color::Black),
            (7, 6, Color::Black),
            (10, 3, Color::White),
            (9, 2, Color::White),
            (8, 1, Color::White),
        ] {
            place(&mut board, x, y, color);
        }
        let probe = Move::new(7, 8, Color::Black);
        let threats = classify_move(&mut board, probe);
        assert!(is_legal_fork(Color::Black, &threats));
        assert_eq!(board.get(7, 8), Some(Color::Empty));
    }

    #[test]
    fn three_by_four_fork_is_legal_for_black() {
        let threats: ThreatSet = vec![
            (Axis::Horizontal, AxisThreat::Three),
            (Axis::Vertical, AxisThreat::Four(FourKind::Closed)),
        ];
        assert!(is_legal_fork(Color::Black, &threats));
    }

    /// A single-line double-four (spec.md §4.5's three-section shape:
    /// `X_XXX_X`, played at the middle gap) must surface as two separate
    /// `Four` threats on the one axis, not a single collapsed threat —
    /// otherwise `is_legal_fork` would see only one `Four` and accept a move
    /// that actually makes two simultaneous fives reachable.
    #[test]
    fn single_line_double_four_is_two_threats_and_illegal_for_black() {
        let mut board = Board::new();
        for &x in &[0, 2, 4, 6] {
            place(&mut board, x, 0, Color::Black);
        }
        let probe = Move::new(3, 0, Color::Black);
        let threats = classify_move(&mut board, probe);

        let fours_on_axis = threats
            .iter()
            .filter(|&&(a, t)| a == Axis::Horizontal && t == AxisThreat::Four(FourKind::Closed))
            .count();
        assert_eq!(fours_on_axis, 2);
        assert!(!is_legal_fork(Color::Black, &threats));
        assert_eq!(board.get(3, 0), Some(Color::Empty));
    }
}
