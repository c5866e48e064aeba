//! `WinDetector`: the longest same-color run passing through a prospective
//! move's cell, scanning straight runs only (no gap bridging).

use crate::axis::Axis;
use crate::board::{Board, Color};

/// Contiguous same-color run length through `(x, y)` along a single axis,
/// treating `(x, y)` as `color` regardless of what the board actually holds
/// there. Never reads the cell at distance zero, so it's safe to call before
/// the move is committed.
pub fn run_length_along_axis(board: &Board, x: i32, y: i32, axis: Axis, color: Color) -> u32 {
    let (dx, dy) = axis.step();
    1 + count_same(board, x, y, dx, dy, color) + count_same(board, x, y, -dx, -dy, color)
}

fn count_same(board: &Board, x: i32, y: i32, dx: i32, dy: i32, color: Color) -> u32 {
    let mut n = 0u32;
    let mut i = 1i32;
    loop {
        match board.get(x + dx * i, y + dy * i) {
            Some(c) if c == color => {
                n += 1;
                i += 1;
            }
            _ => break,
        }
    }
    n
}

/// Longest same-color run through `move`'s cell across all four axes.
pub fn max_run_through(board: &Board, x: i32, y: i32, color: Color) -> u32 {
    Axis::ALL
        .iter()
        .map(|&axis| run_length_along_axis(board, x, y, axis, color))
        .max()
        .unwrap_or(1)
}
