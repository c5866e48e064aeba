//! The four straight-line directions a Renju win or threat can run along.
//!
//! Strides are named the way the original Go source named its direction
//! offsets (`verticalOffset`, `horizontalOffset`, `diagonalOffsetL/R`) but
//! expressed as `(dx, dy)` pairs rather than flat-array index deltas, since
//! this crate's `Board` is indexed by `(x, y)` rather than a single
//! `x*BoardSize+y` slot.

/// One of the four axes a run of stones can lie along. Each axis has a
/// single "positive" direction; `LineScanner` walks both that direction and
/// its negation from the origin.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalUpRight,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDownRight,
        Axis::DiagonalUpRight,
    ];

    /// The `(dx, dy)` step for the axis's positive direction. The negative
    /// direction is always the negation of this step.
    pub fn step(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
            Axis::DiagonalDownRight => (1, 1),
            Axis::DiagonalUpRight => (1, -1),
        }
    }
}
