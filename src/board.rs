use serde::{Deserialize, Serialize};

/// Board edge length. Renju is fixed at 15x15; see `spec.md` Non-goals.
pub const BOARD_SIZE: usize = 15;
pub const CENTER: (usize, usize) = (7, 7);

/// A tri-valued cell/turn tag. `Empty` is the default for uninitialized cells
/// and for `Board::last_move_color` before the first move.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Color {
    Empty,
    Black,
    White,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
            Color::Empty => Color::Empty,
        }
    }

    pub fn is_stone(self) -> bool {
        !matches!(self, Color::Empty)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Empty
    }
}

/// A move to be validated. `color` must be `Black` or `White` — an `Empty`
/// move is a caller error, not a representable board state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Move {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl Move {
    pub fn new(x: i32, y: i32, color: Color) -> Self {
        Move { x, y, color }
    }
}

/// Dense 15x15 grid of cells plus the color of the last accepted move.
///
/// Invariants (see `spec.md` §3): exactly one cell changes per accepted move;
/// no accepted move lands on a non-empty cell; once `last_move_color` is set
/// it alternates on every subsequent accepted move. Mutation happens only
/// through `set`, and only `RuleEngine` is expected to call it after
/// validation — `Board` itself does not re-validate on `set`.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Board {
    cells: [[Color; BOARD_SIZE]; BOARD_SIZE],
    pub last_move_color: Color,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [[Color::Empty; BOARD_SIZE]; BOARD_SIZE],
            last_move_color: Color::Empty,
        }
    }

    pub fn in_bounds(x: i32, y: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&x) && (0..BOARD_SIZE as i32).contains(&y)
    }

    /// Bounds-checked read. Returns `None` outside `[0, 14]^2` — the caller
    /// (`LineScanner`) is expected to treat `None` as "off-board", not panic.
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        Some(self.cells[x as usize][y as usize])
    }

    /// Bounds-checked write. Intended for internal use by `RuleEngine` after
    /// `checkMoveIsCorrect`-equivalent validation has already run; does not
    /// itself enforce occupancy or turn rules.
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> Result<(), ()> {
        if !Self::in_bounds(x, y) {
            return Err(());
        }
        self.cells[x as usize][y as usize] = color;
        Ok(())
    }
}
