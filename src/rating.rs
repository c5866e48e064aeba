//! `RatingAdjuster`: closed-form Elo update applied once a game reaches a
//! terminal outcome. Grounded directly on
//! `examples/original_source/internal/pkg/elo/elo.go`, which is the
//! authoritative source for this formula (K=32, `delta` truncated toward
//! zero) — the teacher crate's own `bin/elo.rs` computes a rating estimate
//! a different way (by simulating games against Stockfish), so this module
//! follows the original Go source instead.

use crate::board::Color;

const K_FACTOR: f64 = 32.0;

/// The outcome of a finished game, as seen by `RatingAdjuster`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    BlackWins,
    WhiteWins,
    Draw,
}

impl Outcome {
    pub fn from_winner(winner: Option<Color>) -> Outcome {
        match winner {
            Some(Color::Black) => Outcome::BlackWins,
            Some(Color::White) => Outcome::WhiteWins,
            _ => Outcome::Draw,
        }
    }

    fn score(self) -> f64 {
        match self {
            Outcome::BlackWins => 1.0,
            Outcome::WhiteWins => 0.0,
            Outcome::Draw => 0.5,
        }
    }
}

/// Adjust `(black_rating, white_rating)` for a game that ended in `outcome`.
/// `delta` truncates toward zero, matching Go's `int(float64)` conversion.
pub fn adjust_ratings(black_rating: i64, white_rating: i64, outcome: Outcome) -> (i64, i64) {
    let expected = 1.0 / (1.0 + 10f64.powf((white_rating - black_rating) as f64 / 400.0));
    let delta = (K_FACTOR * (outcome.score() - expected)).trunc() as i64;
    (black_rating + delta, white_rating - delta)
}
