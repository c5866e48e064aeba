// =============================================================================
// Replay driver
//
// Plays the concrete scenarios from spec.md §8 through RuleEngine and prints
// each move's verdict, the same way the teacher crate's bin/elo.rs printed a
// game-by-game report — except there is no AI here to drive the moves, the
// scenarios are scripted move lists taken straight from the specification.
// =============================================================================

use renju_engine::board::{Board, Color, Move};
use renju_engine::engine;
use renju_engine::error::MoveOutcome;
use renju_engine::rating::{adjust_ratings, Outcome};

fn play(label: &str, moves: &[(i32, i32, Color)]) {
    println!("== {label} ==");
    let mut board = Board::new();
    for &(x, y, color) in moves {
        let mv = Move::new(x, y, color);
        match engine::apply_move(&mut board, mv) {
            Ok(MoveOutcome::Ongoing) => println!("  {mv:?} -> ongoing"),
            Ok(MoveOutcome::Winner(winner)) => {
                println!("  {mv:?} -> accepted, winner={winner:?}")
            }
            Err(err) => println!("  {mv:?} -> rejected: {err}"),
        }
    }
}

fn main() {
    env_logger::init();

    play(
        "scenario 1: black horizontal five",
        &[
            (7, 7, Color::Black),
            (8, 8, Color::White),
            (0, 0, Color::Black),
            (1, 0, Color::White),
            (0, 1, Color::Black),
            (2, 0, Color::White),
            (0, 2, Color::Black),
            (3, 0, Color::White),
            (0, 3, Color::Black),
            (4, 0, Color::White),
            (0, 4, Color::Black),
        ],
    );

    play(
        "scenario 2: white vertical five",
        &[
            (7, 7, Color::Black),
            (8, 8, Color::White),
            (0, 0, Color::Black),
            (1, 0, Color::White),
            (0, 1, Color::Black),
            (2, 0, Color::White),
            (0, 2, Color::Black),
            (3, 0, Color::White),
            (0, 3, Color::Black),
            (4, 0, Color::White),
            (0, 5, Color::Black),
            (5, 0, Color::White),
        ],
    );

    play(
        "scenario 3: overline rejection",
        &[
            (7, 7, Color::Black),
            (4, 4, Color::White),
            (7, 6, Color::Black),
            (4, 3, Color::White),
            (7, 5, Color::Black),
            (1, 1, Color::White),
            (7, 9, Color::Black),
            (1, 2, Color::White),
            (7, 10, Color::Black),
            (1, 3, Color::White),
            (7, 8, Color::Black),
        ],
    );

    println!("== scenario 6: elo adjustment ==");
    let (black, white) = adjust_ratings(1500, 1500, Outcome::BlackWins);
    println!("  black wins from 1500/1500 -> black={black}, white={white}");
    let (black, white) = adjust_ratings(1500, 1500, Outcome::Draw);
    println!("  draw from 1500/1500 -> black={black}, white={white}");
}
