//! `GameRegistry`: an owned, per-game-serialized mapping from game id to
//! game state, replacing the original Go server's single global registry.
//!
//! Grounded in `examples/original_source/model/game.go` (`model.Game` embeds
//! a `sync.Mutex` guarding that single game's state) and
//! `examples/original_source/internal/apiserver/rpc_make_move.go` (a
//! package-level `var (mu sync.RWMutex; games map[int64]*model.Game)`).
//! The two-level lock mirrors that split exactly: the outer `RwLock` guards
//! only membership in the map (looking a game up, inserting a new one), the
//! inner `Mutex` serializes moves within one game. Two different games can
//! have moves applied concurrently; the same game never can.

use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use crate::board::{Board, Color, Move};
use crate::error::MoveResult;
use crate::engine;

pub type GameId = u64;

/// One game's mutable state: its board plus whatever rating bookkeeping the
/// lobby wants to keep alongside it. The registry only touches `board`;
/// everything else is caller-owned scratch space so this stays a thin
/// serialization layer rather than a model of the whole lobby.
pub struct GameSession {
    pub board: Board,
}

impl GameSession {
    pub fn new() -> Self {
        GameSession {
            board: engine::new_game(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide map of active games. Construct one instance per process
/// (or per test); there is nothing singleton about it.
#[derive(Default)]
pub struct GameRegistry {
    games: RwLock<HashMap<GameId, Mutex<GameSession>>>,
}

impl GameRegistry {
    pub fn new() -> Self {
        GameRegistry {
            games: RwLock::new(HashMap::new()),
        }
    }

    /// Insert a fresh game under `id`, replacing any existing entry.
    pub fn create_game(&self, id: GameId) {
        let mut games = self.games.write().expect("game registry lock poisoned");
        games.insert(id, Mutex::new(GameSession::new()));
    }

    pub fn remove_game(&self, id: GameId) {
        let mut games = self.games.write().expect("game registry lock poisoned");
        games.remove(&id);
    }

    /// Validate and apply `mv` against game `id`'s board under that game's
    /// own critical section. Returns `None` if no game is registered under
    /// `id` — a lookup failure, not a rule rejection.
    pub fn apply_move(&self, id: GameId, x: i32, y: i32, color: Color) -> Option<MoveResult> {
        let games = self.games.read().expect("game registry lock poisoned");
        let session_lock = games.get(&id)?;
        let mut session = session_lock.lock().expect("game session lock poisoned");
        Some(engine::apply_move(&mut session.board, Move::new(x, y, color)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoveOutcome;

    #[test]
    fn unknown_game_id_returns_none() {
        let registry = GameRegistry::new();
        assert!(registry.apply_move(1, 7, 7, Color::Black).is_none());
    }

    #[test]
    fn created_game_accepts_its_opening_move() {
        let registry = GameRegistry::new();
        registry.create_game(1);
        let result = registry.apply_move(1, 7, 7, Color::Black);
        assert_eq!(result, Some(Ok(MoveOutcome::Ongoing)));
    }

    #[test]
    fn two_games_do_not_share_state() {
        let registry = GameRegistry::new();
        registry.create_game(1);
        registry.create_game(2);
        registry.apply_move(1, 7, 7, Color::Black);
        // game 2 still requires black to open at the center; any other
        // first move there must still be rejected independent of game 1.
        let result = registry.apply_move(2, 0, 0, Color::Black);
        assert!(result.unwrap().is_err());
    }
}
