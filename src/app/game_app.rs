// src/app/game_app.rs

// --- 必要なものをインポート ---
use log::{error, info, warn};
use rand::Rng;

use crate::app::save_store::{SaveDirectory, SaveSummary};
use crate::app::state_getter::{self, BoardSnapshot};
use crate::components::game_state::GameStatus;
use crate::config::SaveConfig;
use crate::error::PersistenceError;
use crate::game::Game;
use crate::logic::moves::Move;

/// The command/query surface an interactive UI drives.
///
/// Owns the current `Game` and the session's save directory. Every command runs
/// to completion before returning; failures come back as `false` / `None` and
/// the cause is logged, so the UI can simply re-prompt.
#[derive(Debug)]
pub struct GameApp {
    game: Game,
    saves: SaveDirectory,
}

impl GameApp {
    /// Starts a session with a freshly dealt game.
    pub fn new(saves: SaveDirectory) -> Self {
        Self::with_game(Game::new(), saves)
    }

    pub fn with_game(game: Game, saves: SaveDirectory) -> Self {
        info!("GameApp: session started ({} moves so far)", game.move_count());
        Self { game, saves }
    }

    /// Opens the save directory from `config` and deals a new game.
    pub fn from_config(config: &SaveConfig) -> Result<Self, PersistenceError> {
        Ok(Self::new(SaveDirectory::open(config)?))
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn saves(&self) -> &SaveDirectory {
        &self.saves
    }

    // --- Commands ---

    /// 今のゲームを捨てて、新しく配り直す。
    pub fn new_game(&mut self) {
        self.game = Game::new();
        info!("GameApp: new game");
    }

    /// 乱数生成器を指定して配り直す (リプレイやテスト用)。
    pub fn new_game_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.game = Game::deal(rng);
        info!("GameApp: new game");
    }

    pub fn draw(&mut self) -> bool {
        self.game.draw();
        true
    }

    pub fn move_column_to_column(&mut self, src: usize, dst: usize) -> bool {
        self.game.move_column_to_column(src, dst)
    }

    pub fn move_waste_to_column(&mut self, dst: usize) -> bool {
        self.game.move_waste_to_column(dst)
    }

    pub fn move_column_to_foundation(&mut self, src: usize) -> bool {
        self.game.move_column_to_foundation(src)
    }

    pub fn move_waste_to_foundation(&mut self) -> bool {
        self.game.move_waste_to_foundation()
    }

    pub fn apply(&mut self, mv: Move) -> bool {
        self.game.apply(mv)
    }

    /// Parses a text command (`d`, `12`, `w3`, `f2`, `wf`) and applies it.
    pub fn execute(&mut self, command: &str) -> bool {
        match command.parse::<Move>() {
            Ok(mv) => self.game.apply(mv),
            Err(e) => {
                warn!("GameApp: ignoring command {:?}: {}", command, e);
                false
            }
        }
    }

    /// Writes the current game under `name`. Returns false (and logs why) on failure.
    pub fn save(&self, name: &str) -> bool {
        match self.saves.save(name, &self.game) {
            Ok(_) => true,
            Err(e) => {
                error!("GameApp: failed to save {:?}: {}", name, e);
                false
            }
        }
    }

    /// Replaces the current game with the save named `name`.
    /// On failure the current game is kept and `None` is returned.
    pub fn load(&mut self, name: &str) -> Option<&Game> {
        match self.saves.load(name) {
            Ok(game) => {
                self.game = game;
                Some(&self.game)
            }
            Err(e) => {
                error!("GameApp: failed to load {:?}: {}", name, e);
                None
            }
        }
    }

    /// Saved games in the session's directory. An unreadable directory lists as empty.
    pub fn list_saves(&self) -> Vec<SaveSummary> {
        self.saves.list().unwrap_or_else(|e| {
            error!("GameApp: failed to list saves: {}", e);
            Vec::new()
        })
    }

    // --- Queries ---

    pub fn snapshot(&self) -> BoardSnapshot {
        state_getter::snapshot(&self.game)
    }

    pub fn snapshot_json(&self) -> Result<String, String> {
        state_getter::snapshot_json(&self.game)
    }

    pub fn available_move_count(&self) -> usize {
        self.game.count_available_moves()
    }

    pub fn is_won(&self) -> bool {
        self.game.is_won()
    }

    pub fn is_stalemated(&self) -> bool {
        self.game.is_stalemated()
    }

    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    /// 勝ったか詰んだか。UI が「もう一回？」を出すタイミング。
    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    pub fn move_count(&self) -> u32 {
        self.game.move_count()
    }
}
