//! Cipher Quest Game Engine
//!
//! Platform-agnostic core for the Cipher Quest puzzle game: the cipher
//! transforms, the ten-level table, challenge generation, answer checking
//! and the persisted game state. Nothing here touches a browser.

pub mod challenge;
pub mod ciphers;
pub mod error;
pub mod levels;
pub mod score;
pub mod state;
pub mod storage;
pub mod terminal;

// Re-export commonly used types
pub use challenge::{
    ChallengeExtra, ChallengeKey, CipherChallenge, DecoderSetting, Layer, check_answer,
    generate_challenge, normalize_answer, preview,
};
pub use error::GameError;
pub use levels::{
    CipherKind, FIRST_LEVEL, LEVEL_COUNT, LEVELS, Level, LevelId, Theme, is_valid_level, level,
};
pub use score::{Grade, format_elapsed, grade_for};
pub use state::{GameState, View};
pub use storage::MemoryStorage;
pub use terminal::{SecurityTerminal, TerminalEvent};

/// Save slot the game state lives under.
pub const STORAGE_KEY: &str = "cipher-game-state";

/// Trait for abstracting save/load operations
/// Platform-specific implementations should provide this
pub trait GameStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Save game state
    ///
    /// # Errors
    ///
    /// Returns an error if the game state cannot be saved.
    fn save_game(&self, save_name: &str, game_state: &GameState) -> Result<(), Self::Error>;

    /// Load game state
    ///
    /// # Errors
    ///
    /// Returns an error if the stored game state cannot be read or parsed.
    fn load_game(&self, save_name: &str) -> Result<Option<GameState>, Self::Error>;

    /// Delete saved game
    ///
    /// # Errors
    ///
    /// Returns an error if the save cannot be deleted.
    fn delete_save(&self, save_name: &str) -> Result<(), Self::Error>;
}

/// Owns the game state and the current view, and writes the state back to
/// storage after every change.
#[derive(Debug, Clone)]
pub struct GameEngine<S>
where
    S: GameStorage,
{
    storage: S,
    state: GameState,
    view: View,
}

impl<S> GameEngine<S>
where
    S: GameStorage,
{
    /// Resume the saved game, or start a new one at `now_ms` when there is
    /// no usable save.
    pub fn new(storage: S, now_ms: u64) -> Self {
        let state = match storage.load_game(STORAGE_KEY) {
            Ok(Some(saved)) => {
                let mut state = saved.sanitized();
                if state.start_time == 0 {
                    state.start_time = now_ms;
                }
                state
            }
            Ok(None) => GameState::new(now_ms),
            Err(err) => {
                log::warn!("discarding unreadable save: {err}");
                GameState::new(now_ms)
            }
        };
        Self {
            storage,
            state,
            view: View::Menu,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn current_level(&self) -> Option<&'static Level> {
        self.state.current()
    }

    #[must_use]
    pub fn challenge(&self) -> Option<CipherChallenge> {
        self.current_level().map(generate_challenge)
    }

    #[must_use]
    pub fn elapsed(&self, now_ms: u64) -> String {
        format_elapsed(self.state.start_time, now_ms)
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save_game(STORAGE_KEY, &self.state) {
            log::warn!("failed to save game state: {err}");
        }
    }

    /// Open a level.
    ///
    /// # Errors
    ///
    /// Returns an error when the level is unknown or still locked; nothing
    /// changes in that case.
    pub fn select_level(&mut self, id: LevelId) -> Result<&'static Level, GameError> {
        let opened = self.state.select_level(id)?;
        log::debug!("entering level {id}: {}", opened.title);
        self.view = View::Level;
        self.persist();
        Ok(opened)
    }

    pub fn back_to_menu(&mut self) {
        self.view = View::Menu;
    }

    /// Reveal the next hint for the level being played.
    pub fn use_hint(&mut self) -> Option<&'static str> {
        if self.view != View::Level {
            return None;
        }
        let hint = self.state.use_hint()?;
        log::debug!(
            "hint {} used on level {}",
            self.state.hints_used(self.state.current_level),
            self.state.current_level
        );
        self.persist();
        Some(hint)
    }

    /// Finish the level being played with an externally computed score.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotPlaying`] unless a level is open.
    pub fn complete_level(&mut self, score: u32) -> Result<View, GameError> {
        if self.view != View::Level {
            return Err(GameError::NotPlaying);
        }
        let finished = self.state.current_level;
        self.view = self.state.complete_current(score);
        log::debug!(
            "level {finished} complete for {score} points, total {}",
            self.state.total_score
        );
        self.persist();
        Ok(self.view)
    }

    /// Check an answer for the level being played. A correct answer completes
    /// the level and returns the points awarded; a wrong one changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotPlaying`] unless a level is open.
    pub fn submit_answer(&mut self, input: &str) -> Result<Option<u32>, GameError> {
        if self.view != View::Level {
            return Err(GameError::NotPlaying);
        }
        let current = self.current_level().ok_or(GameError::NotPlaying)?;
        if !check_answer(current, input) {
            return Ok(None);
        }
        let score = self.state.score_for_current();
        self.complete_level(score)?;
        Ok(Some(score))
    }

    /// Wipe the save and start over from level 1.
    pub fn restart(&mut self, now_ms: u64) {
        if let Err(err) = self.storage.delete_save(STORAGE_KEY) {
            log::warn!("failed to clear saved game: {err}");
        }
        self.state = GameState::new(now_ms);
        self.view = View::Menu;
        log::debug!("game restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_starts_fresh_without_save() {
        let engine = GameEngine::new(MemoryStorage::new(), 42);
        assert_eq!(engine.view(), View::Menu);
        assert_eq!(engine.state(), &GameState::new(42));
    }

    #[test]
    fn engine_falls_back_on_corrupt_save() {
        let storage = MemoryStorage::new();
        storage.insert_raw(STORAGE_KEY, "{\"currentLevel\": \"one\"");
        let engine = GameEngine::new(storage, 7);
        assert_eq!(engine.state(), &GameState::new(7));
    }

    #[test]
    fn engine_restarts_clock_when_save_has_no_start() {
        let storage = MemoryStorage::new();
        storage.insert_raw(STORAGE_KEY, r#"{"currentLevel":2,"completedLevels":[1]}"#);
        let engine = GameEngine::new(storage, 1_700_000_000_000);
        assert_eq!(engine.state().start_time, 1_700_000_000_000);
        assert_eq!(engine.state().current_level, 2);
        assert_eq!(engine.elapsed(1_700_000_065_000), "01:05");
    }

    #[test]
    fn engine_persists_every_mutation() {
        let storage = MemoryStorage::new();
        let mut engine = GameEngine::new(storage.clone(), 0);
        engine.select_level(1).unwrap();
        engine.use_hint().unwrap();

        let saved = storage.load_game(STORAGE_KEY).unwrap().unwrap();
        assert_eq!(saved.hints_used(1), 1);

        assert_eq!(engine.submit_answer("hello world"), Ok(Some(80)));
        let saved = storage.load_game(STORAGE_KEY).unwrap().unwrap();
        assert_eq!(saved.total_score, 80);
        assert_eq!(saved.current_level, 2);
    }

    #[test]
    fn engine_ignores_actions_outside_a_level() {
        let mut engine = GameEngine::new(MemoryStorage::new(), 0);
        assert_eq!(engine.use_hint(), None);
        assert_eq!(engine.submit_answer("hello world"), Err(GameError::NotPlaying));
        assert_eq!(engine.complete_level(10), Err(GameError::NotPlaying));
        assert_eq!(engine.select_level(2), Err(GameError::LevelLocked(2)));
        assert_eq!(engine.view(), View::Menu);
    }

    #[test]
    fn wrong_answer_keeps_playing() {
        let mut engine = GameEngine::new(MemoryStorage::new(), 0);
        engine.select_level(1).unwrap();
        assert_eq!(engine.submit_answer("URYYB JBEYQ"), Ok(None));
        assert_eq!(engine.view(), View::Level);
        assert!(engine.state().completed_levels.is_empty());
    }

    #[test]
    fn restart_clears_storage() {
        let storage = MemoryStorage::new();
        let mut engine = GameEngine::new(storage.clone(), 0);
        engine.select_level(1).unwrap();
        engine.submit_answer("HELLO WORLD").unwrap();
        engine.restart(9_000);

        assert!(storage.raw(STORAGE_KEY).is_none());
        assert_eq!(engine.state(), &GameState::new(9_000));
        assert_eq!(engine.view(), View::Menu);
    }
}
