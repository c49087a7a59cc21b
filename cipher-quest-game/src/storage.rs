//! In-process [`GameStorage`] used by the tester and by tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::{GameState, GameStorage};

/// Keeps saves as JSON text, the same shape the browser writes, so a raw
/// blob can be planted to exercise the fallback path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    saves: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_raw(&self, save_name: &str, raw: &str) {
        self.saves
            .borrow_mut()
            .insert(save_name.to_string(), raw.to_string());
    }

    #[must_use]
    pub fn raw(&self, save_name: &str) -> Option<String> {
        self.saves.borrow().get(save_name).cloned()
    }
}

impl GameStorage for MemoryStorage {
    type Error = serde_json::Error;

    fn save_game(&self, save_name: &str, game_state: &GameState) -> Result<(), Self::Error> {
        let json = serde_json::to_string(game_state)?;
        self.saves.borrow_mut().insert(save_name.to_string(), json);
        Ok(())
    }

    fn load_game(&self, save_name: &str) -> Result<Option<GameState>, Self::Error> {
        self.saves
            .borrow()
            .get(save_name)
            .map(|raw| serde_json::from_str(raw))
            .transpose()
    }

    fn delete_save(&self, save_name: &str) -> Result<(), Self::Error> {
        self.saves.borrow_mut().remove(save_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_saves() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        storage.save_game("slot", &GameState::new(5)).unwrap();
        let loaded = handle.load_game("slot").unwrap().expect("save exists");
        assert_eq!(loaded.start_time, 5);
        handle.delete_save("slot").unwrap();
        assert!(storage.load_game("slot").unwrap().is_none());
    }

    #[test]
    fn malformed_blob_is_an_error() {
        let storage = MemoryStorage::new();
        storage.insert_raw("slot", "{not json");
        assert!(storage.load_game("slot").is_err());
    }
}
