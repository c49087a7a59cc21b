//! `localStorage` persistence for the game state.

use crate::dom;
use crate::game::{GameState, GameStorage};

/// Web-specific game storage using localStorage. Each save is one JSON
/// document stored under its save name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebGameStorage;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GameStorage for WebGameStorage {
    type Error = WebStorageError;

    fn save_game(&self, save_name: &str, game_state: &GameState) -> Result<(), Self::Error> {
        let storage = dom::local_storage().ok_or(WebStorageError::Unavailable)?;
        let json = serde_json::to_string(game_state)?;
        storage
            .set_item(save_name, &json)
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }

    fn load_game(&self, save_name: &str) -> Result<Option<GameState>, Self::Error> {
        let Some(storage) = dom::local_storage() else {
            return Ok(None);
        };
        let raw = storage
            .get_item(save_name)
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))?;
        raw.map(|json| serde_json::from_str(&json))
            .transpose()
            .map_err(WebStorageError::from)
    }

    fn delete_save(&self, save_name: &str) -> Result<(), Self::Error> {
        let Some(storage) = dom::local_storage() else {
            return Ok(());
        };
        storage
            .remove_item(save_name)
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }
}
