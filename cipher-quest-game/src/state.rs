//! The single persisted game record and its transitions.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::GameError;
use crate::levels::{FIRST_LEVEL, LEVEL_COUNT, Level, LevelId, is_valid_level, level};

/// Top-level screen the player is looking at. Not persisted; a fresh load
/// always opens on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Menu,
    Level,
    Complete,
}

/// Storage shape: `{currentLevel, completedLevels, hints, startTime, totalScore}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub current_level: LevelId,
    #[serde(default)]
    pub completed_levels: BTreeSet<LevelId>,
    #[serde(default)]
    pub hints: BTreeMap<LevelId, u32>,
    #[serde(default)]
    pub start_time: u64,
    #[serde(default)]
    pub total_score: u32,
}

impl GameState {
    #[must_use]
    pub const fn new(now_ms: u64) -> Self {
        Self {
            current_level: FIRST_LEVEL,
            completed_levels: BTreeSet::new(),
            hints: BTreeMap::new(),
            start_time: now_ms,
            total_score: 0,
        }
    }

    /// Drop out-of-range level ids, cap hint counts at what each level
    /// offers and pull the current level back into range.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.completed_levels.retain(|id| is_valid_level(*id));
        self.hints.retain(|id, used| {
            level(*id).is_some_and(|found| {
                *used = (*used).min(u32::try_from(found.hints.len()).unwrap_or(u32::MAX));
                true
            })
        });
        self.current_level = self.current_level.clamp(FIRST_LEVEL, LEVEL_COUNT);
        self
    }

    /// Level 1 is always open; every other level opens once its predecessor
    /// is completed.
    #[must_use]
    pub fn is_unlocked(&self, id: LevelId) -> bool {
        id == FIRST_LEVEL
            || (is_valid_level(id) && self.completed_levels.contains(&(id - 1)))
    }

    #[must_use]
    pub fn is_completed(&self, id: LevelId) -> bool {
        self.completed_levels.contains(&id)
    }

    #[must_use]
    pub fn all_completed(&self) -> bool {
        self.completed_levels.len() >= usize::from(LEVEL_COUNT)
    }

    #[must_use]
    pub fn hints_used(&self, id: LevelId) -> u32 {
        self.hints.get(&id).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn current(&self) -> Option<&'static Level> {
        level(self.current_level)
    }

    /// Make `id` the current level.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownLevel`] or [`GameError::LevelLocked`]; the
    /// state is untouched in either case.
    pub fn select_level(&mut self, id: LevelId) -> Result<&'static Level, GameError> {
        let target = level(id).ok_or(GameError::UnknownLevel(id))?;
        if !self.is_unlocked(id) {
            return Err(GameError::LevelLocked(id));
        }
        self.current_level = id;
        Ok(target)
    }

    /// Reveal the next hint of the current level, counting it against the
    /// score. Returns `None` once every hint has been shown.
    pub fn use_hint(&mut self) -> Option<&'static str> {
        let current = self.current()?;
        let used = self.hints_used(current.id);
        let hint = current.hint(usize::try_from(used).ok()?)?;
        self.hints.insert(current.id, used + 1);
        Some(hint)
    }

    /// Hints revealed so far on the current level, oldest first.
    #[must_use]
    pub fn revealed_hints(&self) -> &'static [&'static str] {
        let Some(current) = self.current() else {
            return &[];
        };
        let used = usize::try_from(self.hints_used(current.id)).unwrap_or(usize::MAX);
        &current.hints[..used.min(current.hints.len())]
    }

    /// Score the current level would award right now.
    #[must_use]
    pub fn score_for_current(&self) -> u32 {
        self.current()
            .map_or(0, |current| current.score_with_hints(self.hints_used(current.id)))
    }

    /// Record the current level as solved and move on. Returns the view to
    /// show next.
    pub fn complete_current(&mut self, score: u32) -> View {
        self.completed_levels.insert(self.current_level);
        self.current_level = self.current_level.saturating_add(1).min(LEVEL_COUNT);
        self.total_score = self.total_score.saturating_add(score);
        if self.all_completed() {
            View::Complete
        } else {
            View::Menu
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_completed(ids: &[LevelId]) -> GameState {
        let mut state = GameState::new(0);
        state.completed_levels.extend(ids.iter().copied());
        state
    }

    #[test]
    fn fresh_state_starts_at_level_one() {
        let state = GameState::new(1_700_000_000_000);
        assert_eq!(state.current_level, 1);
        assert!(state.completed_levels.is_empty());
        assert_eq!(state.total_score, 0);
        assert_eq!(state.start_time, 1_700_000_000_000);
    }

    #[test]
    fn unlock_follows_predecessor() {
        let mut state = with_completed(&[1, 2]);
        assert!(state.select_level(3).is_ok());
        assert_eq!(state.current_level, 3);
        assert_eq!(state.select_level(4), Err(GameError::LevelLocked(4)));
        assert_eq!(state.select_level(11), Err(GameError::UnknownLevel(11)));
        assert_eq!(state.select_level(0), Err(GameError::UnknownLevel(0)));
        assert_eq!(state.current_level, 3);
    }

    #[test]
    fn hints_stop_at_available_count() {
        let mut state = GameState::new(0);
        assert_eq!(
            state.use_hint(),
            Some("Try shifting each letter by a fixed number of positions in the alphabet")
        );
        assert!(state.use_hint().is_some());
        assert_eq!(state.use_hint(), Some("The shift value is 13 (ROT13)"));
        assert_eq!(state.use_hint(), None);
        assert_eq!(state.hints_used(1), 3);
        assert_eq!(state.revealed_hints().len(), 3);
        assert_eq!(state.score_for_current(), 50);
    }

    #[test]
    fn completion_advances_and_accumulates() {
        let mut state = GameState::new(0);
        state.use_hint();
        state.use_hint();
        let score = state.score_for_current();
        assert_eq!(score, 60);
        assert_eq!(state.complete_current(score), View::Menu);
        assert_eq!(state.current_level, 2);
        assert_eq!(state.total_score, 60);
        assert!(state.is_unlocked(2));
    }

    #[test]
    fn replaying_a_level_keeps_set_and_adds_score() {
        let mut state = with_completed(&[1, 2, 3]);
        state.select_level(2).unwrap();
        state.complete_current(150);
        assert_eq!(state.completed_levels.len(), 3);
        assert_eq!(state.current_level, 3);
        assert_eq!(state.total_score, 150);
    }

    #[test]
    fn tenth_completion_finishes_game() {
        let mut state = with_completed(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        state.select_level(10).unwrap();
        assert_eq!(state.complete_current(1000), View::Complete);
        assert_eq!(state.current_level, 10);
        assert!(state.all_completed());
    }

    #[test]
    fn sanitize_drops_out_of_range_ids() {
        let mut state = with_completed(&[0, 3, 42]);
        state.hints.insert(99, 4);
        state.hints.insert(3, 1);
        state.current_level = 77;
        let clean = state.sanitized();
        assert_eq!(clean.completed_levels.into_iter().collect::<Vec<_>>(), [3]);
        assert_eq!(clean.hints.len(), 1);
        assert_eq!(clean.current_level, 10);
    }

    #[test]
    fn sanitize_caps_hint_counts() {
        let mut state = GameState::new(0);
        state.hints.insert(1, u32::MAX);
        state.hints.insert(2, 1);
        let clean = state.sanitized();
        assert_eq!(clean.hints_used(1), 3);
        assert_eq!(clean.hints_used(2), 1);
        assert_eq!(clean.revealed_hints().len(), 3);
    }

    #[test]
    fn serializes_in_storage_shape() {
        let mut state = with_completed(&[2, 1]);
        state.hints.insert(1, 2);
        state.total_score = 180;
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "currentLevel": 1,
                "completedLevels": [1, 2],
                "hints": {"1": 2},
                "startTime": 0,
                "totalScore": 180
            })
        );
        let back: GameState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}
