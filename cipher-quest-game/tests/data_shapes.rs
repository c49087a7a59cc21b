use std::fmt::Write as _;
use std::hash::Hasher;

use cipher_quest_game::{GameState, LEVELS, generate_challenge};
use twox_hash::XxHash64;

const SNAPSHOT_HASH: u64 = 0xed4e_3145_1d16_a9b9;

fn level_table_snapshot() -> String {
    let mut canonical = String::new();
    for level in &LEVELS {
        let challenge = generate_challenge(level);
        writeln!(
            canonical,
            "{}|{}|{}|{}|{}|{}|{}|{}|{}",
            level.id,
            level.title,
            level.theme.slug(),
            level.cipher,
            level.solution,
            level.max_score,
            level.score_floor,
            level.hint_penalty,
            challenge.encoded
        )
        .unwrap();
        for hint in level.hints {
            writeln!(canonical, "  {hint}").unwrap();
        }
    }
    canonical
}

#[test]
fn level_table_snapshot_stable() {
    let canonical = level_table_snapshot();
    let digest = snapshot_hash(canonical.as_bytes());
    assert_eq!(
        digest, SNAPSHOT_HASH,
        "level table snapshot changed\n{canonical}"
    );
}

#[test]
fn saved_state_from_browser_loads() {
    let saved = r#"{"currentLevel":4,"completedLevels":[1,2,3],"hints":{"1":1,"3":2},"startTime":1718000000000,"totalScore":390}"#;
    let state: GameState = serde_json::from_str(saved).unwrap();
    assert_eq!(state.current_level, 4);
    assert_eq!(state.hints_used(3), 2);
    assert_eq!(state.hints_used(2), 0);
    assert!(state.is_unlocked(4));
    assert!(!state.is_unlocked(5));

    let written = serde_json::to_string(&state).unwrap();
    assert_eq!(written, saved);
}

#[test]
fn missing_optional_fields_default() {
    let state: GameState = serde_json::from_str(r#"{"currentLevel":2}"#).unwrap();
    assert!(state.completed_levels.is_empty());
    assert_eq!(state.total_score, 0);
    assert_eq!(state.start_time, 0);
}

fn snapshot_hash(bytes: &[u8]) -> u64 {
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(bytes);
    hasher.finish()
}
