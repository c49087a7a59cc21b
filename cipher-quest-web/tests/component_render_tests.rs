use cipher_quest_web::components::game_complete::GameComplete;
use cipher_quest_web::components::header::Header;
use cipher_quest_web::components::hint_modal::HintModal;
use cipher_quest_web::components::level_selector::LevelSelector;
use cipher_quest_web::components::modal::Modal;
use cipher_quest_web::game::{GameState, LEVELS, level};
use futures::executor::block_on;
use yew::html::ChildrenRenderer;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn finished_state() -> GameState {
    let mut state = GameState::new(0);
    state.completed_levels = LEVELS.iter().map(|l| l.id).collect();
    state.current_level = 10;
    state.total_score = 3700;
    state
}

#[test]
fn header_shows_score_level_and_clock() {
    let mut state = GameState::new(1_000);
    state.total_score = 250;
    state.current_level = 3;
    state.completed_levels.extend([1, 2]);
    let props = cipher_quest_web::components::header::Props {
        state,
        now_ms: 66_000,
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("Score: 250"));
    assert!(html.contains("Level 3/10"));
    assert!(html.contains("01:05"));
    assert!(html.contains("2 solved"));
}

#[test]
fn level_selector_locks_unreached_levels() {
    let mut state = GameState::new(0);
    state.completed_levels.insert(1);
    state.current_level = 2;
    let props = cipher_quest_web::components::level_selector::Props {
        state,
        on_select: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LevelSelector>::with_props(props).render());
    for id in 1..=10 {
        assert!(html.contains(&format!("id=\"level-{id}\"")), "card {id} missing");
    }
    assert!(html.contains("level-card completed"));
    assert!(html.contains("level-card current"));
    assert!(html.contains("level-card locked"));
    assert_eq!(html.matches("level-card locked").count(), 8);
    assert!(html.contains("Simple Cryptology"));
    assert!(html.contains("The Final Firewall"));
}

#[test]
fn modal_renders_only_when_open() {
    let props = |open| cipher_quest_web::components::modal::Props {
        open,
        title: AttrValue::from("Title"),
        description: Some(AttrValue::from("Desc")),
        on_close: Callback::noop(),
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(props(true)).render());
    assert!(html.contains("modal__header"));
    assert!(html.contains("Desc"));

    let html = block_on(LocalServerRenderer::<Modal>::with_props(props(false)).render());
    assert!(!html.contains("modal-backdrop"));
}

#[test]
fn hint_modal_lists_used_hints_and_offers_next() {
    let first = level(1).expect("level 1");
    let props = cipher_quest_web::components::hint_modal::Props {
        open: true,
        level: first,
        hints_used: 1,
        on_use_hint: Callback::noop(),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HintModal>::with_props(props).render());
    assert!(html.contains("modal__description"));
    assert!(html.contains("Level 1: Simple Cryptology"));
    assert!(html.contains("Hint 1:"));
    assert!(!html.contains("Hint 2:"));
    assert!(html.contains("use-hint-btn"));
    assert!(html.contains(&format!("-{} points", first.hint_penalty)));
}

#[test]
fn hint_modal_runs_out_of_hints() {
    let first = level(1).expect("level 1");
    let used = u32::try_from(first.hints.len()).expect("few hints");
    let props = cipher_quest_web::components::hint_modal::Props {
        open: true,
        level: first,
        hints_used: used,
        on_use_hint: Callback::noop(),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HintModal>::with_props(props).render());
    assert!(!html.contains("use-hint-btn"));
    assert!(html.contains("No more hints available"));
}

#[test]
fn game_complete_shows_grade_and_time() {
    let props = cipher_quest_web::components::game_complete::Props {
        state: finished_state(),
        now_ms: 125_000,
        on_restart: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<GameComplete>::with_props(props).render());
    assert!(html.contains("3700"));
    assert!(html.contains("grade-s"));
    assert!(html.contains("Perfect!"));
    assert!(html.contains("02:05"));
    assert!(html.contains("restart-btn"));
}

#[test]
fn game_complete_survives_huge_hint_counts() {
    let mut state = finished_state();
    state.hints.insert(1, u32::MAX);
    state.hints.insert(2, 1);
    let props = cipher_quest_web::components::game_complete::Props {
        state,
        now_ms: 0,
        on_restart: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<GameComplete>::with_props(props).render());
    assert!(html.contains(&u32::MAX.to_string()));
}
