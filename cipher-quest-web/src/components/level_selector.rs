use crate::game::{GameState, LEVELS, Level, LevelId};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: GameState,
    pub on_select: Callback<LevelId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CardStatus {
    Completed,
    Current,
    Open,
    Locked,
}

impl CardStatus {
    fn of(level: &Level, state: &GameState) -> Self {
        if state.is_completed(level.id) {
            Self::Completed
        } else if !state.is_unlocked(level.id) {
            Self::Locked
        } else if level.id == state.current_level {
            Self::Current
        } else {
            Self::Open
        }
    }

    const fn class(self) -> &'static str {
        match self {
            Self::Completed => "level-card completed",
            Self::Current => "level-card current",
            Self::Open => "level-card open",
            Self::Locked => "level-card locked",
        }
    }

    const fn badge(self) -> &'static str {
        match self {
            Self::Completed => "✓",
            Self::Current => "▶",
            Self::Open => "○",
            Self::Locked => "🔒",
        }
    }
}

#[function_component(LevelSelector)]
pub fn level_selector(p: &Props) -> Html {
    let cards = LEVELS.iter().map(|level| {
        let status = CardStatus::of(level, &p.state);
        let unlocked = status != CardStatus::Locked;
        let onclick = {
            let cb = p.on_select.clone();
            let id = level.id;
            Callback::from(move |_| {
                if unlocked {
                    cb.emit(id);
                }
            })
        };
        let hints = p.state.hints_used(level.id);
        html! {
            <li key={level.id}>
                <button
                    type="button"
                    id={format!("level-{}", level.id)}
                    class={classes!(status.class(), format!("theme-{}", level.theme.slug()))}
                    disabled={!unlocked}
                    aria-disabled={(!unlocked).to_string()}
                    {onclick}
                >
                    <span class="level-badge" aria-hidden="true">{ status.badge() }</span>
                    <span class="level-number">{ format!("Level {}", level.id) }</span>
                    <span class="level-title">{ level.title }</span>
                    <span class="level-cipher">{ level.cipher.to_string() }</span>
                    <span class="level-points">{ format!("{} pts", level.max_score) }</span>
                    if hints > 0 {
                        <span class="level-hints">{ format!("{hints} hint(s) used") }</span>
                    }
                    if status == CardStatus::Completed {
                        <span class="level-done">{ "✓ Completed" }</span>
                    }
                </button>
            </li>
        }
    });

    html! {
        <section id="level-select" class="level-select" aria-labelledby="level-select-title">
            <h2 id="level-select-title">{ "Choose Your Challenge" }</h2>
            <p class="muted">{ "Progress through 10 levels of cryptographic puzzles" }</p>
            <ul class="level-grid">{ for cards }</ul>
            <p class="muted">{ "Complete each level to unlock the next challenge" }</p>
        </section>
    }
}
