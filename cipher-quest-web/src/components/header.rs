use crate::game::{GameState, LEVEL_COUNT, format_elapsed};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: GameState,
    pub now_ms: u64,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let elapsed = format_elapsed(p.state.start_time, p.now_ms);
    html! {
        <header role="banner" class="game-header">
            <div class="header-content">
                <h1 class="brand">{ "🔐 Cipher Quest" }</h1>
                <div class="header-right">
                    <span class="stat stat-score" aria-label="Score">
                        { format!("Score: {}", p.state.total_score) }
                    </span>
                    <span class="stat stat-time" aria-label="Elapsed time">
                        <time id="elapsed">{ elapsed }</time>
                    </span>
                    <span class="stat stat-level" aria-label="Current level">
                        { format!("Level {}/{LEVEL_COUNT}", p.state.current_level) }
                    </span>
                    <span class="stat stat-done">
                        { format!("{} solved", p.state.completed_levels.len()) }
                    </span>
                </div>
            </div>
        </header>
    }
}
