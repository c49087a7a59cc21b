use crate::game::{GameState, LEVEL_COUNT, format_elapsed, grade_for};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: GameState,
    pub now_ms: u64,
    pub on_restart: Callback<()>,
}

#[function_component(GameComplete)]
pub fn game_complete(p: &Props) -> Html {
    let grade = grade_for(p.state.total_score);
    let hints = p.state.hints.values().fold(0u32, |acc, used| acc.saturating_add(*used));
    let restart = {
        let cb = p.on_restart.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <section id="game-complete" class="game-complete" aria-labelledby="complete-title">
            <h1 id="complete-title">{ "🎉 Congratulations! 🎉" }</h1>
            <p>{ format!("You've successfully completed all {LEVEL_COUNT} cipher challenges!") }</p>
            <div class="complete-stats">
                <div class="complete-stat">
                    <span class="label">{ "Final Score" }</span>
                    <span id="final-score" class="value">{ p.state.total_score.to_string() }</span>
                </div>
                <div class="complete-stat">
                    <span class="label">{ "Grade" }</span>
                    <span id="final-grade" class={classes!("value", format!("grade-{}", grade.label().to_lowercase()))}>
                        { grade.label() }
                    </span>
                    <span class="remark">{ grade.remark() }</span>
                </div>
                <div class="complete-stat">
                    <span class="label">{ "Time" }</span>
                    <span id="final-time" class="value">{ format_elapsed(p.state.start_time, p.now_ms) }</span>
                </div>
                <div class="complete-stat">
                    <span class="label">{ "Hints Used" }</span>
                    <span class="value">{ hints.to_string() }</span>
                </div>
            </div>
            <p class="muted">{ "Completed all cipher challenges and escaped the digital labyrinth" }</p>
            <button id="restart-btn" type="button" class="btn-primary" onclick={restart}>
                { "Play Again" }
            </button>
            <p class="muted">
                { "Thank you for playing Cipher Quest! Share your score with friends and challenge them to beat it." }
            </p>
        </section>
    }
}
