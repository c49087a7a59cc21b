use crate::app::state::{Feedback, GameAction};
use crate::components::game_complete::GameComplete;
use crate::components::header::Header;
use crate::components::hint_modal::HintModal;
use crate::components::level_selector::LevelSelector;
use crate::game::{CipherKind, GameState, View};
use crate::pages::level::LevelPage;
use crate::pages::not_found::NotFound;
use crate::pages::terminal::TerminalPage;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: GameState,
    pub view: View,
    #[prop_or_default]
    pub feedback: Option<Feedback>,
    pub now_ms: u64,
    #[prop_or_default]
    pub not_found: bool,
    pub on_action: Callback<GameAction>,
}

fn banner(feedback: Option<&Feedback>) -> Html {
    match feedback {
        Some(Feedback::Solved { level, score }) => html! {
            <p id="banner" class="banner success" role="status">
                { format!("Level {level} solved! +{score} points") }
            </p>
        },
        Some(Feedback::Rejected(err)) => html! {
            <p id="banner" class="banner warning" role="alert">{ err.to_string() }</p>
        },
        _ => Html::default(),
    }
}

/// One screen of the game, chosen by the current view.
#[function_component(GameScreen)]
pub fn game_screen(p: &Props) -> Html {
    let hint_open = use_state(|| false);

    let emit = |action: fn() -> GameAction| {
        let cb = p.on_action.clone();
        Callback::from(move |()| cb.emit(action()))
    };
    let on_select = {
        let cb = p.on_action.clone();
        Callback::from(move |id| cb.emit(GameAction::SelectLevel(id)))
    };
    let on_submit = {
        let cb = p.on_action.clone();
        Callback::from(move |answer| cb.emit(GameAction::SubmitAnswer(answer)))
    };
    let on_back = emit(|| GameAction::BackToMenu);
    let on_use_hint = emit(|| GameAction::UseHint);
    let on_restart = {
        let cb = p.on_action.clone();
        let now_ms = p.now_ms;
        Callback::from(move |()| cb.emit(GameAction::Restart { now_ms }))
    };
    let open_hint = {
        let hint_open = hint_open.clone();
        Callback::from(move |()| hint_open.set(true))
    };
    let close_hint = {
        let hint_open = hint_open.clone();
        Callback::from(move |()| hint_open.set(false))
    };

    if p.not_found {
        return html! {
            <main id="main" role="main">
                <NotFound on_go_home={on_back} />
            </main>
        };
    }

    let current = p.state.current().filter(|_| p.view == View::Level);
    let incorrect = matches!(p.feedback, Some(Feedback::Incorrect));

    let body = match (p.view, current) {
        (View::Level, Some(level)) => {
            let hints_used = p.state.hints_used(level.id);
            let page = if level.cipher == CipherKind::MultiPart {
                html! {
                    <TerminalPage
                        key={level.id}
                        {level}
                        {hints_used}
                        {incorrect}
                        on_submit={on_submit.clone()}
                        on_hint={open_hint.clone()}
                        on_back={on_back.clone()}
                    />
                }
            } else {
                html! {
                    <LevelPage
                        key={level.id}
                        {level}
                        {hints_used}
                        {incorrect}
                        on_submit={on_submit.clone()}
                        on_hint={open_hint.clone()}
                        on_back={on_back.clone()}
                    />
                }
            };
            html! {
                <>
                    { page }
                    <HintModal
                        open={*hint_open}
                        {level}
                        {hints_used}
                        {on_use_hint}
                        on_close={close_hint}
                    />
                </>
            }
        }
        (View::Complete, _) => html! {
            <GameComplete state={p.state.clone()} now_ms={p.now_ms} {on_restart} />
        },
        _ => html! {
            <>
                { banner(p.feedback.as_ref()) }
                <LevelSelector state={p.state.clone()} {on_select} />
            </>
        },
    };

    html! {
        <>
            if p.view != View::Complete {
                <Header state={p.state.clone()} now_ms={p.now_ms} />
            }
            <main id="main" role="main">{ body }</main>
        </>
    }
}
