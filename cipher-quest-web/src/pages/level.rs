use crate::game::challenge::FIREWALL_LAYERS;
use crate::game::{
    ChallengeExtra, CipherChallenge, DecoderSetting, Level, generate_challenge, preview,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub level: &'static Level,
    pub hints_used: u32,
    #[prop_or_default]
    pub incorrect: bool,
    pub on_submit: Callback<String>,
    pub on_hint: Callback<()>,
    pub on_back: Callback<()>,
}

const MAX_SHIFT: i32 = 25;

fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

fn decoder_controls(setting: &UseStateHandle<DecoderSetting>) -> Html {
    let set = |next: DecoderSetting| {
        let setting = setting.clone();
        Callback::from(move |_: MouseEvent| setting.set(next.clone()))
    };
    match &**setting {
        DecoderSetting::Shift(shift) => {
            let oninput = {
                let setting = setting.clone();
                Callback::from(move |e: InputEvent| {
                    if let Ok(value) = input_value(&e).parse::<i32>() {
                        setting.set(DecoderSetting::Shift(value.clamp(0, MAX_SHIFT)));
                    }
                })
            };
            html! {
                <div class="decoder decoder-shift">
                    <label for="shift-dial">{ format!("Shift: {shift}") }</label>
                    <input id="shift-dial" type="range" min="0" max="25" value={shift.to_string()} {oninput} />
                    <div class="decoder-buttons">
                        <button type="button" onclick={set(DecoderSetting::Shift((shift - 1).max(0)))}>{ "← Shift Left" }</button>
                        <button type="button" onclick={set(DecoderSetting::Shift((shift + 1).min(MAX_SHIFT)))}>{ "Shift Right →" }</button>
                        <button type="button" onclick={set(DecoderSetting::Shift(0))}>{ "Reset" }</button>
                    </div>
                </div>
            }
        }
        DecoderSetting::Reflect(on) => html! {
            <div class="decoder decoder-mirror">
                <button
                    id="mirror-toggle"
                    type="button"
                    aria-pressed={on.to_string()}
                    onclick={set(DecoderSetting::Reflect(!on))}
                >
                    { if *on { "Restore alphabet" } else { "Mirror alphabet (A↔Z)" } }
                </button>
            </div>
        },
        DecoderSetting::Keyword(key) => {
            let oninput = {
                let setting = setting.clone();
                Callback::from(move |e: InputEvent| {
                    setting.set(DecoderSetting::Keyword(input_value(&e)));
                })
            };
            html! {
                <div class="decoder decoder-key">
                    <label for="key-input">{ "Key" }</label>
                    <input id="key-input" type="text" value={key.clone()} placeholder="Enter the key..." {oninput} />
                </div>
            }
        }
        DecoderSetting::Year(year) => {
            let oninput = {
                let setting = setting.clone();
                Callback::from(move |e: InputEvent| {
                    if let Ok(value) = input_value(&e).parse::<u32>() {
                        setting.set(DecoderSetting::Year(value));
                    }
                })
            };
            html! {
                <div class="decoder decoder-year">
                    <label for="year-dial">{ "Temporal coordinates (year)" }</label>
                    <input id="year-dial" type="number" min="1000" max="2999" value={year.to_string()} {oninput} />
                </div>
            }
        }
        DecoderSetting::PeelLayers(count) => {
            let peeled = (*count).min(FIREWALL_LAYERS.len());
            let layers = FIREWALL_LAYERS.iter().enumerate().map(|(i, layer)| {
                let class = if i < peeled { "layer peeled" } else { "layer" };
                html! { <li key={i} {class}>{ layer.label() }</li> }
            });
            html! {
                <div class="decoder decoder-layers">
                    <ol class="layer-list">{ for layers }</ol>
                    <div class="decoder-buttons">
                        <button
                            id="peel-btn"
                            type="button"
                            disabled={peeled >= FIREWALL_LAYERS.len()}
                            onclick={set(DecoderSetting::PeelLayers(peeled + 1))}
                        >
                            { "Peel next layer" }
                        </button>
                        <button type="button" onclick={set(DecoderSetting::PeelLayers(0))}>{ "Reset" }</button>
                    </div>
                </div>
            }
        }
        DecoderSetting::Legend | DecoderSetting::References | DecoderSetting::Terminal => {
            Html::default()
        }
    }
}

fn extra_material(challenge: &CipherChallenge) -> Html {
    match &challenge.extra {
        Some(ChallengeExtra::SymbolMap(key)) => {
            let rows = key.pairs().map(|(plain, symbol)| {
                html! {
                    <li key={symbol.to_string()}>
                        <span class="symbol">{ symbol.to_string() }</span>
                        { " = " }
                        <span class="plain">{ plain.to_ascii_uppercase().to_string() }</span>
                    </li>
                }
            });
            html! {
                <div class="legend">
                    <h3>{ "Symbol Legend" }</h3>
                    <ul class="legend-grid">{ for rows }</ul>
                </div>
            }
        }
        Some(ChallengeExtra::Newspaper(pages)) => {
            let pages = pages.iter().enumerate().map(|(p, lines)| {
                let lines = lines.iter().enumerate().map(|(l, line)| {
                    html! { <li key={l}><span class="line-no">{ format!("{}.", l + 1) }</span>{ " " }{ *line }</li> }
                });
                html! {
                    <article key={p} class="newspaper-page">
                        <h4>{ format!("Page {}", p + 1) }</h4>
                        <ol class="newspaper-lines">{ for lines }</ol>
                    </article>
                }
            });
            html! { <div class="newspaper">{ for pages }</div> }
        }
        Some(ChallengeExtra::Layers(_)) | None => Html::default(),
    }
}

#[function_component(LevelPage)]
pub fn level_page(p: &Props) -> Html {
    let level = p.level;
    let challenge = use_memo(level.id, move |_| generate_challenge(level));
    let setting = use_state(|| DecoderSetting::initial(level.cipher));
    let answer = use_state(String::new);

    let decoded = preview(level, &challenge, &setting);

    let on_answer_input = {
        let answer = answer.clone();
        Callback::from(move |e: InputEvent| answer.set(input_value(&e)))
    };
    let submit = {
        let answer = answer.clone();
        let cb = p.on_submit.clone();
        move || cb.emit((*answer).clone())
    };
    let on_submit_click = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit())
    };
    let on_answer_key = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            submit();
        }
    });
    let on_hint = {
        let cb = p.on_hint.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_back = {
        let cb = p.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section id="level-page" class={classes!("level-page", format!("theme-{}", level.theme.slug()))}>
            <div class="level-heading">
                <h2>{ level.title }</h2>
                <p class="level-cipher">{ level.cipher.to_string() }</p>
                <p class="level-description">{ level.description }</p>
            </div>
            <div class="workbench">
                <div class="encoded">
                    <h3>{ "Encoded Message" }</h3>
                    <p id="encoded-text" class="mono">{ challenge.encoded.clone() }</p>
                </div>
                { extra_material(&challenge) }
                { decoder_controls(&setting) }
                <div class="decoded">
                    <h3>{ "Decoded Preview" }</h3>
                    <p id="decoded-text" class="mono">{ decoded }</p>
                </div>
            </div>
            <div class="answer">
                <label for="answer-input">{ "Enter your solution:" }</label>
                <input
                    id="answer-input"
                    type="text"
                    value={(*answer).clone()}
                    placeholder="Type the decoded message here..."
                    oninput={on_answer_input}
                    onkeydown={on_answer_key}
                />
                if p.incorrect {
                    <p id="answer-feedback" class="feedback error" role="alert">
                        { "Not quite. Keep decoding." }
                    </p>
                }
                <div class="answer-buttons">
                    <button id="submit-btn" type="button" class="btn-primary" onclick={on_submit_click}>
                        { "Submit Solution" }
                    </button>
                    <button id="hint-btn" type="button" class="btn-warning" onclick={on_hint}>
                        { format!("Hint ({}/{})", p.hints_used, level.hints.len()) }
                    </button>
                    <button type="button" class="btn-secondary" onclick={on_back}>
                        { "Back to Menu" }
                    </button>
                </div>
            </div>
        </section>
    }
}
