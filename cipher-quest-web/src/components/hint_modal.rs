use crate::components::modal::Modal;
use crate::game::Level;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub level: &'static Level,
    pub hints_used: u32,
    pub on_use_hint: Callback<()>,
    pub on_close: Callback<()>,
}

/// Offers the next hint of a level. Past hints stay listed; the offer
/// disappears once every hint has been used.
#[function_component(HintModal)]
pub fn hint_modal(p: &Props) -> Html {
    let used = usize::try_from(p.hints_used).unwrap_or(usize::MAX);
    let next = p.level.hint(used);

    let revealed = p.level.hints.iter().take(used).enumerate().map(|(i, hint)| {
        html! { <li key={i}><strong>{ format!("Hint {}:", i + 1) }</strong>{ " " }{ *hint }</li> }
    });

    let use_hint = {
        let cb = p.on_use_hint.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let cancel = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let description = AttrValue::from(format!("Level {}: {}", p.level.id, p.level.title));

    html! {
        <Modal
            open={p.open}
            title={AttrValue::from("Need a Hint?")}
            description={Some(description)}
            on_close={p.on_close.clone()}
        >
            if used > 0 {
                <ol class="hint-list">{ for revealed }</ol>
            }
            if next.is_some() {
                <p class="hint-offer">
                    { format!(
                        "Would you like to use a hint? This will reduce your score by {} points.",
                        p.level.hint_penalty
                    ) }
                </p>
            } else {
                <p class="hint-none">{ "No more hints available for this level." }</p>
            }
            <div class="modal__actions">
                if next.is_some() {
                    <button id="use-hint-btn" type="button" class="btn-warning" onclick={use_hint}>
                        { format!("Use Hint (-{} points)", p.level.hint_penalty) }
                    </button>
                }
                <button type="button" class="btn-secondary" onclick={cancel}>{ "Cancel" }</button>
            </div>
        </Modal>
    }
}
