use crate::game::terminal::{ACCESS_NODES, NODE_COUNT, SYSTEM_NAME};
use crate::game::{Level, SecurityTerminal};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub level: &'static Level,
    pub hints_used: u32,
    #[prop_or_default]
    pub incorrect: bool,
    /// Receives the complete phrase once the final prompt accepts it.
    pub on_submit: Callback<String>,
    pub on_hint: Callback<()>,
    pub on_back: Callback<()>,
}

/// The security terminal of the multi-part level: five nodes, each opened
/// by a riddle answer, then a final prompt for the joined phrase.
#[function_component(TerminalPage)]
pub fn terminal_page(p: &Props) -> Html {
    let terminal = use_state(SecurityTerminal::new);
    let command = use_state(String::new);
    let final_input = use_state(String::new);

    let on_command_input = {
        let command = command.clone();
        Callback::from(move |e: InputEvent| {
            command.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_command_key = {
        let terminal = terminal.clone();
        let command = command.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() != "Enter" || command.trim().is_empty() {
                return;
            }
            let mut next = (*terminal).clone();
            let event = next.execute(command.trim());
            log::debug!("terminal command -> {event:?}");
            terminal.set(next);
            command.set(String::new());
        })
    };
    let on_final_input = {
        let final_input = final_input.clone();
        Callback::from(move |e: InputEvent| {
            final_input.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };
    let on_final_submit = {
        let terminal = terminal.clone();
        let final_input = final_input.clone();
        let cb = p.on_submit.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*terminal).clone();
            let accepted = next.submit_final(&final_input);
            terminal.set(next);
            if accepted {
                cb.emit((*final_input).clone());
            }
        })
    };
    let on_hint = {
        let cb = p.on_hint.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_back = {
        let cb = p.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let lines = terminal.output().iter().enumerate().map(|(i, line)| {
        html! { <div key={i} class="terminal-line">{ line.clone() }</div> }
    });
    let nodes = ACCESS_NODES.iter().map(|node| {
        let unlocked = terminal.is_unlocked(node.id);
        let active = terminal.current_node() == Some(node.id);
        let class = classes!(
            "node",
            unlocked.then_some("unlocked"),
            active.then_some("active")
        );
        html! {
            <li key={node.id} id={format!("node-{}", node.id)} {class}>
                <span class="node-name">{ node.name }</span>
                <span class="node-state">{ if unlocked { "UNLOCKED" } else { "LOCKED" } }</span>
            </li>
        }
    });
    let prompt = terminal
        .current_node()
        .map_or_else(|| "root@silo:~$".to_string(), |id| format!("node{id}@silo:~$"));

    html! {
        <section id="level-page" class={classes!("level-page", "terminal-page", format!("theme-{}", p.level.theme.slug()))}>
            <div class="level-heading">
                <h2>{ p.level.title }</h2>
                <p class="level-cipher">{ p.level.cipher.to_string() }</p>
                <p class="level-description">{ p.level.description }</p>
            </div>
            <div class="terminal">
                <div class="terminal-header">{ SYSTEM_NAME }</div>
                <div id="terminal-output" class="terminal-output" role="log" aria-live="polite">
                    { for lines }
                </div>
                <div class="terminal-input">
                    <label for="terminal-command" class="terminal-prompt">{ prompt }</label>
                    <input
                        id="terminal-command"
                        type="text"
                        autocomplete="off"
                        spellcheck="false"
                        value={(*command).clone()}
                        placeholder="Type a command..."
                        oninput={on_command_input}
                        onkeydown={on_command_key}
                    />
                </div>
            </div>
            <aside class="node-status">
                <h3>{ "Access Nodes" }</h3>
                <ul>{ for nodes }</ul>
                <p id="node-progress">
                    { format!("Progress: {}/{NODE_COUNT} nodes unlocked", terminal.unlocked_count()) }
                </p>
            </aside>
            if terminal.final_open() {
                <div class="final-terminal">
                    <label for="final-phrase">{ "Enter the complete decryption string:" }</label>
                    <textarea
                        id="final-phrase"
                        rows="3"
                        value={(*final_input).clone()}
                        oninput={on_final_input}
                    />
                    <button id="final-submit" type="button" class="btn-primary" onclick={on_final_submit}>
                        { "Submit Final Phrase" }
                    </button>
                </div>
            }
            if p.incorrect {
                <p id="answer-feedback" class="feedback error" role="alert">
                    { "Not quite. Keep decoding." }
                </p>
            }
            <div class="answer-buttons">
                <button id="hint-btn" type="button" class="btn-warning" onclick={on_hint}>
                    { format!("Hint ({}/{})", p.hints_used, p.level.hints.len()) }
                </button>
                <button type="button" class="btn-secondary" onclick={on_back}>
                    { "Back to Menu" }
                </button>
            </div>
        </section>
    }
}
