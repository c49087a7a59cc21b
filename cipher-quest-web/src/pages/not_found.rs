use yew::prelude::*;

/// Shown for any path the router does not know.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section id="not-found" class="panel not-found" aria-live="assertive">
            <h1>{ "Signal Lost" }</h1>
            <p>{ "This page is not part of the labyrinth." }</p>
            <button type="button" onclick={go_home}>{ "Back to Menu" }</button>
        </section>
    }
}
