#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod routing;
pub mod screen;
pub mod state;

#[cfg(target_arch = "wasm32")]
const CLOCK_TICK_MS: i32 = 1000;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    use crate::dom;
    use crate::storage::WebGameStorage;

    let model = use_reducer(|| state::GameModel::new(WebGameStorage, dom::now_ms()));
    let now_ms = use_state(dom::now_ms);
    {
        let now_ms = now_ms.clone();
        use_effect_with((), move |_| {
            let interval = dom::Interval::new(CLOCK_TICK_MS, move || now_ms.set(dom::now_ms()));
            if let Err(err) = &interval {
                log::warn!("clock unavailable: {}", dom::js_error_message(err));
            }
            move || drop(interval)
        });
    }

    let navigator = use_navigator();
    let route = use_route::<Route>();

    routing::use_sync_route_with_view(&model, navigator.clone(), route.clone());
    routing::use_sync_view_with_route(&model, route.clone());
    routing::use_leave_refused_route(&model, navigator.clone(), route.clone());

    let lost = matches!(route, Some(Route::NotFound));
    let on_action = {
        let model = model.clone();
        Callback::from(move |action: state::GameAction| {
            // Leaving the 404 page never changes the view, so move the route directly.
            if lost && action == state::GameAction::BackToMenu {
                if let Some(nav) = navigator.as_ref() {
                    nav.push(&Route::Home);
                }
            }
            model.dispatch(action);
        })
    };

    html! {
        <screen::GameScreen
            state={model.state().clone()}
            view={model.view()}
            feedback={model.feedback.clone()}
            now_ms={*now_ms}
            not_found={lost}
            {on_action}
        />
    }
}
