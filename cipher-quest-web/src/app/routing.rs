#[cfg(target_arch = "wasm32")]
use crate::app::state::GameModel;
#[cfg(any(target_arch = "wasm32", test))]
use crate::app::state::{Feedback, GameAction};
#[cfg(any(target_arch = "wasm32", test))]
use crate::game::{GameError, LevelId, View};
#[cfg(any(target_arch = "wasm32", test))]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use crate::storage::WebGameStorage;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

#[cfg(any(target_arch = "wasm32", test))]
fn next_route_for_view(
    view: View,
    current_level: LevelId,
    current_route: Option<&Route>,
) -> Option<Route> {
    let new_route = Route::from_view(view, current_level);
    if Some(&new_route) == current_route {
        None
    } else {
        Some(new_route)
    }
}

/// Action that brings the game in line with a route the player navigated
/// to. Locked levels are still requested; the game refuses them.
#[cfg(any(target_arch = "wasm32", test))]
fn next_action_for_route(
    view: View,
    current_level: LevelId,
    route: Option<&Route>,
) -> Option<GameAction> {
    let (wanted, level) = route.and_then(Route::to_view)?;
    match (wanted, level) {
        (View::Level, Some(id)) if view != View::Level || id != current_level => {
            Some(GameAction::SelectLevel(id))
        }
        (View::Menu, _) if view == View::Level => Some(GameAction::BackToMenu),
        _ => None,
    }
}

/// A level route the game refused stays on the menu, so the URL goes home.
#[cfg(any(target_arch = "wasm32", test))]
fn route_after_refusal(feedback: Option<&Feedback>, route: Option<&Route>) -> Option<Route> {
    let Some(Route::Level { id }) = route else {
        return None;
    };
    match feedback {
        Some(Feedback::Rejected(GameError::LevelLocked(refused) | GameError::UnknownLevel(refused)))
            if refused == id =>
        {
            Some(Route::Home)
        }
        _ => None,
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_route_with_view(
    model: &UseReducerHandle<GameModel<WebGameStorage>>,
    navigator: Option<Navigator>,
    active_route: Option<Route>,
) {
    let view = model.view();
    let level = model.state().current_level;
    // The initial URL is the route's to settle, not the view's.
    let mounted = use_mut_ref(|| false);
    use_effect_with((view, level), move |(view, level)| {
        if !mounted.replace(true) {
            return;
        }
        if let (Some(nav), Some(new_route)) = (
            navigator.as_ref(),
            next_route_for_view(*view, *level, active_route.as_ref()),
        ) {
            nav.push(&new_route);
        }
    });
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_view_with_route(
    model: &UseReducerHandle<GameModel<WebGameStorage>>,
    route: Option<Route>,
) {
    let model = model.clone();
    use_effect_with(route, move |route| {
        if let Some(action) =
            next_action_for_route(model.view(), model.state().current_level, route.as_ref())
        {
            model.dispatch(action);
        }
    });
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_leave_refused_route(
    model: &UseReducerHandle<GameModel<WebGameStorage>>,
    navigator: Option<Navigator>,
    route: Option<Route>,
) {
    let feedback = model.feedback.clone();
    use_effect_with((feedback, route), move |(feedback, route)| {
        if let (Some(nav), Some(home)) = (
            navigator.as_ref(),
            route_after_refusal(feedback.as_ref(), route.as_ref()),
        ) {
            log::debug!("level route refused, returning to {home:?}");
            nav.push(&home);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_route_for_view_skips_when_unchanged() {
        let route = Route::Level { id: 4 };
        assert!(next_route_for_view(View::Level, 4, Some(&route)).is_none());
        assert_eq!(
            next_route_for_view(View::Level, 5, Some(&route)),
            Some(Route::Level { id: 5 })
        );
        assert_eq!(
            next_route_for_view(View::Menu, 5, Some(&route)),
            Some(Route::Home)
        );
        assert_eq!(
            next_route_for_view(View::Complete, 10, None),
            Some(Route::Complete)
        );
    }

    #[test]
    fn deep_link_requests_level() {
        assert_eq!(
            next_action_for_route(View::Menu, 1, Some(&Route::Level { id: 3 })),
            Some(GameAction::SelectLevel(3))
        );
        assert_eq!(
            next_action_for_route(View::Level, 2, Some(&Route::Level { id: 3 })),
            Some(GameAction::SelectLevel(3))
        );
        assert!(
            next_action_for_route(View::Level, 3, Some(&Route::Level { id: 3 })).is_none()
        );
        assert!(
            next_action_for_route(View::Menu, 1, Some(&Route::Level { id: 11 })).is_none()
        );
    }

    #[test]
    fn refused_level_route_returns_home() {
        let locked = Feedback::Rejected(GameError::LevelLocked(4));
        assert_eq!(
            route_after_refusal(Some(&locked), Some(&Route::Level { id: 4 })),
            Some(Route::Home)
        );
        assert!(route_after_refusal(Some(&locked), Some(&Route::Level { id: 2 })).is_none());
        assert!(route_after_refusal(Some(&locked), Some(&Route::Home)).is_none());
        assert!(route_after_refusal(None, Some(&Route::Level { id: 4 })).is_none());
        assert!(
            route_after_refusal(Some(&Feedback::Incorrect), Some(&Route::Level { id: 4 }))
                .is_none()
        );
    }

    #[test]
    fn back_navigation_leaves_level() {
        assert_eq!(
            next_action_for_route(View::Level, 2, Some(&Route::Home)),
            Some(GameAction::BackToMenu)
        );
        assert!(next_action_for_route(View::Menu, 2, Some(&Route::Home)).is_none());
        assert!(next_action_for_route(View::Menu, 2, Some(&Route::NotFound)).is_none());
        assert!(next_action_for_route(View::Menu, 2, None).is_none());
    }

    #[test]
    fn route_view_mapping_round_trips() {
        for (view, level) in [(View::Menu, 1), (View::Level, 7), (View::Complete, 10)] {
            let route = Route::from_view(view, level);
            let (mapped, id) = route.to_view().expect("route maps to a view");
            assert_eq!(mapped, view);
            if view == View::Level {
                assert_eq!(id, Some(level));
            }
        }
        assert!(Route::NotFound.to_view().is_none());
    }
}
