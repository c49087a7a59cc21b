use cipher_quest_game::{LevelId, View, is_valid_level};
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/level/:id")]
    Level { id: LevelId },
    #[at("/complete")]
    Complete,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_view(view: View, current_level: LevelId) -> Self {
        match view {
            View::Menu => Self::Home,
            View::Level => Self::Level { id: current_level },
            View::Complete => Self::Complete,
        }
    }

    /// The view a route asks for, with the level it names. 404 keeps the
    /// current view.
    #[must_use]
    pub const fn to_view(&self) -> Option<(View, Option<LevelId>)> {
        match self {
            Self::Home => Some((View::Menu, None)),
            Self::Level { id } if is_valid_level(*id) => Some((View::Level, Some(*id))),
            Self::Level { .. } | Self::NotFound => None,
            Self::Complete => Some((View::Complete, None)),
        }
    }
}
