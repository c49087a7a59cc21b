pub mod game_complete;
pub mod header;
pub mod hint_modal;
pub mod level_selector;
pub mod modal;
