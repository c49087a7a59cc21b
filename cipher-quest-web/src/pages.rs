pub mod level;
pub mod not_found;
pub mod terminal;
