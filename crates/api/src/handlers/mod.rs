pub mod form;
pub mod items;
pub mod stories;
pub mod universes;
