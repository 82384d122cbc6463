//! Shared UI atoms used across the pages.

pub(crate) mod button;
pub(crate) mod empty_state;
pub(crate) mod search_input;
pub(crate) mod title;

pub(crate) use button::Button;
pub(crate) use empty_state::EmptyState;
pub(crate) use search_input::SearchInput;
pub(crate) use title::Title;
