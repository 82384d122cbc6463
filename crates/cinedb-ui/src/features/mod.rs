//! Feature slices (state, logic, actions and views per page).

pub mod movies;
pub mod welcome;
