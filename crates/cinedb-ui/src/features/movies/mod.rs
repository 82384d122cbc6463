//! Movie catalog feature wiring.
//!
//! # Design
//! - Keep the CRUD workflow contained in a single feature slice.
//! - Restrict API calls to this feature layer and its hooks.
//! - The list is a cache of the backend and is rebuilt after every mutation.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
