//! HTTP client helpers for the movie collection.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod error;
