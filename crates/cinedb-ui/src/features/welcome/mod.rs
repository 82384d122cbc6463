//! Landing page with an auto-redirect countdown.
//!
//! # Design
//! - The countdown is a pure state machine; the view only owns the interval handle.
//! - The interval exists only while the machine is counting.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
