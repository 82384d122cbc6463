//! Data-access hooks for the movie collection.
//!
//! # Design
//! - Each hook owns its own `loading`/`error` state; nothing is shared across hooks.
//! - Failures are logged, stored as a display string and returned to the caller.
//! - In-flight requests are never cancelled; the last response to resolve wins.

pub(crate) mod delete;
pub(crate) mod fetch;
pub(crate) mod save;

pub(crate) use delete::use_delete_movie;
pub(crate) use fetch::use_fetch_list;
pub(crate) use save::use_save_movie;

use crate::services::error::ApiError;
use gloo::console;

fn log_failure(err: &ApiError) {
    let operation = err.operation().label();
    match err.status() {
        Some(status) => console::error!("request rejected", operation, status, err.to_string()),
        None => console::error!("request failed", operation, err.to_string()),
    }
}
