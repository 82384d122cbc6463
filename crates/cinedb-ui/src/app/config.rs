//! Browser-side boot configuration.

use crate::core::config::resolve_collection_url;
use crate::features::movies::state::MIN_YEAR;

/// Collection URL baked in at build time via `CINEDB_API_URL`, else the local default.
pub(crate) fn collection_url() -> String {
    resolve_collection_url(option_env!("CINEDB_API_URL"))
}

/// Calendar year from the browser clock, used for the release-year upper bound.
pub(crate) fn current_year() -> i32 {
    i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(MIN_YEAR)
}
