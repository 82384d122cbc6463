//! Context carrying the movie collection client.
//!
//! # Design
//! - One client per app boot, resolved from build-time configuration.
//! - Two contexts are equal when they target the same collection, so consumers
//!   only re-render (and hooks only refetch) on a real URL change.

use crate::app::config;
use crate::services::api::ApiClient;
use gloo::console;
use std::rc::Rc;

#[derive(Clone)]
pub(crate) struct ApiCtx {
    pub(crate) client: Rc<ApiClient>,
}

impl ApiCtx {
    pub(crate) fn new(collection_url: impl Into<String>) -> Self {
        Self {
            client: Rc::new(ApiClient::new(collection_url)),
        }
    }

    /// Client for the configured collection URL.
    pub(crate) fn from_config() -> Self {
        let url = config::collection_url();
        console::debug!("movie collection", url.clone());
        Self::new(url)
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
            || self.client.collection_url() == other.client.collection_url()
    }
}
