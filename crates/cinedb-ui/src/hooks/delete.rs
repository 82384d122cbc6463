use super::log_failure;
use crate::models::MovieId;
use crate::services::api::ApiClient;
use crate::services::error::ApiResult;
use std::rc::Rc;
use yew::prelude::*;

/// Delete trigger with its own `loading`/`error` pair.
#[derive(Clone)]
pub(crate) struct UseDeleteMovieHandle {
    client: Rc<ApiClient>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
}

impl UseDeleteMovieHandle {
    pub(crate) fn loading(&self) -> bool {
        *self.loading
    }

    pub(crate) fn error(&self) -> Option<String> {
        (*self.error).clone()
    }

    /// `DELETE` the movie; `Ok(true)` once the backend accepted it.
    pub(crate) async fn delete_movie(&self, id: MovieId) -> ApiResult<bool> {
        self.loading.set(true);
        self.error.set(None);
        let result = self.client.delete_movie(id).await.map(|()| true);
        if let Err(err) = &result {
            log_failure(err);
            self.error.set(Some(err.to_string()));
        }
        self.loading.set(false);
        result
    }
}

#[hook]
pub(crate) fn use_delete_movie(client: Rc<ApiClient>) -> UseDeleteMovieHandle {
    let loading = use_state(|| false);
    let error = use_state(|| None as Option<String>);
    UseDeleteMovieHandle {
        client,
        loading,
        error,
    }
}
