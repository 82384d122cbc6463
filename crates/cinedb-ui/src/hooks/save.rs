use super::log_failure;
use crate::models::{Movie, MovieId, MovieInput};
use crate::services::api::ApiClient;
use crate::services::error::ApiResult;
use std::rc::Rc;
use yew::prelude::*;

/// Create/update triggers sharing one `loading`/`error` pair.
#[derive(Clone)]
pub(crate) struct UseSaveMovieHandle {
    client: Rc<ApiClient>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
}

impl UseSaveMovieHandle {
    pub(crate) fn loading(&self) -> bool {
        *self.loading
    }

    pub(crate) fn error(&self) -> Option<String> {
        (*self.error).clone()
    }

    /// `POST` a new movie and return the stored record.
    pub(crate) async fn create_movie(&self, input: MovieInput) -> ApiResult<Movie> {
        self.begin();
        let result = self.client.create_movie(&input).await;
        self.finish(result)
    }

    /// `PUT` a full replacement for `id` and return the stored record.
    pub(crate) async fn update_movie(&self, id: MovieId, input: MovieInput) -> ApiResult<Movie> {
        self.begin();
        let result = self.client.update_movie(id, &input).await;
        self.finish(result)
    }

    fn begin(&self) {
        self.loading.set(true);
        self.error.set(None);
    }

    fn finish(&self, result: ApiResult<Movie>) -> ApiResult<Movie> {
        if let Err(err) = &result {
            log_failure(err);
            self.error.set(Some(err.to_string()));
        }
        self.loading.set(false);
        result
    }
}

#[hook]
pub(crate) fn use_save_movie(client: Rc<ApiClient>) -> UseSaveMovieHandle {
    let loading = use_state(|| false);
    let error = use_state(|| None as Option<String>);
    UseSaveMovieHandle {
        client,
        loading,
        error,
    }
}
