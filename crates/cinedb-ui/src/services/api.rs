//! HTTP client for the movie collection (REST).

use crate::core::config::item_url;
use crate::models::{Movie, MovieId, MovieInput};
use crate::services::error::{ApiError, ApiOperation, ApiResult};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Client bound to a single resource collection URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ApiClient {
    collection_url: String,
}

impl ApiClient {
    pub(crate) fn new(collection_url: impl Into<String>) -> Self {
        Self {
            collection_url: collection_url.into(),
        }
    }

    pub(crate) fn collection_url(&self) -> &str {
        &self.collection_url
    }

    /// `GET {collection}` decoded as a JSON array.
    pub(crate) async fn fetch_list<T: DeserializeOwned>(&self) -> ApiResult<Vec<T>> {
        let operation = ApiOperation::List;
        let response = Request::get(&self.collection_url)
            .send()
            .await
            .map_err(|err| transport(operation, &err))?;
        let response = ensure_success(operation, response)?;
        response
            .json::<Vec<T>>()
            .await
            .map_err(|err| decode(operation, &err))
    }

    /// `POST {collection}`; returns the record with its backend-assigned id.
    pub(crate) async fn create_movie(&self, input: &MovieInput) -> ApiResult<Movie> {
        let operation = ApiOperation::Create;
        let request = Request::post(&self.collection_url)
            .json(input)
            .map_err(|err| encode(operation, &err))?;
        let response = request
            .send()
            .await
            .map_err(|err| transport(operation, &err))?;
        let response = ensure_success(operation, response)?;
        response
            .json::<Movie>()
            .await
            .map_err(|err| decode(operation, &err))
    }

    /// `PUT {collection}/{id}` with a full replacement body.
    pub(crate) async fn update_movie(&self, id: MovieId, input: &MovieInput) -> ApiResult<Movie> {
        let operation = ApiOperation::Update;
        let request = Request::put(&item_url(&self.collection_url, id))
            .json(input)
            .map_err(|err| encode(operation, &err))?;
        let response = request
            .send()
            .await
            .map_err(|err| transport(operation, &err))?;
        let response = ensure_success(operation, response)?;
        response
            .json::<Movie>()
            .await
            .map_err(|err| decode(operation, &err))
    }

    /// `DELETE {collection}/{id}`; any response body is ignored.
    pub(crate) async fn delete_movie(&self, id: MovieId) -> ApiResult<()> {
        let operation = ApiOperation::Delete;
        let response = Request::delete(&item_url(&self.collection_url, id))
            .send()
            .await
            .map_err(|err| transport(operation, &err))?;
        ensure_success(operation, response)?;
        Ok(())
    }
}

fn ensure_success(operation: ApiOperation, response: Response) -> ApiResult<Response> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            operation,
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}

fn transport(operation: ApiOperation, err: &gloo_net::Error) -> ApiError {
    ApiError::Transport {
        operation,
        message: err.to_string(),
    }
}

fn encode(operation: ApiOperation, err: &gloo_net::Error) -> ApiError {
    ApiError::Encode {
        operation,
        message: err.to_string(),
    }
}

fn decode(operation: ApiOperation, err: &gloo_net::Error) -> ApiError {
    ApiError::Decode {
        operation,
        message: err.to_string(),
    }
}
