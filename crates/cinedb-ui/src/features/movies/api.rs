//! Mutation follow-up for the movie dashboard.
//!
//! # Design
//! - A successful mutation always ends with a list refetch and a success toast.
//! - A failed mutation only shows an error toast; the cached list is left as is.

use crate::core::toast::ToastAction;
use crate::features::movies::actions::{MutationKind, settle_mutation};
use crate::services::error::ApiResult;
use gloo::console;
use std::future::Future;
use yew::Callback;

/// Await `mutation`, then apply the dashboard's success/failure post-conditions.
///
/// The refetch is issued only after the mutation resolved successfully.
pub(crate) async fn after_mutation<T>(
    kind: MutationKind,
    mutation: impl Future<Output = ApiResult<T>>,
    refetch: &Callback<()>,
    toasts: &Callback<ToastAction>,
) -> Option<T> {
    let result = mutation.await;
    match &result {
        Ok(_) => console::debug!("mutation accepted", kind.success_message()),
        Err(err) => console::debug!("mutation rejected", kind.failure_message(), err.to_string()),
    }
    settle_mutation(kind, result, refetch, toasts)
}
