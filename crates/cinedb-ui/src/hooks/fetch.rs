use super::log_failure;
use crate::services::api::ApiClient;
use serde::de::DeserializeOwned;
use std::rc::Rc;
use yew::prelude::*;

/// Snapshot returned by [`use_fetch_list`].
pub(crate) struct UseFetchListHandle<T> {
    pub(crate) data: Rc<Vec<T>>,
    pub(crate) loading: bool,
    pub(crate) error: Option<String>,
    pub(crate) refetch: Callback<()>,
}

/// Load the collection on mount and whenever the collection URL changes.
#[hook]
pub(crate) fn use_fetch_list<T>(client: Rc<ApiClient>) -> UseFetchListHandle<T>
where
    T: DeserializeOwned + 'static,
{
    let data = use_state(|| Rc::new(Vec::<T>::new()));
    let loading = use_state(|| true);
    let error = use_state(|| None as Option<String>);
    let url = client.collection_url().to_string();

    let refetch = {
        let data = data.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_callback(
            move |(), client: &Rc<ApiClient>| {
                let client = Rc::clone(client);
                let data = data.clone();
                let loading = loading.clone();
                let error = error.clone();
                loading.set(true);
                error.set(None);
                yew::platform::spawn_local(async move {
                    match client.fetch_list::<T>().await {
                        Ok(list) => data.set(Rc::new(list)),
                        Err(err) => {
                            log_failure(&err);
                            error.set(Some(err.to_string()));
                        }
                    }
                    loading.set(false);
                });
            },
            client,
        )
    };

    {
        let refetch = refetch.clone();
        use_effect_with_deps(
            move |_url| {
                refetch.emit(());
                || ()
            },
            url,
        );
    }

    UseFetchListHandle {
        data: (*data).clone(),
        loading: *loading,
        error: (*error).clone(),
        refetch,
    }
}
