//! Application root: context, router and boot.
//!
//! # Design
//! - Pages keep their own state; the root only provides the API client and routing.
//! - Unknown paths redirect to the welcome page.

use crate::app::api::ApiCtx;
use crate::features::movies::view::DashboardPage;
use crate::features::welcome::view::WelcomePage;
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) mod api;
pub(crate) mod config;
mod routes;

#[function_component(CineApp)]
pub(crate) fn cine_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::from_config(), ());

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Welcome => html! { <WelcomePage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Welcome} /> },
    }
}

/// Mount the app into `#root`, or the document body when it is missing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CineApp>::with_root(root).render();
    } else {
        yew::Renderer::<CineApp>::new().render();
    }
}
