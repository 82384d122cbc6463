//! Single-slot toast host.
//!
//! # Design
//! - One timer per visible toast, keyed by toast id; replacing the toast drops the old timer.
//! - The timer reports the id it was armed for, so the slot can ignore stale expiries.

use crate::components::message::Message;
use crate::core::ui::ToastPosition;
use crate::models::Toast;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toast: Option<Toast>,
    #[prop_or_default]
    pub position: ToastPosition,
    pub on_expire: Callback<u64>,
    pub on_dismiss: Callback<()>,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    {
        let on_expire = props.on_expire.clone();
        let armed = props
            .toast
            .as_ref()
            .and_then(|toast| toast.auto_dismiss_after().map(|delay| (toast.id, delay)));
        use_effect_with_deps(
            move |armed: &Option<(u64, u32)>| {
                let handle = armed.map(|(id, duration_ms)| {
                    Timeout::new(duration_ms, move || on_expire.emit(id))
                });
                move || drop(handle)
            },
            armed,
        );
    }

    let Some(toast) = props.toast.as_ref() else {
        return html! {};
    };

    html! {
        <div class={classes!("toast", "z-50", props.position.as_class())} aria-live="polite" aria-atomic="true">
            <Message
                kind={toast.kind}
                on_close={props.on_dismiss.clone()}
                class="min-w-80 max-w-md shadow-lg"
            >
                {toast.message.clone()}
            </Message>
        </div>
    }
}
