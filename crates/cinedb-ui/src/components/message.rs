//! Inline alert with a severity icon and an optional close button.

use crate::core::ui::MessageKind;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct MessageProps {
    #[prop_or_default]
    pub kind: MessageKind,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Message)]
pub(crate) fn message(props: &MessageProps) -> Html {
    let style = props.kind.style();
    let close = props.on_close.clone().map(|on_close| {
        let onclick = Callback::from(move |_| on_close.emit(()));
        html! {
            <button class="btn btn-ghost btn-xs" aria-label="Cerrar mensaje" {onclick}>
                {"×"}
            </button>
        }
    });

    html! {
        <div class={classes!("alert", style.alert_class, "mb-4", props.class.clone())} role={style.role}>
            <span class="text-sm">{style.icon}</span>
            <div class="flex-1">{ for props.children.iter() }</div>
            {close.unwrap_or_default()}
        </div>
    }
}
