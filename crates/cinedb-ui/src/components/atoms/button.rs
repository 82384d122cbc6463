use crate::core::ui::{BUTTON_DISABLED_CLASS, ButtonSize, ButtonVariant};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("button"))]
    pub r#type: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    let classes = classes!(
        "btn",
        props.variant.as_class(),
        props.size.as_class(),
        props.disabled.then_some(BUTTON_DISABLED_CLASS),
        props.class.clone()
    );

    html! {
        <button
            class={classes}
            disabled={props.disabled}
            type={props.r#type.clone()}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
